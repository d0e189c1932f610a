use tabula::{Value, ValueRecord};
use tests::*;

fn user(id: i64, name: &str, dept_id: i64, hired: &str) -> ValueRecord {
    ValueRecord::from_vec(vec![
        Value::from(id),
        Value::from(name),
        Value::from(dept_id),
        Value::from(hired),
    ])
}

async fn fetch_all_returns_rows_with_their_shape(s: impl Setup) {
    let mut f = s.setup().await;
    let staff = f.staff().await;

    assert_ok!(f.session.select_table(&staff.users).await);
    let rows = assert_ok!(f.session.fetch_all().await);

    let names: Vec<_> = rows.column_names().collect();
    assert_eq!(names, ["id", "name", "dept_id", "hired"]);
    assert_eq!(rows.column_index("hired"), Some(3));

    let mut all = rows.into_rows();
    all.sort_by_key(|row| row[0].as_i64());
    assert_eq!(
        all,
        [
            user(1, "Ada", 1, "2020-01-15"),
            user(2, "Grace", 2, "2019-07-01"),
        ]
    );

    f.teardown().await;
}

async fn fetch_all_of_empty_table(s: impl Setup) {
    let mut f = s.setup().await;
    let notes = f.create_table("notes", &[("body", "VARCHAR(200)")], &[]).await;

    assert_ok!(f.session.select_table(&notes).await);
    let rows = assert_ok!(f.session.fetch_all().await);
    assert!(rows.is_empty());
    assert_eq!(rows.columns().len(), 2);

    f.teardown().await;
}

async fn fetch_one_matches_fetch_all(s: impl Setup) {
    let mut f = s.setup().await;
    let staff = f.staff().await;

    assert_ok!(f.session.select_table(&staff.users).await);
    let all = assert_ok!(f.session.fetch_all().await);

    for row in all.iter() {
        let id = row[0].clone();
        let one = assert_ok!(f.session.fetch_one(id).await);
        assert_eq!(one.as_ref(), Some(row));
    }

    assert_none!(assert_ok!(f.session.fetch_one(42).await));

    f.teardown().await;
}

async fn fetch_one_takes_first_of_several_matches(s: impl Setup) {
    let mut f = s.setup().await;

    // `code` comes first, so it is the identifier even though it repeats.
    let table = f.table("codes");
    let sql = format!(
        "CREATE TABLE {} ({} VARCHAR(10), {} VARCHAR(20));",
        f.quote(&table),
        f.quote("code"),
        f.quote("label")
    );
    f.exec(&sql).await;
    f.seed(&table, ["code", "label"], &[["'a'", "'first'"], ["'a'", "'second'"]])
        .await;

    assert_ok!(f.session.select_table(&table).await);
    let row = assert_some!(assert_ok!(f.session.fetch_one("a").await));
    assert_eq!(row[0], Value::from("a"));

    let sql = format!("DROP TABLE {};", f.quote(&table));
    f.exec(&sql).await;
    f.teardown().await;
}

async fn follow_reference_reads_referenced_rows(s: impl Setup) {
    let mut f = s.setup().await;
    let staff = f.staff().await;

    assert_ok!(f.session.select_table(&staff.users).await);

    let rows = assert_some!(assert_ok!(f.session.follow_reference("dept_id", 2).await));
    assert_eq!(rows.len(), 1);
    assert_eq!(rows.rows()[0][1], Value::from("Ops"));
    let names: Vec<_> = rows.column_names().collect();
    assert_eq!(names, ["id", "name"]);

    // Not a reference.
    assert_none!(assert_ok!(f.session.follow_reference("name", "Ada").await));

    // Dangling keys read as no rows.
    let rows = assert_some!(assert_ok!(f.session.follow_reference("dept_id", 99).await));
    assert!(rows.is_empty());

    // Following does not move the selection.
    assert_eq!(f.session.selected_table(), Some(staff.users.as_str()));

    f.teardown().await;
}

async fn fetch_referenced_reads_any_table(s: impl Setup) {
    let mut f = s.setup().await;
    let staff = f.staff().await;

    assert_ok!(f.session.select_table(&staff.departments).await);
    let rows = assert_ok!(
        f.session
            .fetch_referenced(&staff.users, "dept_id", 1)
            .await
    );
    assert_eq!(rows.len(), 1);
    assert_eq!(rows.rows()[0][1], Value::from("Ada"));

    f.teardown().await;
}

async fn unknown_names_never_reach_sql(s: impl Setup) {
    let mut f = s.setup().await;
    let staff = f.staff().await;

    assert_ok!(f.session.select_table(&staff.users).await);

    let err = assert_err!(
        f.session
            .fetch_referenced(&staff.users, "name = name OR 1", 1)
            .await
    );
    assert!(err.is_query());
    assert!(err.to_string().contains("has no column"));

    let missing = format!("{}; DROP TABLE {}", staff.users, staff.departments);
    let err = assert_err!(f.session.fetch_referenced(&missing, "id", 1).await);
    assert!(err.is_query());
    assert!(err.to_string().contains("does not exist"));

    // Still there.
    assert_ok!(f.session.select_table(&staff.departments).await);

    f.teardown().await;
}

async fn awkward_identifiers_are_quoted(s: impl Setup) {
    let mut f = s.setup().await;

    let odd = match f.flavor() {
        Flavor::Mysql => "we`ird name",
        Flavor::Sqlite => "we\"ird name",
    };

    let table = f.create_table(odd, &[("select", "VARCHAR(20)")], &[]).await;
    f.seed(&table, ["select"], &[["'kept'"]]).await;

    assert_ok!(f.session.select_table(&table).await);
    let rows = assert_ok!(f.session.fetch_all().await);
    assert_eq!(rows.rows()[0][1], Value::from("kept"));

    let id = assert_some!(assert_ok!(f.session.insert(vec![Value::from("also")]).await));
    let row = assert_some!(assert_ok!(f.session.fetch_one(id).await));
    assert_eq!(row[1], Value::from("also"));

    f.teardown().await;
}

tests!(
    fetch_all_returns_rows_with_their_shape,
    fetch_all_of_empty_table,
    fetch_one_matches_fetch_all,
    fetch_one_takes_first_of_several_matches,
    follow_reference_reads_referenced_rows,
    fetch_referenced_reads_any_table,
    unknown_names_never_reach_sql,
    awkward_identifiers_are_quoted,
);
