use tabula::{DateParts, FieldKind, FieldValue, Value};
use tests::*;

async fn insert_then_fetch_one(s: impl Setup) {
    let mut f = s.setup().await;
    let staff = f.staff().await;

    assert_ok!(f.session.select_table(&staff.users).await);

    let values = vec![Value::from("Linus"), Value::from(3), Value::from("2022-02-28")];
    let id = assert_some!(assert_ok!(f.session.insert(values.clone()).await));
    assert_eq!(id, 3);

    let row = assert_some!(assert_ok!(f.session.fetch_one(id).await));
    assert_eq!(row[0], Value::from(3));
    assert_eq!(&row[1..], &values[..]);

    assert_eq!(assert_ok!(f.session.fetch_all().await).len(), 3);

    f.teardown().await;
}

async fn insert_checks_value_count(s: impl Setup) {
    let mut f = s.setup().await;
    let staff = f.staff().await;

    assert_ok!(f.session.select_table(&staff.users).await);

    let err = assert_err!(f.session.insert(vec![Value::from("Linus")]).await);
    assert!(err.is_mutation());
    assert!(err.to_string().contains("expected 3 values"));

    assert_eq!(assert_ok!(f.session.fetch_all().await).len(), 2);

    f.teardown().await;
}

async fn insert_accepts_nulls(s: impl Setup) {
    let mut f = s.setup().await;
    let staff = f.staff().await;

    assert_ok!(f.session.select_table(&staff.users).await);

    let id = assert_some!(assert_ok!(
        f.session
            .insert(vec![Value::from("Nobody"), Value::Null, Value::Null])
            .await
    ));
    let row = assert_some!(assert_ok!(f.session.fetch_one(id).await));
    assert!(row[2].is_null());
    assert_eq!(row[3].to_string(), "NULL");

    f.teardown().await;
}

async fn delete_then_fetch_one(s: impl Setup) {
    let mut f = s.setup().await;
    let staff = f.staff().await;

    assert_ok!(f.session.select_table(&staff.users).await);

    assert_eq!(assert_ok!(f.session.delete_by_identifier_value(1).await), 1);
    assert_none!(assert_ok!(f.session.fetch_one(1).await));

    // Deleting again is a no-op.
    assert_eq!(assert_ok!(f.session.delete_by_identifier_value(1).await), 0);

    let rows = assert_ok!(f.session.fetch_all().await);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows.rows()[0][1], Value::from("Grace"));

    f.teardown().await;
}

async fn insert_form_describes_fields(s: impl Setup) {
    let mut f = s.setup().await;
    let staff = f.staff().await;

    assert_ok!(f.session.select_table(&staff.users).await);
    let form = assert_ok!(f.session.insert_form().await);

    assert_eq!(form.table(), staff.users);

    let names: Vec<_> = form.fields().iter().map(|f| f.column.name.as_str()).collect();
    assert_eq!(names, ["name", "dept_id", "hired"]);

    assert_eq!(assert_some!(form.field("name")).kind, FieldKind::Text);
    assert_eq!(assert_some!(form.field("hired")).kind, FieldKind::Date);

    match &assert_some!(form.field("dept_id")).kind {
        FieldKind::ForeignKey(binding) => {
            let mut choices = binding.choices();
            choices.sort();
            assert_eq!(choices, ["Ops", "Sales", "Support"]);
        }
        kind => panic!("expected a foreign key field; actual={kind:?}"),
    }

    f.teardown().await;
}

async fn submit_resolves_form_input(s: impl Setup) {
    let mut f = s.setup().await;
    let staff = f.staff().await;

    assert_ok!(f.session.select_table(&staff.users).await);

    let id = assert_some!(assert_ok!(
        f.session
            .submit(vec![
                FieldValue::Text("  Edsger  ".into()),
                FieldValue::Choice("Support".into()),
                FieldValue::Date(assert_ok!(DateParts::new(2023, 9, 4))),
            ])
            .await
    ));

    let row = assert_some!(assert_ok!(f.session.fetch_one(id).await));
    assert_eq!(row[1], Value::from("Edsger"));
    assert_eq!(row[2], Value::from(3));
    assert_eq!(row[3], Value::from("2023-09-04"));

    f.teardown().await;
}

async fn submit_rejects_unknown_choice(s: impl Setup) {
    let mut f = s.setup().await;
    let staff = f.staff().await;

    assert_ok!(f.session.select_table(&staff.users).await);

    let err = assert_err!(
        f.session
            .submit(vec![
                FieldValue::Text("Edsger".into()),
                FieldValue::Choice("Marketing".into()),
                FieldValue::Text("2023-09-04".into()),
            ])
            .await
    );
    assert!(err.is_validation());

    assert_eq!(assert_ok!(f.session.fetch_all().await).len(), 2);

    f.teardown().await;
}

tests!(
    insert_then_fetch_one,
    insert_checks_value_count,
    insert_accepts_nulls,
    delete_then_fetch_one,
    insert_form_describes_fields,
    submit_resolves_form_input,
    submit_rejects_unknown_choice,
);
