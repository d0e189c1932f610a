use tabula::{FieldValue, SelectedTable, Value};
use tests::*;

async fn record_operations_require_a_selected_table(s: impl Setup) {
    let mut f = s.setup().await;
    f.staff().await;

    let session = &mut f.session;
    assert_eq!(session.selected(), &SelectedTable::NoTableSelected);
    assert_none!(session.selected_table());

    assert!(assert_err!(session.columns().await).is_precondition_failed());
    assert!(assert_err!(session.identifier_column().await).is_precondition_failed());
    assert!(assert_err!(session.foreign_keys().await).is_precondition_failed());
    assert!(assert_err!(session.fetch_all().await).is_precondition_failed());
    assert!(assert_err!(session.fetch_one(1).await).is_precondition_failed());
    assert!(assert_err!(session.fetch_referenced("users", "id", 1).await).is_precondition_failed());
    assert!(assert_err!(session.follow_reference("dept_id", 1).await).is_precondition_failed());
    assert!(assert_err!(session.insert_form().await).is_precondition_failed());
    assert!(assert_err!(session.insert(vec![]).await).is_precondition_failed());
    assert!(assert_err!(session.submit(vec![]).await).is_precondition_failed());
    assert!(assert_err!(session.delete_by_identifier_value(1).await).is_precondition_failed());

    let err = assert_err!(session.fetch_all().await);
    assert_eq!(err.to_string(), "precondition failed: no table selected");

    f.teardown().await;
}

async fn selecting_missing_table_keeps_selection(s: impl Setup) {
    let mut f = s.setup().await;
    let staff = f.staff().await;
    let missing = f.table("nope");

    let err = assert_err!(f.session.select_table(&missing).await);
    assert!(err.is_schema());
    assert_eq!(f.session.selected(), &SelectedTable::NoTableSelected);

    assert_ok!(f.session.select_table(&staff.users).await);
    assert_eq!(f.session.selected_table(), Some(staff.users.as_str()));

    let err = assert_err!(f.session.select_table(&missing).await);
    assert!(err.is_schema());
    assert_eq!(
        f.session.selected(),
        &SelectedTable::TableSelected(staff.users.clone())
    );

    f.teardown().await;
}

async fn selecting_another_table_replaces_selection(s: impl Setup) {
    let mut f = s.setup().await;
    let staff = f.staff().await;

    assert_ok!(f.session.select_table(&staff.users).await);
    assert_eq!(assert_ok!(f.session.fetch_all().await).len(), 2);

    assert_ok!(f.session.select_table(&staff.departments).await);
    assert_eq!(f.session.selected_table(), Some(staff.departments.as_str()));
    assert_eq!(assert_ok!(f.session.fetch_all().await).len(), 3);

    f.teardown().await;
}

async fn disconnected_session_reports_closed_connection(s: impl Setup) {
    let mut f = s.setup().await;
    let staff = f.staff().await;

    assert_ok!(f.session.select_table(&staff.users).await);

    f.drop_tables().await;
    let session = &mut f.session;

    assert_ok!(session.disconnect().await);
    assert!(!session.is_connected());

    let err = assert_err!(session.fetch_all().await);
    assert!(err.is_query());
    assert!(err.root().is_connection_closed());

    let err = assert_err!(session.delete_by_identifier_value(1).await);
    assert!(err.is_mutation());
    assert!(err.root().is_connection_closed());

    let err = assert_err!(session.columns().await);
    assert!(err.is_schema());

    let err = assert_err!(session.tables().await);
    assert!(err.is_schema());
    assert!(err.root().is_connection_closed());

    let err = assert_err!(session.submit(vec![FieldValue::Value(Value::Null)]).await);
    assert!(err.root().is_connection_closed());

    // Closing twice is fine.
    assert_ok!(session.disconnect().await);
}

tests!(
    record_operations_require_a_selected_table,
    selecting_missing_table_keeps_selection,
    selecting_another_table_replaces_selection,
    disconnected_session_reports_closed_connection,
);
