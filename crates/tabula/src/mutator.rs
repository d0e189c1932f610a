//! Inserts and deletes.
//!
//! Each mutation is a single auto-committed statement. There is no
//! transaction and no rollback path.

use crate::{introspect, Connection, Error, Result, Value};

use tabula_core::{
    bail,
    stmt::{Delete, Filter, Insert},
};

/// Inserts one row into `table`.
///
/// `values` are aligned to the non-identifier columns, i.e. every column but
/// the first, in declared order. The identifier column is left for the
/// database to generate. Foreign-key values must already be resolved to keys
/// and date values composed as `YYYY-MM-DD` text.
///
/// Returns the identifier the database assigned, when it reports one.
pub async fn insert(
    conn: &mut dyn Connection,
    table: &str,
    values: Vec<Value>,
) -> Result<Option<u64>> {
    insert_row(conn, table, values)
        .await
        .map_err(|err| err.context(Error::mutation(format!("inserting into `{table}`"))))
}

/// Deletes the rows of `table` whose `id_column` equals `value` and returns
/// how many were removed. Deleting a key that is not present removes nothing.
///
/// The caller is responsible for confirming the deletion with the user.
pub async fn delete_by_identifier_value(
    conn: &mut dyn Connection,
    table: &str,
    id_column: &str,
    value: impl Into<Value>,
) -> Result<u64> {
    let value = value.into();

    delete_rows(conn, table, id_column, value)
        .await
        .map_err(|err| {
            err.context(Error::mutation(format!(
                "deleting from `{table}` by `{id_column}`"
            )))
        })
}

async fn insert_row(
    conn: &mut dyn Connection,
    table: &str,
    values: Vec<Value>,
) -> Result<Option<u64>> {
    let columns = introspect::describe(conn, table).await?;
    let targets: Vec<String> = columns.iter().skip(1).map(|c| c.name.clone()).collect();

    if values.len() != targets.len() {
        bail!(
            "expected {} values, one per non-identifier column, got {}",
            targets.len(),
            values.len()
        );
    }

    let stmt = Insert::new(table, targets, values);
    let (affected, last_insert_id) = conn.exec(&stmt.into()).await?.into_count()?;

    tracing::debug!(table, affected, ?last_insert_id, "inserted row");
    Ok(last_insert_id)
}

async fn delete_rows(
    conn: &mut dyn Connection,
    table: &str,
    id_column: &str,
    value: Value,
) -> Result<u64> {
    let columns = introspect::describe(conn, table).await?;
    introspect::ensure_column(&columns, table, id_column)?;

    let stmt = Delete::new(table, Filter::eq(id_column, value));
    let (affected, _) = conn.exec(&stmt.into()).await?.into_count()?;

    tracing::debug!(table, affected, "deleted rows");
    Ok(affected)
}
