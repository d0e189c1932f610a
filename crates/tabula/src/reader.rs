//! Reads rows of a table.
//!
//! Every read projects the table's described columns explicitly, so the
//! returned [`RowSet`] always pairs each row with its column shape.

use crate::{introspect, Connection, Error, Result, RowSet, Value, ValueRecord};

use tabula_core::stmt::{Filter, Select};

/// Every column of every row of `table`.
pub async fn fetch_all(conn: &mut dyn Connection, table: &str) -> Result<RowSet> {
    select(conn, table, None, None)
        .await
        .map_err(|err| err.context(Error::query(format!("reading table `{table}`"))))
}

/// The row of `table` whose `id_column` equals `id_value`, or `None` when no
/// row matches. When several rows match, the first one is returned.
pub async fn fetch_one(
    conn: &mut dyn Connection,
    table: &str,
    id_column: &str,
    id_value: impl Into<Value>,
) -> Result<Option<ValueRecord>> {
    let filter = Filter::eq(id_column, id_value);

    let rows = select(conn, table, Some(filter), Some(1))
        .await
        .map_err(|err| {
            err.context(Error::query(format!(
                "looking up `{table}` by `{id_column}`"
            )))
        })?;

    Ok(rows.into_rows().into_iter().next())
}

/// Rows of `table` whose `column` equals `value`.
///
/// Used to drill into the row a foreign-key value points at.
pub async fn fetch_referenced(
    conn: &mut dyn Connection,
    table: &str,
    column: &str,
    value: impl Into<Value>,
) -> Result<RowSet> {
    let filter = Filter::eq(column, value);

    select(conn, table, Some(filter), None)
        .await
        .map_err(|err| {
            err.context(Error::query(format!(
                "reading `{table}` where `{column}` matches"
            )))
        })
}

async fn select(
    conn: &mut dyn Connection,
    table: &str,
    filter: Option<Filter>,
    limit: Option<u64>,
) -> Result<RowSet> {
    let columns = introspect::describe(conn, table).await?;

    if let Some(filter) = &filter {
        introspect::ensure_column(&columns, table, &filter.column)?;
    }

    let mut select = Select::new(table, columns.iter().map(|c| c.name.clone()).collect());
    select.filter = filter;
    select.limit = limit;

    let rows = conn.exec(&select.into()).await?.into_rows()?;
    RowSet::new(columns, rows)
}
