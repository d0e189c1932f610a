//! Schema discovery: tables, columns and foreign keys.
//!
//! Nothing is cached. Every call asks the database again so the result always
//! reflects the current schema.

use crate::{
    ColumnDescriptor, Connection, Error, ForeignKeyBinding, ForeignKeyRef, ForeignKeys, Result,
};

use tabula_core::stmt::{Select, Value};

/// Name of the database the connection is attached to.
pub async fn database_name(conn: &mut dyn Connection) -> Result<Option<String>> {
    conn.database_name()
        .await
        .map_err(|err| err.context(Error::schema("reading database name")))
}

/// Tables of the current database, in the order the server lists them.
pub async fn tables(conn: &mut dyn Connection) -> Result<Vec<String>> {
    let tables = conn
        .tables()
        .await
        .map_err(|err| err.context(Error::schema("listing tables")))?;

    tracing::trace!(count = tables.len(), "listed tables");
    Ok(tables)
}

/// Columns of `table`, in declared order.
///
/// Fails with a schema error when `table` is not one of the database's
/// tables.
pub async fn describe(conn: &mut dyn Connection, table: &str) -> Result<Vec<ColumnDescriptor>> {
    ensure_table(conn, table).await?;

    let columns = conn
        .columns(table)
        .await
        .map_err(|err| err.context(Error::schema(format!("describing table `{table}`"))))?;

    if columns.is_empty() {
        return Err(Error::schema(format!("table `{table}` has no columns")));
    }

    tracing::trace!(table, columns = columns.len(), "described table");
    Ok(columns)
}

/// Foreign keys of `table`, keyed by owning column.
///
/// Columns without a reference constraint are absent from the map. Each
/// binding carries every `(key, display)` pair of the referenced table.
pub async fn foreign_keys_of(conn: &mut dyn Connection, table: &str) -> Result<ForeignKeys> {
    let columns = describe(conn, table).await?;
    let mut bindings = ForeignKeys::new();

    for column in &columns {
        let reference = conn
            .foreign_key(table, &column.name)
            .await
            .map_err(|err| {
                err.context(Error::schema(format!(
                    "reading constraints of `{table}.{}`",
                    column.name
                )))
            })?;

        let Some(reference) = reference else {
            continue;
        };

        let binding = resolve_binding(conn, &column.name, reference)
            .await
            .map_err(|err| {
                err.context(Error::schema(format!(
                    "resolving reference of `{table}.{}`",
                    column.name
                )))
            })?;

        bindings.insert(column.name.clone(), binding);
    }

    tracing::trace!(table, foreign_keys = bindings.len(), "resolved foreign keys");
    Ok(bindings)
}

/// The identifier column: the first column in declared order.
pub fn identifier_column(columns: &[ColumnDescriptor]) -> Option<&ColumnDescriptor> {
    columns.first()
}

pub(crate) async fn ensure_table(conn: &mut dyn Connection, table: &str) -> Result<()> {
    let tables = tables(conn).await?;

    if tables.iter().any(|name| name == table) {
        Ok(())
    } else {
        Err(Error::schema(format!("table `{table}` does not exist")))
    }
}

pub(crate) fn ensure_column<'a>(
    columns: &'a [ColumnDescriptor],
    table: &str,
    column: &str,
) -> Result<&'a ColumnDescriptor> {
    columns
        .iter()
        .find(|c| c.name == column)
        .ok_or_else(|| Error::schema(format!("table `{table}` has no column `{column}`")))
}

/// Picks the display column of the referenced table and loads its pairs.
async fn resolve_binding(
    conn: &mut dyn Connection,
    column: &str,
    reference: ForeignKeyRef,
) -> Result<ForeignKeyBinding> {
    let referenced_columns = describe(conn, &reference.table).await?;
    ensure_column(&referenced_columns, &reference.table, &reference.column)?;

    let display_column = referenced_columns
        .get(1)
        .map(|column| column.name.clone())
        .unwrap_or_else(|| reference.column.clone());

    let select = Select::new(
        &reference.table,
        vec![reference.column.clone(), display_column.clone()],
    );

    let rows = conn.exec(&select.into()).await?.into_rows()?;

    let values = rows
        .into_iter()
        .map(|row| {
            let [key, display]: [Value; 2] = row.into_vec().try_into().map_err(|row: Vec<Value>| {
                Error::invalid_result(format!("expected 2 values per row, got {}", row.len()))
            })?;
            Ok((key, display))
        })
        .collect::<Result<Vec<_>>>()?;

    if values.is_empty() {
        tracing::debug!(table = %reference.table, "referenced table is empty");
    }

    Ok(ForeignKeyBinding {
        column: column.to_string(),
        referenced_table: reference.table,
        referenced_column: reference.column,
        display_column,
        values,
    })
}
