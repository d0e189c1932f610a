use crate::{
    form::{FieldValue, InsertForm},
    introspect, mutator, reader, ColumnDescriptor, Connect, ConnectOptions, Connection, Error,
    ForeignKeys, Result, RowSet, Value, ValueRecord,
};

/// Which table a [`Session`] operates on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectedTable {
    #[default]
    NoTableSelected,
    TableSelected(String),
}

/// One open connection plus the currently selected table.
///
/// Record operations act on the selected table and fail with a
/// precondition error until [`Session::select_table`] succeeds. After
/// [`Session::disconnect`], every operation fails with a connection-closed
/// cause.
pub struct Session {
    conn: Option<Box<dyn Connection>>,
    selected: SelectedTable,
}

impl Session {
    /// Opens a connection for `url`.
    pub async fn connect(url: &str) -> Result<Self> {
        let conn = Connect::new(url)?.connect().await?;
        Ok(Self::from_connection(conn))
    }

    /// Opens a MySQL connection from login details.
    pub async fn connect_with(options: &ConnectOptions) -> Result<Self> {
        let conn = Connect::from_options(options)?.connect().await?;
        Ok(Self::from_connection(conn))
    }

    pub fn from_connection(conn: Box<dyn Connection>) -> Self {
        Self {
            conn: Some(conn),
            selected: SelectedTable::NoTableSelected,
        }
    }

    pub fn selected(&self) -> &SelectedTable {
        &self.selected
    }

    /// Name of the selected table, if any.
    pub fn selected_table(&self) -> Option<&str> {
        match &self.selected {
            SelectedTable::TableSelected(table) => Some(table),
            SelectedTable::NoTableSelected => None,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    /// Direct access to the underlying connection.
    pub fn connection(&mut self) -> Result<&mut dyn Connection> {
        match &mut self.conn {
            Some(conn) => Ok(conn.as_mut()),
            None => Err(Error::connection_closed()),
        }
    }

    pub async fn database_name(&mut self) -> Result<Option<String>> {
        let conn = self.schema_connection("reading database name")?;
        introspect::database_name(conn).await
    }

    pub async fn tables(&mut self) -> Result<Vec<String>> {
        let conn = self.schema_connection("listing tables")?;
        introspect::tables(conn).await
    }

    /// The table offered first when choosing one: the first listed table.
    pub async fn default_table(&mut self) -> Result<Option<String>> {
        Ok(self.tables().await?.into_iter().next())
    }

    /// Selects `table` if it exists. On failure the previous selection is
    /// kept.
    pub async fn select_table(&mut self, table: &str) -> Result<()> {
        let conn = self.schema_connection("selecting a table")?;
        introspect::ensure_table(conn, table).await?;

        tracing::debug!(table, "selected table");
        self.selected = SelectedTable::TableSelected(table.to_string());
        Ok(())
    }

    /// Columns of the selected table.
    pub async fn columns(&mut self) -> Result<Vec<ColumnDescriptor>> {
        let (conn, table) = self.target(Error::schema)?;
        introspect::describe(conn, table).await
    }

    /// Identifier column of the selected table.
    pub async fn identifier_column(&mut self) -> Result<ColumnDescriptor> {
        let (conn, table) = self.target(Error::schema)?;
        identifier_column(conn, table).await
    }

    /// Foreign keys of the selected table.
    pub async fn foreign_keys(&mut self) -> Result<ForeignKeys> {
        let (conn, table) = self.target(Error::schema)?;
        introspect::foreign_keys_of(conn, table).await
    }

    pub async fn fetch_all(&mut self) -> Result<RowSet> {
        let (conn, table) = self.target(Error::query)?;
        reader::fetch_all(conn, table).await
    }

    /// The row of the selected table whose identifier equals `id_value`.
    pub async fn fetch_one(&mut self, id_value: impl Into<Value>) -> Result<Option<ValueRecord>> {
        let (conn, table) = self.target(Error::query)?;
        let id_column = identifier_column(conn, table)
            .await
            .map_err(|err| err.context(Error::query(format!("looking up `{table}`"))))?;
        reader::fetch_one(conn, table, &id_column.name, id_value).await
    }

    /// Rows of `table` whose `column` equals `value`. Does not change the
    /// selection.
    pub async fn fetch_referenced(
        &mut self,
        table: &str,
        column: &str,
        value: impl Into<Value>,
    ) -> Result<RowSet> {
        let (conn, _) = self.target(Error::query)?;
        reader::fetch_referenced(conn, table, column, value).await
    }

    /// Follows the reference of `column` in the selected table to the rows it
    /// points at. Returns `None` when `column` has no reference constraint.
    pub async fn follow_reference(
        &mut self,
        column: &str,
        value: impl Into<Value>,
    ) -> Result<Option<RowSet>> {
        let foreign_keys = self.foreign_keys().await?;

        let Some(binding) = foreign_keys.get(column) else {
            return Ok(None);
        };

        let rows = self
            .fetch_referenced(&binding.referenced_table, &binding.referenced_column, value)
            .await?;
        Ok(Some(rows))
    }

    /// The input fields needed to insert into the selected table.
    pub async fn insert_form(&mut self) -> Result<InsertForm> {
        let (conn, table) = self.target(Error::schema)?;
        InsertForm::load(conn, table).await
    }

    /// Inserts `values`, aligned to the non-identifier columns, into the
    /// selected table.
    pub async fn insert(&mut self, values: Vec<Value>) -> Result<Option<u64>> {
        let (conn, table) = self.target(Error::mutation)?;
        mutator::insert(conn, table, values).await
    }

    /// Resolves form input against a fresh [`InsertForm`] and inserts it.
    pub async fn submit(&mut self, inputs: Vec<FieldValue>) -> Result<Option<u64>> {
        let values = self.insert_form().await?.resolve(inputs)?;
        self.insert(values).await
    }

    /// Deletes the rows of the selected table whose identifier equals
    /// `value`. Returns the number of rows removed.
    pub async fn delete_by_identifier_value(&mut self, value: impl Into<Value>) -> Result<u64> {
        let (conn, table) = self.target(Error::mutation)?;
        let id_column = identifier_column(conn, table)
            .await
            .map_err(|err| err.context(Error::mutation(format!("deleting from `{table}`"))))?;
        mutator::delete_by_identifier_value(conn, table, &id_column.name, value).await
    }

    /// Closes the connection. Calling it again is a no-op.
    pub async fn disconnect(&mut self) -> Result<()> {
        match self.conn.take() {
            Some(conn) => {
                tracing::debug!("closing connection");
                conn.close().await
            }
            None => Ok(()),
        }
    }

    fn schema_connection(&mut self, action: &str) -> Result<&mut dyn Connection> {
        match &mut self.conn {
            Some(conn) => Ok(conn.as_mut()),
            None => Err(Error::connection_closed().context(Error::schema(action))),
        }
    }

    /// The connection and selected table. The selection is checked first, so
    /// a closed session without a table still reports the missing table.
    fn target(
        &mut self,
        kind: fn(String) -> Error,
    ) -> Result<(&mut dyn Connection, &str)> {
        let SelectedTable::TableSelected(table) = &self.selected else {
            return Err(Error::precondition_failed("no table selected"));
        };

        match &mut self.conn {
            Some(conn) => Ok((conn.as_mut(), table.as_str())),
            None => Err(Error::connection_closed().context(kind(format!("table `{table}`")))),
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("connected", &self.conn.is_some())
            .field("selected", &self.selected)
            .finish()
    }
}

async fn identifier_column(conn: &mut dyn Connection, table: &str) -> Result<ColumnDescriptor> {
    let columns = introspect::describe(conn, table).await?;
    introspect::identifier_column(&columns)
        .cloned()
        .ok_or_else(|| Error::schema(format!("table `{table}` has no identifier column")))
}
