mod value;
pub(crate) use value::Value;

use rusqlite::{params_from_iter, types::Value as SqlValue, Connection as RusqliteConnection};
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};
use tabula_core::{
    async_trait,
    driver::{Driver, Response},
    err,
    schema::{ColumnDescriptor, ForeignKeyRef},
    stmt::{self, Statement, ValueRecord},
    Error, Result,
};
use tabula_sql as sql;
use url::Url;

const TABLES_SQL: &str = "\
    SELECT name FROM sqlite_master \
    WHERE type = 'table' AND name NOT LIKE 'sqlite_%' \
    ORDER BY name";

const COLUMNS_SQL: &str = "SELECT cid, name, type FROM pragma_table_info(?1) ORDER BY cid";

const FOREIGN_KEY_SQL: &str = "\
    SELECT \"table\", \"to\" FROM pragma_foreign_key_list(?1) \
    WHERE \"from\" = ?2 \
    ORDER BY id, seq \
    LIMIT 1";

const PRIMARY_KEY_SQL: &str = "\
    SELECT name FROM pragma_table_info(?1) \
    WHERE pk > 0 \
    ORDER BY pk \
    LIMIT 1";

#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver with an arbitrary connection URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(Error::driver)?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={}",
                url_str
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else if url.path().is_empty() {
            Err(Error::invalid_connection_url(format!(
                "missing database path in connection URL; url={}",
                url_str
            )))
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

#[async_trait]
impl Driver for Sqlite {
    fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    async fn connect(&self) -> Result<Box<dyn tabula_core::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        tracing::debug!(url = %self.url(), "opened sqlite database");
        Ok(Box::new(connection))
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection = RusqliteConnection::open_in_memory().map_err(Error::driver)?;
        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::driver)?;
        Ok(Self { connection })
    }

    fn primary_key(&self, table: &str) -> Result<Option<String>> {
        let mut stmt = self
            .connection
            .prepare_cached(PRIMARY_KEY_SQL)
            .map_err(Error::driver)?;
        let mut rows = stmt.query([table]).map_err(Error::driver)?;

        let name = match rows.next().map_err(Error::driver)? {
            Some(row) => Some(row.get(0).map_err(Error::driver)?),
            None => None,
        };
        Ok(name)
    }
}

impl From<RusqliteConnection> for Connection {
    fn from(connection: RusqliteConnection) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl tabula_core::Connection for Connection {
    async fn database_name(&mut self) -> Result<Option<String>> {
        Ok(Some("main".to_string()))
    }

    async fn tables(&mut self) -> Result<Vec<String>> {
        let mut stmt = self
            .connection
            .prepare_cached(TABLES_SQL)
            .map_err(Error::driver)?;

        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(Error::driver)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(Error::driver)?;

        Ok(names)
    }

    async fn columns(&mut self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        let mut stmt = self
            .connection
            .prepare_cached(COLUMNS_SQL)
            .map_err(Error::driver)?;

        let columns = stmt
            .query_map([table], |row| {
                let cid: i64 = row.get(0)?;
                let name: String = row.get(1)?;
                let ty: String = row.get(2)?;
                Ok(ColumnDescriptor::new(name, ty, cid as usize + 1))
            })
            .map_err(Error::driver)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(Error::driver)?;

        Ok(columns)
    }

    async fn foreign_key(&mut self, table: &str, column: &str) -> Result<Option<ForeignKeyRef>> {
        let found = {
            let mut stmt = self
                .connection
                .prepare_cached(FOREIGN_KEY_SQL)
                .map_err(Error::driver)?;
            let mut rows = stmt.query([table, column]).map_err(Error::driver)?;

            let found = match rows.next().map_err(Error::driver)? {
                Some(row) => {
                    let referenced_table: String = row.get(0).map_err(Error::driver)?;
                    let referenced_column: Option<String> = row.get(1).map_err(Error::driver)?;
                    Some((referenced_table, referenced_column))
                }
                None => None,
            };
            found
        };

        let Some((referenced_table, referenced_column)) = found else {
            return Ok(None);
        };

        // `REFERENCES parent` without a column list points at the parent's
        // primary key.
        let referenced_column = match referenced_column {
            Some(column) => column,
            None => self.primary_key(&referenced_table)?.ok_or_else(|| {
                err!(
                    "`{table}.{column}` references `{referenced_table}`, which has no primary key"
                )
            })?,
        };

        Ok(Some(ForeignKeyRef {
            table: referenced_table,
            column: referenced_column,
        }))
    }

    async fn exec(&mut self, stmt: &Statement) -> Result<Response> {
        let mut params: Vec<stmt::Value> = Vec::new();
        let sql_as_str = sql::Serializer::sqlite().serialize(stmt, &mut params);

        tracing::debug!(sql = %sql_as_str, params = params.len(), "sqlite exec");

        let params = params.into_iter().map(Value::from).collect::<Vec<_>>();

        let mut prepared = self
            .connection
            .prepare_cached(&sql_as_str)
            .map_err(Error::driver)?;

        if !stmt.returns_rows() {
            let affected = prepared
                .execute(params_from_iter(params.iter()))
                .map_err(Error::driver)?;

            if !stmt.is_insert() {
                return Ok(Response::count(affected as u64));
            }

            let last_insert_id = u64::try_from(self.connection.last_insert_rowid())
                .ok()
                .filter(|id| *id != 0);

            return Ok(Response::inserted(affected as u64, last_insert_id));
        }

        let width = prepared.column_count();
        let mut rows = prepared
            .query(params_from_iter(params.iter()))
            .map_err(Error::driver)?;

        let mut records = Vec::new();
        while let Some(row) = rows.next().map_err(Error::driver)? {
            let mut values = Vec::with_capacity(width);
            for i in 0..width {
                let value: SqlValue = row.get(i).map_err(Error::driver)?;
                values.push(Value::from_sql(value).into_inner());
            }
            records.push(ValueRecord::from_vec(values));
        }

        Ok(Response::rows(records))
    }

    async fn execute_batch(&mut self, sql: &str) -> Result<()> {
        tracing::debug!(sql = %sql, "sqlite batch");
        self.connection.execute_batch(sql).map_err(Error::driver)
    }

    async fn close(self: Box<Self>) -> Result<()> {
        self.connection
            .close()
            .map_err(|(_, err)| Error::driver(err))
    }
}
