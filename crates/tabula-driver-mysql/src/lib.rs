mod value;
pub(crate) use value::Value;

use mysql_async::{
    prelude::{Queryable, ToValue},
    Conn, Pool,
};
use std::borrow::Cow;
use tabula_core::{
    async_trait,
    driver::{Driver, Response},
    schema::{ColumnDescriptor, ForeignKeyRef},
    stmt::{self, Statement, ValueRecord},
    Error, Result,
};
use tabula_sql as sql;
use url::Url;

const COLUMNS_SQL: &str = "\
    SELECT COLUMN_NAME, COLUMN_TYPE, ORDINAL_POSITION \
    FROM information_schema.COLUMNS \
    WHERE TABLE_SCHEMA = DATABASE() AND TABLE_NAME = ? \
    ORDER BY ORDINAL_POSITION";

const FOREIGN_KEY_SQL: &str = "\
    SELECT REFERENCED_TABLE_NAME, REFERENCED_COLUMN_NAME \
    FROM information_schema.KEY_COLUMN_USAGE \
    WHERE TABLE_SCHEMA = DATABASE() \
      AND TABLE_NAME = ? \
      AND COLUMN_NAME = ? \
      AND REFERENCED_TABLE_NAME IS NOT NULL";

#[derive(Debug)]
pub struct MySQL {
    url: Url,
    pool: Pool,
}

impl MySQL {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(Error::driver)?;

        if url.scheme() != "mysql" {
            return Err(Error::invalid_connection_url(format!(
                "connection url does not have a `mysql` scheme; url={}",
                redact(&url)
            )));
        }

        url.host_str().ok_or_else(|| {
            Error::invalid_connection_url(format!(
                "missing host in connection URL; url={}",
                redact(&url)
            ))
        })?;

        if url.path().trim_start_matches('/').is_empty() {
            return Err(Error::invalid_connection_url(format!(
                "no database specified - missing path in connection URL; url={}",
                redact(&url)
            )));
        }

        let opts = mysql_async::Opts::from_url(url.as_ref()).map_err(Error::driver)?;
        let opts = mysql_async::OptsBuilder::from_opts(opts).client_found_rows(false);

        let pool = Pool::new(opts);
        Ok(Self { url, pool })
    }
}

#[async_trait]
impl Driver for MySQL {
    fn url(&self) -> Cow<'_, str> {
        Cow::Owned(redact(&self.url))
    }

    async fn connect(&self) -> Result<Box<dyn tabula_core::Connection>> {
        let conn = self.pool.get_conn().await.map_err(Error::driver)?;
        tracing::debug!(url = %redact(&self.url), "connected to mysql");
        Ok(Box::new(Connection::new(conn)))
    }
}

/// Renders the URL without its password.
fn redact(url: &Url) -> String {
    let mut url = url.clone();
    if url.password().is_some() {
        let _ = url.set_password(Some("***"));
    }
    url.to_string()
}

#[derive(Debug)]
pub struct Connection {
    conn: Conn,
}

impl Connection {
    pub fn new(conn: Conn) -> Self {
        Self { conn }
    }
}

impl From<Conn> for Connection {
    fn from(conn: Conn) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl tabula_core::Connection for Connection {
    async fn database_name(&mut self) -> Result<Option<String>> {
        let name: Option<Option<String>> = self
            .conn
            .query_first("SELECT DATABASE()")
            .await
            .map_err(Error::driver)?;
        Ok(name.flatten())
    }

    async fn tables(&mut self) -> Result<Vec<String>> {
        self.conn
            .query("SHOW TABLES")
            .await
            .map_err(Error::driver)
    }

    async fn columns(&mut self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        let rows: Vec<(String, String, u64)> = self
            .conn
            .exec(COLUMNS_SQL, (table,))
            .await
            .map_err(Error::driver)?;

        Ok(rows
            .into_iter()
            .map(|(name, ty, ordinal)| ColumnDescriptor::new(name, ty, ordinal as usize))
            .collect())
    }

    async fn foreign_key(&mut self, table: &str, column: &str) -> Result<Option<ForeignKeyRef>> {
        let row: Option<(String, String)> = self
            .conn
            .exec_first(FOREIGN_KEY_SQL, (table, column))
            .await
            .map_err(Error::driver)?;

        Ok(row.map(|(table, column)| ForeignKeyRef { table, column }))
    }

    async fn exec(&mut self, stmt: &Statement) -> Result<Response> {
        let mut params: Vec<stmt::Value> = Vec::new();
        let sql_as_str = sql::Serializer::mysql().serialize(stmt, &mut params);

        tracing::debug!(sql = %sql_as_str, params = params.len(), "mysql exec");

        let params = params.into_iter().map(Value::from).collect::<Vec<_>>();
        let args = params
            .iter()
            .map(|param| param.to_value())
            .collect::<Vec<_>>();

        if !stmt.returns_rows() {
            self.conn
                .exec_drop(sql_as_str.as_str(), mysql_async::Params::Positional(args))
                .await
                .map_err(Error::driver)?;

            let affected = self.conn.affected_rows();
            if !stmt.is_insert() {
                return Ok(Response::count(affected));
            }

            let last_insert_id = self.conn.last_insert_id().filter(|id| *id != 0);
            return Ok(Response::inserted(affected, last_insert_id));
        }

        let rows: Vec<mysql_async::Row> = self
            .conn
            .exec(sql_as_str.as_str(), mysql_async::Params::Positional(args))
            .await
            .map_err(Error::driver)?;

        let records = rows
            .into_iter()
            .map(|mut row| {
                let values = (0..row.len())
                    .map(|i| {
                        let value = row
                            .take::<mysql_async::Value, _>(i)
                            .unwrap_or(mysql_async::Value::NULL);
                        Value::from_sql(value).into_inner()
                    })
                    .collect();
                ValueRecord::from_vec(values)
            })
            .collect();

        Ok(Response::rows(records))
    }

    async fn execute_batch(&mut self, sql: &str) -> Result<()> {
        tracing::debug!(sql = %sql, "mysql batch");
        self.conn.query_drop(sql).await.map_err(Error::driver)
    }

    async fn close(self: Box<Self>) -> Result<()> {
        self.conn.disconnect().await.map_err(Error::driver)
    }
}
