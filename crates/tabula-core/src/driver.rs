mod response;
pub use response::Response;

use crate::{
    async_trait,
    schema::{ColumnDescriptor, ForeignKeyRef},
    stmt::Statement,
    Result,
};

use std::{borrow::Cow, fmt::Debug};

/// A database backend able to open connections.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// The connection URL this driver was created from, with credentials
    /// removed.
    fn url(&self) -> Cow<'_, str>;

    /// Opens a new connection.
    async fn connect(&self) -> Result<Box<dyn Connection>>;
}

/// An open connection to one database.
///
/// All methods take `&mut self`: a connection serves one logical flow at a
/// time and statements run strictly in sequence.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Name of the database the connection is attached to.
    async fn database_name(&mut self) -> Result<Option<String>>;

    /// Tables of the current database, in the order the server lists them.
    async fn tables(&mut self) -> Result<Vec<String>>;

    /// Columns of `table` in declared order. `table` must already be known to
    /// exist.
    async fn columns(&mut self, table: &str) -> Result<Vec<ColumnDescriptor>>;

    /// The reference constraint declared on `table.column`, if any.
    async fn foreign_key(&mut self, table: &str, column: &str) -> Result<Option<ForeignKeyRef>>;

    /// Executes a single data statement. Each statement auto-commits.
    async fn exec(&mut self, stmt: &Statement) -> Result<Response>;

    /// Runs a batch of raw SQL, used for schema setup.
    async fn execute_batch(&mut self, sql: &str) -> Result<()>;

    /// Closes the connection.
    async fn close(self: Box<Self>) -> Result<()>;
}
