//! Schema-aware table editing on top of a live SQL connection.
//!
//! A [`Session`] owns one connection and tracks the selected table. It
//! discovers the table's columns and foreign keys, reads rows, and builds
//! parameterized inserts and deletes. Every table and column name is checked
//! against the live schema before it reaches a statement.
//!
//! The free functions in [`introspect`], [`reader`] and [`mutator`] take the
//! table explicitly and can be used without a session.

mod connect;
pub use connect::{Connect, ConnectOptions};

pub mod form;
pub use form::{DateParts, FieldKind, FieldValue, InputField, InsertForm};

pub mod introspect;

pub mod mutator;

pub mod reader;

mod session;
pub use session::{SelectedTable, Session};

pub use tabula_core::{
    driver::{self, Connection, Driver},
    schema::{ColumnDescriptor, ForeignKeyBinding, ForeignKeyRef, ForeignKeys},
    stmt::{RowSet, Value, ValueRecord},
    Error, Result,
};
