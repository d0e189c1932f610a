mod column;
pub use column::ColumnDescriptor;

mod foreign_key;
pub use foreign_key::{ForeignKeyBinding, ForeignKeyRef, ForeignKeys};
