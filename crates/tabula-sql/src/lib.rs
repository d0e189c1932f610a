pub mod serializer;
pub use serializer::{Flavor, Params, Placeholder, Serializer};

pub use tabula_core::stmt::Statement;
