#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod flavor;
pub use flavor::Flavor;

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod statement;

use tabula_core::stmt::Statement;

/// Serialize a statement to a SQL string
#[derive(Debug, Clone, Copy)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects.
    flavor: Flavor,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    pub fn new(flavor: Flavor) -> Serializer {
        Serializer { flavor }
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Serializes `stmt`, pushing every value into `params` and leaving a
    /// placeholder in its place. Identifiers are quoted for the flavor.
    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt);

        ret.push(';');
        ret
    }

    /// Quotes a single identifier for this flavor.
    pub fn quote_ident(&self, name: &str) -> String {
        let mut ret = String::new();
        let mut params: Vec<tabula_core::stmt::Value> = Vec::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params: &mut params,
        };

        Ident(name).to_sql(&mut fmt);
        ret
    }
}
