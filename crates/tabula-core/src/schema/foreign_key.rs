use crate::stmt::Value;

use indexmap::IndexMap;

/// Foreign keys of a table, keyed by owning column, in column order.
pub type ForeignKeys = IndexMap<String, ForeignKeyBinding>;

/// The target of a reference constraint, as read from constraint metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyRef {
    pub table: String,
    pub column: String,
}

/// A column's reference constraint resolved against the referenced table.
///
/// `values` holds every `(key, display)` pair of the referenced table so a
/// choice widget can offer display values and map the pick back to a key.
#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKeyBinding {
    /// Column of the owning table holding the key
    pub column: String,

    /// Table the column references
    pub referenced_table: String,

    /// Column of the referenced table the key points at
    pub referenced_column: String,

    /// Column of the referenced table shown to users
    pub display_column: String,

    /// `(key, display)` pairs, in the order the referenced table returned them
    pub values: Vec<(Value, Value)>,
}

impl ForeignKeyBinding {
    /// Keys currently present in the referenced table.
    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.values.iter().map(|(key, _)| key)
    }

    /// Distinct display strings, in first-seen order.
    pub fn choices(&self) -> Vec<String> {
        let mut choices: Vec<String> = Vec::with_capacity(self.values.len());
        for (_, display) in &self.values {
            let display = display.to_string();
            if !choices.contains(&display) {
                choices.push(display);
            }
        }
        choices
    }

    /// Resolves a chosen display string to its key. When several rows share a
    /// display value, the last one wins.
    ///
    /// Displays are compared in rendered form, so a `NULL` display and the
    /// text `"NULL"` are the same choice.
    pub fn key_for_display(&self, display: &str) -> Option<&Value> {
        self.values
            .iter()
            .rev()
            .find(|(_, d)| d.to_string() == display)
            .map(|(key, _)| key)
    }

    /// Display value for a stored key.
    pub fn display_for_key(&self, key: &Value) -> Option<&Value> {
        self.values
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, display)| display)
    }
}
