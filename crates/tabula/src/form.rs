//! Describes the input a new row needs and turns submitted input into the
//! value list [`mutator::insert`](crate::mutator::insert) expects.

use crate::{
    introspect, ColumnDescriptor, Connection, Error, ForeignKeyBinding, ForeignKeys, Result, Value,
};

use std::fmt;

/// Input fields for inserting a row into one table.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertForm {
    table: String,
    fields: Vec<InputField>,
}

/// One non-identifier column and the kind of input it takes.
#[derive(Debug, Clone, PartialEq)]
pub struct InputField {
    pub column: ColumnDescriptor,
    pub kind: FieldKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Pick one of the referenced table's display values.
    ForeignKey(ForeignKeyBinding),

    /// Year, month and day.
    Date,

    /// Free text.
    Text,
}

/// A submitted value for one field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A display string picked from a foreign-key field's choices.
    Choice(String),

    /// A composed date.
    Date(DateParts),

    /// Typed text. Leading and trailing whitespace is dropped.
    Text(String),

    /// A value passed through untouched.
    Value(Value),
}

/// A date as picked from year, month and day selectors.
///
/// Each component is range checked on its own; `2024-02-30` is accepted and
/// left for the database to reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts {
    year: u16,
    month: u8,
    day: u8,
}

impl DateParts {
    pub const YEARS: (i64, i64) = (1900, 2100);
    pub const MONTHS: (i64, i64) = (1, 12);
    pub const DAYS: (i64, i64) = (1, 31);

    pub fn new(year: i64, month: i64, day: i64) -> Result<Self> {
        Ok(Self {
            year: check("year", year, Self::YEARS)? as u16,
            month: check("month", month, Self::MONTHS)? as u8,
            day: check("day", day, Self::DAYS)? as u8,
        })
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }
}

fn check(field: &'static str, value: i64, (min, max): (i64, i64)) -> Result<i64> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(Error::validation_out_of_range(field, value, min, max))
    }
}

impl fmt::Display for DateParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl From<DateParts> for Value {
    fn from(date: DateParts) -> Self {
        Value::String(date.to_string())
    }
}

impl InsertForm {
    /// Describes `table` and resolves its foreign keys.
    pub async fn load(conn: &mut dyn Connection, table: &str) -> Result<Self> {
        let columns = introspect::describe(conn, table).await?;
        let foreign_keys = introspect::foreign_keys_of(conn, table).await?;
        Ok(Self::from_parts(table, columns, foreign_keys))
    }

    /// Builds the form from an already described table. The first column is
    /// the identifier and gets no field.
    pub fn from_parts(
        table: impl Into<String>,
        columns: Vec<ColumnDescriptor>,
        mut foreign_keys: ForeignKeys,
    ) -> Self {
        let fields = columns
            .into_iter()
            .skip(1)
            .map(|column| {
                let kind = match foreign_keys.shift_remove(&column.name) {
                    Some(binding) => FieldKind::ForeignKey(binding),
                    None if column.is_date() => FieldKind::Date,
                    None => FieldKind::Text,
                };
                InputField { column, kind }
            })
            .collect();

        Self {
            table: table.into(),
            fields,
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn fields(&self) -> &[InputField] {
        &self.fields
    }

    pub fn field(&self, column: &str) -> Option<&InputField> {
        self.fields.iter().find(|field| field.column.name == column)
    }

    /// Converts one submitted value per field, in field order, into insert
    /// values.
    pub fn resolve(&self, inputs: Vec<FieldValue>) -> Result<Vec<Value>> {
        if inputs.len() != self.fields.len() {
            return Err(Error::validation(format!(
                "`{}` takes {} values, got {}",
                self.table,
                self.fields.len(),
                inputs.len()
            )));
        }

        self.fields
            .iter()
            .zip(inputs)
            .map(|(field, input)| field.resolve(input))
            .collect()
    }
}

impl InputField {
    fn resolve(&self, input: FieldValue) -> Result<Value> {
        let column = &self.column.name;

        match (&self.kind, input) {
            (_, FieldValue::Value(value)) => Ok(value),
            (FieldKind::ForeignKey(binding), FieldValue::Choice(display)) => binding
                .key_for_display(&display)
                .cloned()
                .ok_or_else(|| {
                    Error::validation(format!(
                        "`{display}` is not a choice for `{column}`"
                    ))
                }),
            (FieldKind::Date, FieldValue::Date(date)) => Ok(date.into()),
            (FieldKind::Date | FieldKind::Text, FieldValue::Text(text)) => {
                Ok(Value::String(text.trim().to_string()))
            }
            (kind, input) => Err(Error::validation(format!(
                "`{column}` is a {} field and cannot take {}",
                kind.describe(),
                input.describe()
            ))),
        }
    }
}

impl FieldKind {
    fn describe(&self) -> &'static str {
        match self {
            FieldKind::ForeignKey(_) => "choice",
            FieldKind::Date => "date",
            FieldKind::Text => "text",
        }
    }
}

impl FieldValue {
    fn describe(&self) -> &'static str {
        match self {
            FieldValue::Choice(_) => "a choice",
            FieldValue::Date(_) => "a date",
            FieldValue::Text(_) => "text",
            FieldValue::Value(_) => "a value",
        }
    }
}
