/// A column as reported by the database's structural metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// Column name
    pub name: String,

    /// Declared type, as the database spells it (`int`, `varchar(50)`, `DATE`)
    pub ty: String,

    /// 1-based position in the table's declared column order
    pub ordinal: usize,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, ty: impl Into<String>, ordinal: usize) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            ordinal,
        }
    }

    /// True when the declared type mentions `date` (`DATE`, `datetime`, ...).
    pub fn is_date(&self) -> bool {
        self.ty.to_ascii_lowercase().contains("date")
    }
}
