use mysql_async::prelude::ToValue;
use tabula_core::stmt::Value as CoreValue;

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    /// Converts this MySQL driver value into the core Tabula value.
    pub fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Converts a value read from a MySQL row.
    ///
    /// `DATE` values come back as `Date` with a zero time part and render as
    /// `YYYY-MM-DD`; anything with a time part renders as a full timestamp.
    pub fn from_sql(value: mysql_async::Value) -> Self {
        use mysql_async::Value as SqlValue;

        let core_value = match value {
            SqlValue::NULL => CoreValue::Null,
            SqlValue::Bytes(bytes) => CoreValue::from_utf8_or_bytes(bytes),
            SqlValue::Int(v) => CoreValue::I64(v),
            SqlValue::UInt(v) => CoreValue::U64(v),
            SqlValue::Float(v) => CoreValue::F64(v.into()),
            SqlValue::Double(v) => CoreValue::F64(v),
            SqlValue::Date(year, month, day, 0, 0, 0, 0) => {
                CoreValue::String(format!("{year:04}-{month:02}-{day:02}"))
            }
            SqlValue::Date(year, month, day, hour, minute, second, 0) => CoreValue::String(
                format!("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"),
            ),
            SqlValue::Date(year, month, day, hour, minute, second, micros) => {
                CoreValue::String(format!(
                    "{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}.{micros:06}"
                ))
            }
            SqlValue::Time(negative, days, hours, minutes, seconds, micros) => {
                let sign = if negative { "-" } else { "" };
                let hours = u64::from(days) * 24 + u64::from(hours);
                let mut time = format!("{sign}{hours:02}:{minutes:02}:{seconds:02}");
                if micros != 0 {
                    time.push_str(&format!(".{micros:06}"));
                }
                CoreValue::String(time)
            }
        };

        Value(core_value)
    }
}

impl ToValue for Value {
    fn to_value(&self) -> mysql_async::Value {
        match &self.0 {
            CoreValue::Null => mysql_async::Value::NULL,
            CoreValue::I64(value) => value.to_value(),
            CoreValue::U64(value) => value.to_value(),
            CoreValue::F64(value) => value.to_value(),
            CoreValue::String(value) => value.to_value(),
            CoreValue::Bytes(value) => value.to_value(),
        }
    }
}
