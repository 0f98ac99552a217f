use chrono::{DateTime, Utc};

use crate::{stmt::Value, Error, Result};

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

impl From<&DateTime<Utc>> for Value {
    fn from(value: &DateTime<Utc>) -> Self {
        Self::Timestamp(*value)
    }
}

impl TryFrom<Value> for DateTime<Utc> {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Timestamp(v) => Ok(v),
            // Stored as RFC 3339 text where the database has no timestamp type
            Value::String(v) => Ok(DateTime::parse_from_rfc3339(&v)?.with_timezone(&Utc)),
            value => Err(Error::type_conversion(value, "DateTime<Utc>")),
        }
    }
}
