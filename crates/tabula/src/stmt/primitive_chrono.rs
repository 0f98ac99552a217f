use crate::stmt::Primitive;

use chrono::{DateTime, Utc};
use tabula_core::{
    stmt::{Type, Value},
    Result,
};

/// The Unix epoch is the unset timestamp.
impl Primitive for DateTime<Utc> {
    const TYPE: Type = Type::Timestamp;

    fn load(value: Value) -> Result<Self> {
        value.try_into()
    }

    fn to_value(&self) -> Value {
        Value::Timestamp(*self)
    }

    fn is_unset(&self) -> bool {
        *self == DateTime::<Utc>::default()
    }
}
