use postgres_types::{accepts, private::BytesMut, to_sql_checked, IsNull, ToSql, Type};
use tabula_core::stmt::{self, Value as CoreValue};

type BoxError = Box<dyn std::error::Error + Sync + Send>;

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl ToSql for Value {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, BoxError>
    where
        Self: Sized,
    {
        match &self.0 {
            stmt::Value::Bool(value) => value.to_sql(ty, out),
            stmt::Value::I16(value) => int_to_sql(*value as i64, ty, out),
            stmt::Value::I32(value) => int_to_sql(*value as i64, ty, out),
            stmt::Value::I64(value) => int_to_sql(*value, ty, out),
            stmt::Value::F64(value) => match *ty {
                Type::FLOAT4 => (*value as f32).to_sql(ty, out),
                _ => value.to_sql(ty, out),
            },
            stmt::Value::String(value) => value.to_sql(ty, out),
            stmt::Value::Bytes(value) => value.to_sql(ty, out),
            stmt::Value::Timestamp(value) => match *ty {
                Type::TIMESTAMP => value.naive_utc().to_sql(ty, out),
                _ => value.to_sql(ty, out),
            },
            stmt::Value::Null => Ok(IsNull::Yes),
        }
    }

    accepts!(
        BOOL,
        INT2,
        INT4,
        INT8,
        FLOAT4,
        FLOAT8,
        TEXT,
        VARCHAR,
        BPCHAR,
        NAME,
        BYTEA,
        TIMESTAMP,
        TIMESTAMPTZ
    );
    to_sql_checked!();
}

/// Integers are carried as `i64` and narrowed to the column width, failing
/// instead of truncating.
fn int_to_sql(value: i64, ty: &Type, out: &mut BytesMut) -> Result<IsNull, BoxError> {
    match *ty {
        Type::INT2 => i16::try_from(value)?.to_sql(ty, out),
        Type::INT4 => i32::try_from(value)?.to_sql(ty, out),
        _ => value.to_sql(ty, out),
    }
}
