use super::Value;
use crate::{Error, Result};

macro_rules! impl_num {
    ( $( $variant:ident($ty:ty) )* ) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(*value)
                }
            }

            // Databases widen integers freely (SQLite always returns i64), so
            // any integer variant converts as long as it fits.
            impl TryFrom<Value> for $ty {
                type Error = Error;

                fn try_from(value: Value) -> Result<Self> {
                    let Some(v) = value.to_i64() else {
                        return Err(Error::type_conversion(value, stringify!($ty)));
                    };
                    <$ty>::try_from(v).map_err(|_| Error::type_conversion(value, stringify!($ty)))
                }
            }
        )*
    };
}

impl_num! {
    I16(i16)
    I32(i32)
    I64(i64)
}
