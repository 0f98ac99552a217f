use crate::Result;

use tabula_core::stmt;

/// A field type that maps onto a single column.
pub trait Primitive: Sized {
    const TYPE: stmt::Type;

    /// Decodes a column value.
    fn load(value: stmt::Value) -> Result<Self>;

    /// Encodes the field as a bind value.
    fn to_value(&self) -> stmt::Value;

    /// Returns `true` when the field holds no value: the zero value for plain
    /// types, `None` for `Option`.
    fn is_unset(&self) -> bool;
}

macro_rules! impl_primitive {
    ( $( $ty:ty => $name:ident, $zero:expr; )* ) => {
        $(
            impl Primitive for $ty {
                const TYPE: stmt::Type = stmt::Type::$name;

                fn load(value: stmt::Value) -> Result<Self> {
                    value.try_into()
                }

                fn to_value(&self) -> stmt::Value {
                    (*self).into()
                }

                fn is_unset(&self) -> bool {
                    *self == $zero
                }
            }
        )*
    };
}

impl_primitive! {
    i16 => I16, 0;
    i32 => I32, 0;
    i64 => I64, 0;
    f64 => F64, 0.0;
    bool => Bool, false;
}

impl Primitive for String {
    const TYPE: stmt::Type = stmt::Type::String;

    fn load(value: stmt::Value) -> Result<Self> {
        value.try_into()
    }

    fn to_value(&self) -> stmt::Value {
        self.into()
    }

    fn is_unset(&self) -> bool {
        self.is_empty()
    }
}

impl Primitive for Vec<u8> {
    const TYPE: stmt::Type = stmt::Type::Bytes;

    fn load(value: stmt::Value) -> Result<Self> {
        value.try_into()
    }

    fn to_value(&self) -> stmt::Value {
        stmt::Value::Bytes(self.clone())
    }

    fn is_unset(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Primitive> Primitive for Option<T> {
    const TYPE: stmt::Type = T::TYPE;

    fn load(value: stmt::Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }

    fn to_value(&self) -> stmt::Value {
        match self {
            Some(value) => value.to_value(),
            None => stmt::Value::Null,
        }
    }

    fn is_unset(&self) -> bool {
        self.is_none()
    }
}
