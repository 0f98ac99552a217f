/// The type of a column value, as seen by the mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Type of `NULL` when nothing more is known
    Null,

    /// Boolean value
    Bool,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// 64-bit floating point
    F64,

    /// String type
    String,

    /// Raw bytes
    Bytes,

    /// UTC timestamp
    Timestamp,
}

impl Type {
    /// True for the integer types an identity field may have.
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::I16 | Self::I32 | Self::I64)
    }

    pub fn is_timestamp(&self) -> bool {
        matches!(self, Self::Timestamp)
    }
}
