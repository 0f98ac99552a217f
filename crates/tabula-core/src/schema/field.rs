use crate::stmt::{Type, Value};

/// A mapped field of a record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Rust field name
    pub name: &'static str,

    /// Column the field maps to
    pub column: String,

    /// Column value type
    pub ty: Type,

    /// What the field means to the clause policy
    pub role: FieldRole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    /// The row's primary key
    Identity,

    /// Written once, when the row is created
    CreatedAt,

    /// Refreshed on every write
    UpdatedAt,

    /// Any other column
    Plain,
}

/// A field's current state on one record instance, captured for a single
/// mapper call.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Rust field name
    pub name: &'static str,

    /// Column the field maps to
    pub column: String,

    /// The field's current value
    pub value: Value,

    /// True when the field holds no value: `None` for `Option` fields, the
    /// type's zero value otherwise.
    pub unset: bool,

    pub role: FieldRole,
}
