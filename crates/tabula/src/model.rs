use crate::{clause, stmt::Primitive, Error, Result};

use tabula_core::{
    err,
    schema::{FieldDescriptor, FieldRole, TableBinding},
    stmt::Row,
    ShapeErrorKind,
};

/// A record type mapped to a single table.
///
/// Implement with `#[derive(Model)]`.
pub trait Model: Sized + Send + Sync + 'static {
    /// The type's table binding, built once and cached.
    fn binding() -> Result<&'static TableBinding>;

    /// The current state of every mapped field, in declaration order.
    fn describe(&self) -> Result<Vec<FieldDescriptor>>;

    /// Materializes a new record from a row. Fields excluded from mapping
    /// take their default value.
    fn load(row: Row) -> Result<Self>;

    /// Overwrites every mapped field from a row. Either all fields are
    /// assigned or, on error, none are.
    fn reload(&mut self, row: Row) -> Result<()>;

    /// The record's identity value, or `None` while it is unset.
    fn identity(&self) -> Result<Option<i64>> {
        Ok(self
            .describe()?
            .iter()
            .find(|field| field.role == FieldRole::Identity)
            .and_then(clause::identity_value))
    }
}

#[doc(hidden)]
pub fn describe_field<T: Primitive>(
    binding: &TableBinding,
    index: usize,
    value: &T,
) -> FieldDescriptor {
    let field = &binding.fields[index];

    FieldDescriptor {
        name: field.name,
        column: field.column.clone(),
        value: value.to_value(),
        unset: value.is_unset(),
        role: field.role,
    }
}

#[doc(hidden)]
pub fn load_field<T: Primitive>(row: &mut Row, binding: &TableBinding, index: usize) -> Result<T> {
    let field = &binding.fields[index];

    let Some(value) = row.take(&field.column) else {
        return Err(Error::shape(
            binding.model,
            ShapeErrorKind::MissingColumn {
                column: field.column.clone(),
            },
        ));
    };

    T::load(value).map_err(|e| e.context(err!("{}.{}", binding.model, field.name)))
}
