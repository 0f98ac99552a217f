use super::{column_name, table_name, Field, FieldRole};
use crate::{stmt::Type, Error, Result, ShapeErrorKind};

/// Binds a record type to its table: table name, mapped fields and the
/// columns with special write policy.
///
/// Built once per record type, usually by `#[derive(Model)]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBinding {
    /// Name of the record type
    pub model: &'static str,

    /// Table the record is stored in
    pub table: String,

    /// Mapped fields, in declaration order
    pub fields: Vec<Field>,

    identity: usize,
}

impl TableBinding {
    pub fn builder(model: &'static str) -> Builder {
        Builder {
            model,
            table: None,
            fields: vec![],
            identity: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn identity(&self) -> &Field {
        &self.fields[self.identity]
    }

    pub fn identity_column(&self) -> &str {
        &self.identity().column
    }

    pub fn field_by_column(&self, column: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.column == column)
    }
}

#[derive(Debug)]
pub struct Builder {
    model: &'static str,
    table: Option<String>,
    fields: Vec<PendingField>,
    identity: Option<&'static str>,
    created_at: Option<&'static str>,
    updated_at: Option<&'static str>,
}

#[derive(Debug)]
struct PendingField {
    name: &'static str,
    column: Option<&'static str>,
    ty: Type,
}

impl Builder {
    /// Sets the table name. Defaults to the pluralized snake case of the
    /// type name.
    pub fn table(&mut self, table: &str) -> &mut Self {
        self.table = Some(table.to_string());
        self
    }

    /// Adds a mapped field. `column` overrides the derived column name.
    pub fn field(
        &mut self,
        name: &'static str,
        column: Option<&'static str>,
        ty: Type,
    ) -> &mut Self {
        self.fields.push(PendingField { name, column, ty });
        self
    }

    /// Marks the identity field. Defaults to the field mapped to `id`.
    pub fn identity(&mut self, field: &'static str) -> &mut Self {
        self.identity = Some(field);
        self
    }

    /// Marks the creation timestamp field. Defaults to the timestamp field
    /// mapped to `created_at`, if any.
    pub fn created_at(&mut self, field: &'static str) -> &mut Self {
        self.created_at = Some(field);
        self
    }

    /// Marks the update timestamp field. Defaults to the timestamp field
    /// mapped to `updated_at`, if any.
    pub fn updated_at(&mut self, field: &'static str) -> &mut Self {
        self.updated_at = Some(field);
        self
    }

    pub fn build(&self) -> Result<TableBinding> {
        let shape = |kind| Error::shape(self.model, kind);

        let mut fields: Vec<Field> = self
            .fields
            .iter()
            .map(|pending| Field {
                name: pending.name,
                column: match pending.column {
                    Some(column) => column.to_string(),
                    None => column_name(pending.name),
                },
                ty: pending.ty,
                role: FieldRole::Plain,
            })
            .collect();

        for (i, field) in fields.iter().enumerate() {
            if let Some(prev) = fields[..i].iter().find(|f| f.column == field.column) {
                return Err(shape(ShapeErrorKind::DuplicateColumn {
                    column: field.column.clone(),
                    first: prev.name.to_string(),
                    second: field.name.to_string(),
                }));
            }
        }

        let identity = match self.identity {
            Some(name) => fields.iter().position(|f| f.name == name).ok_or_else(|| {
                shape(ShapeErrorKind::UnknownField {
                    field: name.to_string(),
                })
            })?,
            None => fields
                .iter()
                .position(|f| f.column == "id")
                .ok_or_else(|| shape(ShapeErrorKind::NoIdentityField))?,
        };

        if !fields[identity].ty.is_integer() {
            return Err(shape(ShapeErrorKind::IdentityNotInteger {
                field: fields[identity].name.to_string(),
            }));
        }
        fields[identity].role = FieldRole::Identity;

        for (marked, default_column, role) in [
            (self.created_at, "created_at", FieldRole::CreatedAt),
            (self.updated_at, "updated_at", FieldRole::UpdatedAt),
        ] {
            let index = match marked {
                Some(name) => {
                    let index = fields.iter().position(|f| f.name == name).ok_or_else(|| {
                        shape(ShapeErrorKind::UnknownField {
                            field: name.to_string(),
                        })
                    })?;

                    if !fields[index].ty.is_timestamp() {
                        return Err(shape(ShapeErrorKind::TimestampNotTimestamp {
                            field: name.to_string(),
                        }));
                    }

                    Some(index)
                }
                None => fields
                    .iter()
                    .position(|f| f.column == default_column && f.ty.is_timestamp()),
            };

            if let Some(index) = index {
                if fields[index].role == FieldRole::Plain {
                    fields[index].role = role;
                }
            }
        }

        Ok(TableBinding {
            model: self.model,
            table: self
                .table
                .clone()
                .unwrap_or_else(|| table_name(self.model)),
            fields,
            identity,
        })
    }
}
