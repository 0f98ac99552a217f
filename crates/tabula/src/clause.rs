//! Decides, per field and per write, which columns a statement writes and
//! with what values.

use crate::{Error, Result};

use chrono::{DateTime, Utc};
use tabula_core::{
    schema::{FieldDescriptor, FieldRole, TableBinding},
    stmt::Value,
};
use tabula_sql::ClauseSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Op {
    Create,
    Update,
}

/// Builds the clause set for a write, returning it along with the record's
/// identity value when one is set.
///
/// | field       | CREATE                    | UPDATE                        |
/// |-------------|---------------------------|-------------------------------|
/// | identity    | written when set          | never written, becomes filter |
/// | created at  | written, `now` when unset | never written                 |
/// | updated at  | written, `now` when unset | always written as `now`       |
/// | other       | written when set          | written when set              |
///
/// An update without an identity value fails with a missing-identity error.
pub(crate) fn build(
    binding: &TableBinding,
    fields: &[FieldDescriptor],
    op: Op,
    now: DateTime<Utc>,
) -> Result<(Option<i64>, ClauseSet)> {
    let mut identity = None;
    let mut clauses = ClauseSet::new();

    for field in fields {
        match (field.role, op) {
            (FieldRole::Identity, _) => {
                let Some(id) = identity_value(field) else {
                    continue;
                };

                identity = Some(id);

                if op == Op::Create {
                    clauses.insert(&field.column, field.value.clone());
                }
            }
            (FieldRole::CreatedAt, Op::Create) => {
                clauses.insert(&field.column, value_or_now(field, now));
            }
            (FieldRole::CreatedAt, Op::Update) => {}
            (FieldRole::UpdatedAt, Op::Create) => {
                clauses.insert(&field.column, value_or_now(field, now));
            }
            (FieldRole::UpdatedAt, Op::Update) => {
                clauses.insert(&field.column, Value::Timestamp(now));
            }
            (FieldRole::Plain, _) => {
                if !field.unset {
                    clauses.insert(&field.column, field.value.clone());
                }
            }
        }
    }

    if op == Op::Update && identity.is_none() {
        return Err(Error::missing_identity(binding.model));
    }

    Ok((identity, clauses))
}

/// The identity a field carries. Zero counts as absent even when the field
/// type can represent it as set, e.g. `Some(0)`.
pub(crate) fn identity_value(field: &FieldDescriptor) -> Option<i64> {
    if field.unset {
        return None;
    }

    field.value.to_i64().filter(|id| *id != 0)
}

fn value_or_now(field: &FieldDescriptor, now: DateTime<Utc>) -> Value {
    if field.unset {
        Value::Timestamp(now)
    } else {
        field.value.clone()
    }
}
