mod clause;

pub mod db;
pub use db::Db;

pub mod driver;

mod exec;

mod model;
pub use model::Model;

pub mod stmt;
pub use stmt::Primitive;

pub use tabula_core::{
    bail, err,
    schema::{FieldDescriptor, FieldRole, TableBinding},
    Error, Result, ShapeErrorKind,
};

pub use tabula_macros::Model;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{
        model::{describe_field, load_field},
        Model, Primitive, Result,
    };
    pub use tabula_core::{
        schema::{FieldDescriptor, TableBinding},
        stmt::{Row, Type, Value},
    };
}
