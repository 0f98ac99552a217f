mod primitive;
pub use primitive::Primitive;

mod primitive_chrono;

pub use tabula_core::stmt::{Row, Type, Value};
