mod binding;
pub use binding::{Builder, TableBinding};

mod field;
pub use field::{Field, FieldDescriptor, FieldRole};

pub use std_util::str::{snake_case as column_name, table_name};
