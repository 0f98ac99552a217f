use super::{Formatter, ToSql};

use tabula_core::{driver::SqlFlavor, stmt};

pub trait Params {
    fn push(&mut self, param: &stmt::Value) -> Placeholder;
}

/// 1-based position of a bind argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder(pub usize);

impl Params for Vec<stmt::Value> {
    fn push(&mut self, value: &stmt::Value) -> Placeholder {
        self.push(value.clone());
        Placeholder(self.len())
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        f.dst.push_str(match f.serializer.flavor {
            SqlFlavor::Postgresql => "$",
            SqlFlavor::Sqlite => "?",
        });
        f.dst.push_str(&self.0.to_string());
    }
}
