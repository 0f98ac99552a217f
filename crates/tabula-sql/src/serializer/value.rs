use super::{Formatter, Params, ToSql};

use crate::stmt;

/// Values are never inlined; each one becomes the next placeholder.
impl ToSql for &stmt::Value {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let placeholder = f.params.push(self);
        fmt!(f, placeholder);
    }
}
