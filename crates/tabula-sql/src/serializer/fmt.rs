use super::{Formatter, Params};

/// Writes each fragment in turn. Fragments are single token trees: literals,
/// identifiers or parenthesized expressions.
macro_rules! fmt {
    ($f:expr, $( $fragments:tt )*) => {{
        $(
            $fragments.to_sql($f);
        )*
    }};
}

pub(super) trait ToSql {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>);
}

impl ToSql for &str {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        f.dst.push_str(self);
    }
}
