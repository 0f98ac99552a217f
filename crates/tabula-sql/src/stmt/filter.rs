use super::Value;

/// Row predicate of a statement's `WHERE` clause.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// `<column> = <value>`
    Eq { column: String, value: Value },
}

impl Filter {
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Filter {
        Filter::Eq {
            column: column.into(),
            value: value.into(),
        }
    }

    pub fn column(&self) -> &str {
        match self {
            Filter::Eq { column, .. } => column,
        }
    }
}
