use super::{Filter, Statement};

#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Table to select from
    pub table: String,

    /// Optional row predicate. `None` selects every row.
    pub filter: Option<Filter>,
}

impl From<Query> for Statement {
    fn from(src: Query) -> Statement {
        Statement::Query(src)
    }
}
