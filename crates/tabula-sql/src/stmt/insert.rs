use super::{ClauseSet, Statement};

#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// Table to insert into
    pub table: String,

    /// Columns and their values, never empty
    pub values: ClauseSet,
}

impl From<Insert> for Statement {
    fn from(src: Insert) -> Statement {
        Statement::Insert(src)
    }
}
