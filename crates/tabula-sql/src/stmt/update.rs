use super::{ClauseSet, Filter, Statement};

#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    /// Table to update
    pub table: String,

    /// `SET` assignments, never empty
    pub assignments: ClauseSet,

    /// Which rows to update
    pub filter: Filter,
}

impl From<Update> for Statement {
    fn from(src: Update) -> Statement {
        Statement::Update(src)
    }
}
