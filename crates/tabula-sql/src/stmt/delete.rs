use super::{Filter, Statement};

#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    /// Table to delete from
    pub table: String,

    /// Which rows to delete
    pub filter: Filter,
}

impl From<Delete> for Statement {
    fn from(src: Delete) -> Statement {
        Statement::Delete(src)
    }
}
