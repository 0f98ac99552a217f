use super::Operation;

use crate::stmt;

#[derive(Debug, Clone)]
pub struct QuerySql {
    /// The rendered SQL statement
    pub sql: String,

    /// Positional arguments, in placeholder order
    pub params: Vec<stmt::Value>,

    /// What the statement yields
    pub ret: Returning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Returning {
    /// The statement produces rows (`SELECT`, `... RETURNING *`)
    Rows,

    /// The statement only reports how many rows it touched
    Count,
}

impl From<QuerySql> for Operation {
    fn from(value: QuerySql) -> Self {
        Self::QuerySql(value)
    }
}
