mod query_sql;
pub use query_sql::{QuerySql, Returning};

#[derive(Debug, Clone)]
pub enum Operation {
    /// Execute a SQL statement
    QuerySql(QuerySql),
}
