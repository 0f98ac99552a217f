mod clause_set;
pub use clause_set::ClauseSet;

mod delete;
pub use delete::Delete;

mod filter;
pub use filter::Filter;

mod insert;
pub use insert::Insert;

mod query;
pub use query::Query;

mod update;
pub use update::Update;

pub use tabula_core::stmt::*;

use tabula_core::{driver::operation::Returning, Error, Result};

/// A single-table SQL statement.
///
/// Statements are immutable once built. Serialize them with a
/// [`Serializer`](crate::Serializer) to get SQL text and the matching
/// argument list.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Delete(Delete),
    Insert(Insert),
    Query(Query),
    Update(Update),
}

impl Statement {
    /// `SELECT * FROM <table>`
    pub fn select_all(table: impl Into<String>) -> Statement {
        Query {
            table: table.into(),
            filter: None,
        }
        .into()
    }

    /// `SELECT * FROM <table> WHERE <filter>`
    pub fn select(table: impl Into<String>, filter: Filter) -> Statement {
        Query {
            table: table.into(),
            filter: Some(filter),
        }
        .into()
    }

    /// `INSERT INTO <table> (<columns>) VALUES (<placeholders>) RETURNING *`
    ///
    /// Fails with a no-fields error when `values` is empty.
    pub fn insert(table: impl Into<String>, values: ClauseSet) -> Result<Statement> {
        let table = table.into();

        if values.is_empty() {
            return Err(Error::no_fields(table, "INSERT"));
        }

        Ok(Insert { table, values }.into())
    }

    /// `UPDATE <table> SET <assignments> WHERE <filter> RETURNING *`
    ///
    /// Fails with a no-fields error when `assignments` is empty.
    pub fn update(
        table: impl Into<String>,
        assignments: ClauseSet,
        filter: Filter,
    ) -> Result<Statement> {
        let table = table.into();

        if assignments.is_empty() {
            return Err(Error::no_fields(table, "UPDATE"));
        }

        Ok(Update {
            table,
            assignments,
            filter,
        }
        .into())
    }

    /// `DELETE FROM <table> WHERE <filter>`
    pub fn delete(table: impl Into<String>, filter: Filter) -> Statement {
        Delete {
            table: table.into(),
            filter,
        }
        .into()
    }

    pub fn table(&self) -> &str {
        match self {
            Statement::Delete(stmt) => &stmt.table,
            Statement::Insert(stmt) => &stmt.table,
            Statement::Query(stmt) => &stmt.table,
            Statement::Update(stmt) => &stmt.table,
        }
    }

    /// What executing the statement yields.
    pub fn returning(&self) -> Returning {
        match self {
            Statement::Delete(_) => Returning::Count,
            _ => Returning::Rows,
        }
    }

    /// Every identifier the statement writes into SQL text, table first.
    pub(crate) fn identifiers(&self) -> Vec<&str> {
        let mut idents = vec![self.table()];

        match self {
            Statement::Delete(stmt) => idents.push(stmt.filter.column()),
            Statement::Insert(stmt) => idents.extend(stmt.values.columns()),
            Statement::Query(stmt) => idents.extend(stmt.filter.as_ref().map(Filter::column)),
            Statement::Update(stmt) => {
                idents.extend(stmt.assignments.columns());
                idents.push(stmt.filter.column());
            }
        }

        idents
    }
}
