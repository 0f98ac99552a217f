use std::collections::HashMap;

use tokio_postgres::Statement;

/// Prepared statements of one connection, keyed by SQL text.
///
/// Statements are cheap handles; `get` hands out clones so the cache can be
/// released before the statement is executed.
#[derive(Debug, Default, Clone)]
pub struct StatementCache {
    map: HashMap<String, Statement>,
}

impl StatementCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, query: &str) -> Option<Statement> {
        self.map.get(query).map(ToOwned::to_owned)
    }

    pub fn insert(&mut self, query: &str, statement: Statement) {
        self.map.insert(query.to_string(), statement);
    }
}
