use crate::logging_driver::DriverOp;
use std::sync::{Arc, Mutex};
use tabula_core::{driver::operation::QuerySql, stmt::Value};

/// A wrapper around the operations log that provides a clean API for tests
#[derive(Debug, Clone)]
pub struct ExecLog {
    ops: Arc<Mutex<Vec<DriverOp>>>,
}

impl ExecLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<DriverOp>>>) -> Self {
        Self { ops }
    }

    /// Get the number of logged operations
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// The SQL text of every logged statement, in execution order
    pub fn sql(&self) -> Vec<String> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .map(|op| op.operation.sql.clone())
            .collect()
    }

    /// Count statements whose SQL starts with `prefix`, e.g. `"UPDATE"`
    pub fn count_prefixed(&self, prefix: &str) -> usize {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| op.operation.sql.starts_with(prefix))
            .count()
    }

    /// Removes the oldest logged operation along with the driver's response
    #[track_caller]
    pub fn pop_op(&self) -> DriverOp {
        let mut ops = self.ops.lock().unwrap();
        assert!(!ops.is_empty(), "exec log is empty");
        ops.remove(0)
    }

    /// Removes and returns the oldest logged statement
    #[track_caller]
    pub fn pop(&self) -> QuerySql {
        self.pop_op().operation
    }

    /// Removes the oldest logged operation and returns the number of rows it
    /// affected. Panics unless the driver answered with a row count.
    #[track_caller]
    pub fn pop_count(&self) -> u64 {
        let op = self.pop_op();
        let response = op.response.expect("operation failed");
        assert!(response.rows.is_count(), "expected a count; sql={}", op.operation.sql);
        response.rows.into_count().unwrap()
    }

    /// Removes the oldest logged statement, returning its SQL and params
    #[track_caller]
    pub fn pop_sql(&self) -> (String, Vec<Value>) {
        let op = self.pop();
        (op.sql, op.params)
    }

    /// Clear the log
    pub fn clear(&self) {
        self.ops.lock().unwrap().clear();
    }
}
