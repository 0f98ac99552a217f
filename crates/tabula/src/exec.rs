use crate::{driver::Driver, Error, Result};

use tabula_core::{
    driver::operation::{QuerySql, Returning},
    stmt::Row,
};
use tabula_sql::{Serializer, Statement};

use std::{sync::Arc, time::Instant};

/// Renders statements for the driver's SQL flavor, sends them, and shapes
/// the response.
#[derive(Debug, Clone)]
pub(crate) struct Executor {
    driver: Arc<dyn Driver>,
    serializer: Serializer,
}

impl Executor {
    pub(crate) fn new(driver: Arc<dyn Driver>) -> Executor {
        let serializer = Serializer::for_flavor(driver.capability().flavor);
        Executor { driver, serializer }
    }

    pub(crate) fn driver(&self) -> &dyn Driver {
        &*self.driver
    }

    /// Runs a row-returning statement and returns every row.
    pub(crate) async fn query_all(&self, model: &str, stmt: &Statement) -> Result<Vec<Row>> {
        self.exec(model, stmt, Returning::Rows)
            .await?
            .rows
            .into_values()
    }

    /// Runs a row-returning statement that must produce exactly one row.
    pub(crate) async fn query_one(&self, model: &str, stmt: &Statement) -> Result<Row> {
        let mut rows = self.query_all(model, stmt).await?;

        match rows.len() {
            0 => Err(Error::record_not_found(format!(
                "table={} returned no rows",
                stmt.table()
            ))),
            1 => Ok(rows.remove(0)),
            n => Err(Error::invalid_record_count(format!(
                "expected 1 row, found {n}"
            ))),
        }
    }

    /// Runs a statement that returns no rows, returning the affected count.
    pub(crate) async fn execute(&self, model: &str, stmt: &Statement) -> Result<u64> {
        self.exec(model, stmt, Returning::Count)
            .await?
            .rows
            .into_count()
    }

    async fn exec(
        &self,
        model: &str,
        stmt: &Statement,
        ret: Returning,
    ) -> Result<tabula_core::driver::Response> {
        debug_assert_eq!(stmt.returning(), ret, "stmt={stmt:#?}");

        let mut params = vec![];
        let sql = self.serializer.serialize(stmt, &mut params)?;

        let op = QuerySql { sql, params, ret };
        let start = Instant::now();
        let res = self.driver.exec(op.clone().into()).await;
        let elapsed = start.elapsed();

        tracing::debug!(
            target: "tabula::exec",
            model,
            ?elapsed,
            sql = %op.sql,
            params = ?op.params,
            ok = res.is_ok(),
            "{model} Load"
        );

        res
    }
}
