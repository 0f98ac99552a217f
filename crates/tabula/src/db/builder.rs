use super::Db;
use crate::{
    driver::{Connection, Driver},
    exec::Executor,
    Model, Result,
};

use std::sync::Arc;

#[derive(Default)]
pub struct Builder {
    /// Binding checks for registered models, run when the handle is built
    models: Vec<fn() -> Result<()>>,
}

impl Builder {
    /// Registers a model so that an invalid table binding fails `build` or
    /// `connect` instead of the first operation on the model.
    pub fn register<M: Model>(&mut self) -> &mut Self {
        self.models.push(|| M::binding().map(|_| ()));
        self
    }

    pub async fn connect(&mut self, url: &str) -> Result<Db> {
        let connection = Connection::connect(url).await?;
        self.build_with(connection.into_driver())
    }

    pub fn build(&mut self, driver: impl Driver) -> Result<Db> {
        self.build_with(Arc::new(driver))
    }

    fn build_with(&mut self, driver: Arc<dyn Driver>) -> Result<Db> {
        for check in &self.models {
            check()?;
        }

        Ok(Db {
            exec: Executor::new(driver),
        })
    }
}

impl std::fmt::Debug for Builder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builder")
            .field("models", &self.models.len())
            .finish()
    }
}
