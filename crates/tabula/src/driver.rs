use crate::{Error, Result};

pub use tabula_core::driver::{
    operation::{self, Operation},
    Capability, Driver, Response, Rows, SqlFlavor,
};

use std::sync::Arc;
use url::Url;

#[derive(Debug)]
pub(crate) enum Connection {
    #[cfg(feature = "postgresql")]
    PostgreSQL(tabula_driver_postgresql::PostgreSQL),

    #[cfg(feature = "sqlite")]
    Sqlite(tabula_driver_sqlite::Sqlite),
}

impl Connection {
    /// Picks a driver from the URL scheme: `postgresql://...` or
    /// `sqlite::memory:` / `sqlite:<path>`.
    pub(crate) async fn connect(url: &str) -> Result<Self> {
        let parsed = Url::parse(url)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url}")))?;

        match parsed.scheme() {
            "postgresql" | "postgres" => Self::connect_postgresql(url).await,
            "sqlite" => Self::connect_sqlite(url),
            scheme => Err(Error::invalid_connection_url(format!(
                "unsupported database; scheme={scheme}; url={url}"
            ))),
        }
    }

    #[cfg(feature = "postgresql")]
    async fn connect_postgresql(url: &str) -> Result<Self> {
        let driver = tabula_driver_postgresql::PostgreSQL::connect(url).await?;
        Ok(Connection::PostgreSQL(driver))
    }

    #[cfg(not(feature = "postgresql"))]
    async fn connect_postgresql(_url: &str) -> Result<Self> {
        Err(Error::invalid_connection_url(
            "`postgresql` feature not enabled",
        ))
    }

    #[cfg(feature = "sqlite")]
    fn connect_sqlite(url: &str) -> Result<Self> {
        let driver = tabula_driver_sqlite::Sqlite::connect(url)?;
        Ok(Connection::Sqlite(driver))
    }

    #[cfg(not(feature = "sqlite"))]
    fn connect_sqlite(_url: &str) -> Result<Self> {
        Err(Error::invalid_connection_url("`sqlite` feature not enabled"))
    }

    pub(crate) fn into_driver(self) -> Arc<dyn Driver> {
        match self {
            #[cfg(feature = "postgresql")]
            Connection::PostgreSQL(driver) => Arc::new(driver),

            #[cfg(feature = "sqlite")]
            Connection::Sqlite(driver) => Arc::new(driver),
        }
    }
}
