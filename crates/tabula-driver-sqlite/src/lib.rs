mod value;
pub(crate) use value::Value;

use rusqlite::{Connection, ErrorCode};
use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};
use tabula_core::{
    async_trait,
    driver::{
        operation::{Operation, Returning},
        Capability, Driver, Response,
    },
    stmt::Row,
    DriverFailure, Error, Result,
};
use url::Url;

/// SQLite driver backed by a single `rusqlite` connection.
#[derive(Debug)]
pub struct Sqlite {
    connection: Mutex<Connection>,
}

impl Sqlite {
    /// Opens a database from a connection URL: `sqlite::memory:` or
    /// `sqlite:<path>`.
    pub fn connect(url: &str) -> Result<Self> {
        let parsed = Url::parse(url)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url}")))?;

        if parsed.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url}"
            )));
        }

        match parsed.path() {
            ":memory:" => Self::in_memory(),
            "" => Err(Error::invalid_connection_url(format!(
                "missing database path; url={url}"
            ))),
            path => Self::open(PathBuf::from(path)),
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Result<Self> {
        let connection = Connection::open_in_memory().map_err(driver_err)?;
        Ok(Self::new(connection))
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).map_err(driver_err)?;
        Ok(Self::new(connection))
    }

    pub fn new(connection: Connection) -> Self {
        Self {
            connection: Mutex::new(connection),
        }
    }

    /// Runs one or more `;`-separated statements without parameters. Used for
    /// schema setup, which the mapper itself never issues.
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        self.lock()?.execute_batch(sql).map_err(driver_err)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>> {
        self.connection
            .lock()
            .map_err(|_| tabula_core::err!("sqlite connection lock poisoned"))
    }
}

#[async_trait]
impl Driver for Sqlite {
    fn capability(&self) -> &'static Capability {
        &Capability::SQLITE
    }

    async fn exec(&self, op: Operation) -> Result<Response> {
        let Operation::QuerySql(op) = op;

        let connection = self.lock()?;
        let mut stmt = connection.prepare_cached(&op.sql).map_err(driver_err)?;

        let params = op.params.into_iter().map(Value::from).collect::<Vec<_>>();

        if op.ret == Returning::Count {
            let count = stmt
                .execute(rusqlite::params_from_iter(params.iter()))
                .map_err(driver_err)?;

            return Ok(Response::count(count as u64));
        }

        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();

        let mut rows = stmt
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(driver_err)?;

        let mut ret = vec![];

        while let Some(row) = rows.next().map_err(driver_err)? {
            let mut record = Row::with_capacity(columns.len());

            for (index, column) in columns.iter().enumerate() {
                record.push(column.clone(), Value::from_sql(row, index)?.into_inner());
            }

            ret.push(record);
        }

        Ok(Response::values(ret))
    }
}

fn driver_err(err: rusqlite::Error) -> Error {
    let failure = match err.sqlite_error_code() {
        Some(ErrorCode::ConstraintViolation) => DriverFailure::ConstraintViolation,
        Some(ErrorCode::OperationInterrupted) => DriverFailure::Cancelled,
        Some(ErrorCode::CannotOpen) | Some(ErrorCode::NotADatabase) => DriverFailure::Connection,
        _ => DriverFailure::Other,
    };

    Error::driver_operation_failed(failure, err)
}
