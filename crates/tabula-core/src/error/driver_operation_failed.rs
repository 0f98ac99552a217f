use super::Error;

/// How a database collaborator failed, as classified by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverFailure {
    /// The connection could not be established or was lost.
    Connection,

    /// The statement violated a table constraint (unique, not null, ...).
    ConstraintViolation,

    /// The operation was cancelled or timed out on the database side.
    Cancelled,

    /// Any other failure reported by the database.
    Other,
}

/// Error when a database driver operation fails.
///
/// Wraps the error from the underlying driver library unmodified; it is
/// available through [`std::error::Error::source`].
#[derive(Debug)]
pub(super) struct DriverOperationFailed {
    failure: DriverFailure,
    inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for DriverOperationFailed {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for DriverOperationFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        // Display the error and walk its source chain
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from a driver operation failure.
    ///
    /// This is the way drivers convert rusqlite / tokio-postgres errors into
    /// tabula errors.
    pub fn driver_operation_failed(
        failure: DriverFailure,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Error {
        Error::from(super::ErrorKind::DriverOperationFailed(
            DriverOperationFailed {
                failure,
                inner: Box::new(err),
            },
        ))
    }

    /// Returns `true` if this error is a driver operation failure.
    pub fn is_driver_operation_failed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DriverOperationFailed(_))
    }

    pub fn is_connection_failure(&self) -> bool {
        self.driver_failure() == Some(DriverFailure::Connection)
    }

    pub fn is_constraint_violation(&self) -> bool {
        self.driver_failure() == Some(DriverFailure::ConstraintViolation)
    }

    pub fn is_cancelled(&self) -> bool {
        self.driver_failure() == Some(DriverFailure::Cancelled)
    }

    fn driver_failure(&self) -> Option<DriverFailure> {
        match self.kind() {
            super::ErrorKind::DriverOperationFailed(err) => Some(err.failure),
            _ => None,
        }
    }
}
