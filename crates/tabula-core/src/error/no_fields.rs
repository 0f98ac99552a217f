use super::Error;

/// Error when an INSERT or UPDATE would write no columns.
#[derive(Debug)]
pub(super) struct NoFieldsError {
    table: Box<str>,
    statement: &'static str,
}

impl std::error::Error for NoFieldsError {}

impl core::fmt::Display for NoFieldsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.statement {
            "INSERT" => write!(f, "no fields to write: INSERT INTO {}", self.table),
            statement => write!(f, "no fields to write: {statement} {}", self.table),
        }
    }
}

impl Error {
    /// Creates a no-fields error; `statement` is `"INSERT"` or `"UPDATE"`.
    pub fn no_fields(table: impl Into<String>, statement: &'static str) -> Error {
        Error::from(super::ErrorKind::NoFields(NoFieldsError {
            table: table.into().into(),
            statement,
        }))
    }

    pub fn is_no_fields(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NoFields(_))
    }
}
