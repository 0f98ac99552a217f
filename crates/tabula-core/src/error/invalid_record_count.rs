use super::Error;

/// Error when a statement expected to produce exactly one row produced more.
#[derive(Debug)]
pub(super) struct InvalidRecordCount {
    context: Box<str>,
}

impl std::error::Error for InvalidRecordCount {}

impl core::fmt::Display for InvalidRecordCount {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid record count: {}", self.context)
    }
}

impl Error {
    pub fn invalid_record_count(context: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidRecordCount(InvalidRecordCount {
            context: context.into().into(),
        }))
    }

    pub fn is_invalid_record_count(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidRecordCount(_))
    }
}
