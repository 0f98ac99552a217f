use super::Error;

/// Error when an update or delete is issued for a record whose identity
/// field is unset. This is a caller bug; no statement is sent.
#[derive(Debug)]
pub(super) struct MissingIdentityError {
    model: Box<str>,
}

impl std::error::Error for MissingIdentityError {}

impl core::fmt::Display for MissingIdentityError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "missing identity: {} has no identity value", self.model)
    }
}

impl Error {
    pub fn missing_identity(model: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingIdentity(MissingIdentityError {
            model: model.into().into(),
        }))
    }

    pub fn is_missing_identity(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingIdentity(_))
    }
}
