use super::Error;

/// Error when a record type cannot be mapped onto a table row, or when a row
/// returned by the database does not fit the record.
#[derive(Debug)]
pub(super) struct ShapeError {
    pub(super) model: Box<str>,
    pub(super) kind: ShapeErrorKind,
}

/// What is wrong with the record's shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeErrorKind {
    /// No field is marked `#[key]` and no field maps to the identity column.
    NoIdentityField,

    /// The identity field must hold an integer.
    IdentityNotInteger { field: String },

    /// A lifecycle timestamp field must hold a timestamp.
    TimestampNotTimestamp { field: String },

    /// Two fields derive the same column name.
    DuplicateColumn {
        column: String,
        first: String,
        second: String,
    },

    /// A field named in the binding configuration does not exist.
    UnknownField { field: String },

    /// A row returned by the database is missing a mapped column.
    MissingColumn { column: String },
}

impl std::error::Error for ShapeError {}

impl core::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid shape for `{}`: ", self.model)?;

        match &self.kind {
            ShapeErrorKind::NoIdentityField => {
                f.write_str("no identity field (mark one with #[key] or name it `id`)")
            }
            ShapeErrorKind::IdentityNotInteger { field } => {
                write!(f, "identity field `{field}` is not an integer")
            }
            ShapeErrorKind::TimestampNotTimestamp { field } => {
                write!(f, "lifecycle field `{field}` is not a timestamp")
            }
            ShapeErrorKind::DuplicateColumn {
                column,
                first,
                second,
            } => write!(
                f,
                "fields `{first}` and `{second}` both map to column `{column}`"
            ),
            ShapeErrorKind::UnknownField { field } => {
                write!(f, "no mapped field named `{field}`")
            }
            ShapeErrorKind::MissingColumn { column } => {
                write!(f, "row has no column `{column}`")
            }
        }
    }
}

impl Error {
    /// Creates a shape error for the named record type.
    pub fn shape(model: impl Into<String>, kind: ShapeErrorKind) -> Error {
        Error::from(super::ErrorKind::Shape(ShapeError {
            model: model.into().into(),
            kind,
        }))
    }

    /// Returns `true` if this error is a shape error.
    pub fn is_shape(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Shape(_))
    }

    /// Returns the shape error detail, if this is a shape error.
    pub fn shape_kind(&self) -> Option<&ShapeErrorKind> {
        match self.kind() {
            super::ErrorKind::Shape(err) => Some(&err.kind),
            _ => None,
        }
    }
}
