pub mod driver;
pub use driver::Driver;

mod error;
pub use error::{DriverFailure, Error, IntoError, ShapeErrorKind};

pub mod schema;
pub use schema::TableBinding;

pub mod stmt;

/// A Result type alias that uses Tabula's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
