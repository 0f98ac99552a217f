mod capability;
pub use capability::{Capability, SqlFlavor};

mod response;
pub use response::{Response, Rows};

pub mod operation;
pub use operation::Operation;

use crate::async_trait;

use std::fmt::Debug;

#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Describes the driver's capability, which informs how statements are
    /// rendered for it.
    fn capability(&self) -> &'static Capability;

    /// Execute a database operation
    async fn exec(&self, op: Operation) -> crate::Result<Response>;
}
