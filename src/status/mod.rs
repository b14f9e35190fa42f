pub mod client;
pub mod error;
pub mod file;
pub mod types;

pub use client::HttpStatusSource;
pub use error::StatusSourceError;
pub use file::FileStatusSource;
pub use types::RobotStatus;

/// Anything that can produce the current robot roster.
///
/// The search layer only sees this trait, so selection can run against a
/// live service, a local file or an in-memory stub alike.
#[allow(async_fn_in_trait)]
pub trait StatusSource {
    async fn fetch_statuses(&self) -> Result<Vec<RobotStatus>, StatusSourceError>;
}
