use std::path::PathBuf;

use super::StatusSource;
use super::error::StatusSourceError;
use super::types::RobotStatus;

/// Reads a roster snapshot from a local JSON file, in the same shape the
/// status service returns.
pub struct FileStatusSource {
    path: PathBuf,
}

impl FileStatusSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StatusSource for FileStatusSource {
    async fn fetch_statuses(&self) -> Result<Vec<RobotStatus>, StatusSourceError> {
        tracing::debug!(path = %self.path.display(), "reading robot statuses");
        let contents = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&contents)?)
    }
}
