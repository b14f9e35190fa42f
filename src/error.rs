use thiserror::Error;

use crate::selector::SelectionError;
use crate::status::StatusSourceError;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("No candidate robots: the status roster is empty")]
    NoCandidates,

    #[error("Robot status source error: {0}")]
    StatusSource(#[from] StatusSourceError),
}

impl From<SelectionError> for DispatchError {
    fn from(err: SelectionError) -> Self {
        match err {
            SelectionError::EmptyInput => DispatchError::NoCandidates,
        }
    }
}

impl DispatchError {
    /// Process exit code for this failure: 2 when there was nothing to pick from, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            DispatchError::NoCandidates => 2,
            _ => 1,
        }
    }
}
