//! Failures while fetching the robot roster.

use thiserror::Error;

/// Errors raised by a [`StatusSource`](super::StatusSource).
///
/// - [`Unavailable`](StatusSourceError::Unavailable) and
///   [`Status`](StatusSourceError::Status) mean the roster could not be reached
/// - [`Malformed`](StatusSourceError::Malformed) means it was reached but is not
///   a list of robot statuses
#[derive(Debug, Error)]
pub enum StatusSourceError {
    /// Transport failure (DNS, connection refused, timeout).
    #[error("status service unavailable: {0}")]
    Unavailable(#[from] reqwest::Error),

    /// The service answered with a non-success HTTP status.
    #[error("status service returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("malformed robot status payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("cannot read robot roster: {0}")]
    Io(#[from] std::io::Error),
}
