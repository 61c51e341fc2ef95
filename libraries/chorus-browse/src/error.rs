/// Error types for lazy browse collections
use thiserror::Error;

/// Result type alias using `BrowseError`
pub type Result<T> = std::result::Result<T, BrowseError>;

/// Errors produced while completing browse data.
///
/// The error is cloneable because one failed batch is broadcast to every
/// subscriber of every cell in that batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BrowseError {
    /// The completion function failed to deliver data for a batch
    #[error("Completion failed: {0}")]
    Completion(String),

    /// The completion function did not deliver data in time
    #[error("Completion timed out: {0}")]
    Timeout(String),
}

impl BrowseError {
    /// Create a completion error
    pub fn completion(msg: impl Into<String>) -> Self {
        Self::Completion(msg.into())
    }
}
