/// Core error types for Chorus
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type shared by all connector implementations
#[derive(Error, Debug)]
pub enum CoreError {
    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Network error
    #[error("Network error: {0}")]
    Network(String),

    /// The player could not be reached
    #[error("Player unreachable: {0}")]
    Unreachable(String),

    /// The player rejected a command
    #[error("Command rejected: {0}")]
    CommandRejected(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl CoreError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create an unreachable error
    pub fn unreachable(msg: impl Into<String>) -> Self {
        Self::Unreachable(msg.into())
    }
}
