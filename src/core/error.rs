use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Remote JSON store unreachable, timed out, or answered with a
    /// non-success status. Always absorbed by the fallback chain before it
    /// reaches a caller of the gateway.
    #[error("Remote store unavailable: {0}")]
    RemoteUnavailable(String),

    /// Local cache slot could not be written for lack of space. The
    /// in-memory state stays usable; the caller is expected to warn that
    /// data may not survive a reload.
    #[error("Local storage exhausted: {0}")]
    StorageExhausted(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
