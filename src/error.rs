//! Error types for the cortical client.

use thiserror::Error;

/// The main error type for cortical operations.
#[derive(Error, Debug)]
pub enum CorticalError {
    /// No API key was supplied and the environment fallback is unset.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Geometry requested for a retina outside the registry.
    #[error("Unknown retina: {0}")]
    UnknownRetina(String),

    /// The remote service answered with a non-200 status.
    #[error("Response {status}: {body}")]
    RemoteService {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// Invalid caller input.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Cache key not present. Public operations treat this as "fetch remotely".
    #[error("Cache miss: {0}")]
    CacheMiss(String),

    /// Malformed cached or remote JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Transport-level failure (connection, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for cortical operations.
pub type Result<T> = std::result::Result<T, CorticalError>;

impl CorticalError {
    /// Returns true for the internal cache-miss signal.
    pub fn is_cache_miss(&self) -> bool {
        matches!(self, CorticalError::CacheMiss(_))
    }
}

impl From<tempfile::PersistError> for CorticalError {
    fn from(err: tempfile::PersistError) -> Self {
        CorticalError::Io(err.error)
    }
}
