//! Error types for the DAM adapter

use thiserror::Error;

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Reference(#[from] ReferenceError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by the signed API transport
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Request rejected by the DAM endpoint; check the API user and private key")]
    Unauthorized,

    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    #[error("Malformed API response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Transport("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Transport("Failed to connect to DAM endpoint".to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// Errors raised while resolving or fetching a file
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Malformed source handle: {0}")]
    InvalidSource(String),

    #[error("File unavailable: the DAM returned no download path for {0}")]
    Resolution(String),

    #[error("Download did not complete: {0}")]
    Download(String),

    #[error("Destination cannot be created: {0}")]
    NotFound(String),
}

/// Errors raised while decoding a persisted file reference
#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("Corrupt file reference: {0}")]
    Corrupt(String),

    #[error("Unsupported file reference version {0}")]
    UnsupportedVersion(u32),
}
