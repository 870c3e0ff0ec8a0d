//! Network error types

use serde_json::Value;

/// Network result type
pub type Result<T> = std::result::Result<T, Error>;

/// API client errors
///
/// `Http` displays as the bare message the backend reported (or the
/// endpoint's generic fallback), which is what gets shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        body: Option<Value>,
    },

    #[error("JSON error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] tripdesk_core::Error),
}

impl Error {
    /// HTTP status, when the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            Error::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
