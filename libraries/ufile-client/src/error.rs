//! Error types for the ufile.io client.

use thiserror::Error;

/// Errors that can occur when interacting with the ufile.io API.
#[derive(Error, Debug)]
pub enum UfileError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-200 status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Operation requires an API key but none is configured
    #[error("API key required")]
    NotAuthenticated,

    /// Input rejected before any request was made
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid base URL
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),

    /// Failed to decode a response body
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// IO error while reading a file for upload
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for ufile client operations.
pub type Result<T> = std::result::Result<T, UfileError>;
