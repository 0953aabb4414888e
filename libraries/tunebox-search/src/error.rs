//! Error types for the search client.

use thiserror::Error;

/// Errors that can occur when searching.
///
/// Every variant renders the same inline "Error loading results." state in
/// the front ends; the variants only matter for logging.
#[derive(Error, Debug)]
pub enum SearchError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("Server error ({status}): {message}")]
    Status { status: u16, message: String },

    /// Invalid base URL
    #[error("Invalid search URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse the result list
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// Result type for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
