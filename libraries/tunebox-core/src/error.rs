/// Core error types for Tunebox
use thiserror::Error;

/// Result type alias using `TuneboxError`
pub type Result<T> = std::result::Result<T, TuneboxError>;

/// Error reported across the storage trait seam
///
/// Adapters convert their own error types into this one, so callers of
/// `BlobStore` and `PlaylistStore` see a single failure shape.
#[derive(Error, Debug)]
pub enum TuneboxError {
    /// A store operation failed
    #[error("Storage error: {0}")]
    Storage(String),
}

impl TuneboxError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_error_message() {
        let err = TuneboxError::storage("disk full");
        assert_eq!(err.to_string(), "Storage error: disk full");
    }
}
