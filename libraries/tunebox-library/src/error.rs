//! Error types for library management

use thiserror::Error;

/// Rejections raised by the library manager
///
/// A rejected operation never mutates the library.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LibraryError {
    /// Playlist name is empty after trimming
    #[error("Playlist name must not be empty")]
    InvalidName,

    /// Another playlist already has this name
    #[error("Playlist already exists: {0}")]
    DuplicateName(String),

    /// Rename to the name the playlist already has
    #[error("Playlist is already named {0}")]
    UnchangedName(String),

    /// No playlist with this name
    #[error("Unknown playlist: {0}")]
    UnknownPlaylist(String),

    /// The sole remaining playlist cannot be deleted
    #[error("Cannot delete the last playlist: {0}")]
    LastPlaylist(String),

    /// Track index outside the playlist
    #[error("Track index {index} out of bounds (playlist has {len} tracks)")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Result type for library operations
pub type Result<T> = std::result::Result<T, LibraryError>;
