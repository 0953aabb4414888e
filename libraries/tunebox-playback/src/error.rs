//! Error types for playback control

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// Index outside the active playlist
    #[error("Index out of bounds: {0}")]
    IndexOutOfBounds(usize),

    /// Equalizer band does not exist
    #[error("Unknown equalizer band: {0}")]
    UnknownBand(usize),

    /// Equalizer preset name not recognised
    #[error("Unknown equalizer preset: {0}")]
    UnknownPreset(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
