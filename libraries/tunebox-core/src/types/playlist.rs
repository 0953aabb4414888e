/// Playlist domain type
use crate::types::Track;
use serde::{Deserialize, Serialize};

/// Named, ordered sequence of tracks
///
/// Name uniqueness is enforced by the library manager at creation and rename
/// time. A playlist with zero tracks is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique, non-empty playlist name
    pub name: String,

    /// Tracks in play order
    pub tracks: Vec<Track>,
}

impl Playlist {
    /// Create an empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tracks: Vec::new(),
        }
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if the playlist has no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Get the track at a position
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }
}
