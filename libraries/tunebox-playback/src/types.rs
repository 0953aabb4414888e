//! Core types for playback control

use serde::{Deserialize, Serialize};
use tunebox_core::Track;

/// Transport state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Nothing loaded
    #[default]
    Stopped,

    /// Currently playing
    Playing,

    /// Paused with a track loaded
    Paused,
}

/// The track loaded into the media element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NowPlaying {
    /// Index in the active playlist when it was loaded
    pub index: usize,

    /// Display name
    pub name: String,

    /// Source handed to the media element
    pub src: String,
}

impl NowPlaying {
    /// Capture a track at an index
    pub fn from_track(index: usize, track: &Track) -> Self {
        Self {
            index,
            name: track.name.clone(),
            src: track.source.as_src().to_string(),
        }
    }
}
