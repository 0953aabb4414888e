//! What the transport plays from
//!
//! The controller only needs the active playlist's tracks and a current
//! index it can move. The library manager provides both; tests can use a
//! plain vector.

use tunebox_core::Track;
use tunebox_library::LibraryManager;

/// Ordered tracks with a movable current index
pub trait PlayQueue {
    /// Tracks in play order
    fn tracks(&self) -> &[Track];

    /// Index of the current track, if any
    fn current(&self) -> Option<usize>;

    /// Move the current index; returns `false` if out of range
    fn set_current(&mut self, index: usize) -> bool;

    /// Number of tracks
    fn len(&self) -> usize {
        self.tracks().len()
    }

    /// Check if there is nothing to play
    fn is_empty(&self) -> bool {
        self.tracks().is_empty()
    }
}

impl PlayQueue for LibraryManager {
    fn tracks(&self) -> &[Track] {
        self.active_tracks()
    }

    fn current(&self) -> Option<usize> {
        self.current_index()
    }

    fn set_current(&mut self, index: usize) -> bool {
        LibraryManager::set_current(self, index).is_ok()
    }
}

/// Vector-backed queue
#[derive(Debug, Clone, Default)]
pub struct VecQueue {
    tracks: Vec<Track>,
    current: Option<usize>,
}

impl VecQueue {
    /// Create a queue with no current track
    pub fn new(tracks: Vec<Track>) -> Self {
        Self {
            tracks,
            current: None,
        }
    }
}

impl PlayQueue for VecQueue {
    fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    fn current(&self) -> Option<usize> {
        self.current
    }

    fn set_current(&mut self, index: usize) -> bool {
        if index >= self.tracks.len() {
            return false;
        }
        self.current = Some(index);
        true
    }
}
