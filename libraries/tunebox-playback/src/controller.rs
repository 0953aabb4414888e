//! Transport control
//!
//! Decides what the media element should play, driven by the active
//! playlist and the outcomes of library mutations.

use crate::equalizer::Equalizer;
use crate::error::{PlaybackError, Result};
use crate::queue::PlayQueue;
use crate::types::{NowPlaying, PlaybackState};
use crate::volume::Volume;
use tracing::debug;
use tunebox_library::{AddOutcome, RemoveOutcome};

/// Playback controller
#[derive(Debug, Clone, Default)]
pub struct PlaybackController {
    state: PlaybackState,
    loaded: Option<NowPlaying>,
    volume: Volume,
    equalizer: Equalizer,
}

impl PlaybackController {
    /// Create a stopped controller
    pub fn new(volume: u8) -> Self {
        Self {
            volume: Volume::new(volume),
            ..Self::default()
        }
    }

    // ===== Transport =====

    /// Load and play the track at `index`
    ///
    /// An out-of-range index changes nothing.
    pub fn play_index<Q: PlayQueue + ?Sized>(&mut self, queue: &mut Q, index: usize) -> Result<&NowPlaying> {
        let track = queue
            .tracks()
            .get(index)
            .ok_or(PlaybackError::IndexOutOfBounds(index))?;
        let now_playing = NowPlaying::from_track(index, track);

        if !queue.set_current(index) {
            return Err(PlaybackError::IndexOutOfBounds(index));
        }

        debug!(index, track = %now_playing.name, "Playing");
        self.state = PlaybackState::Playing;
        Ok(self.loaded.insert(now_playing))
    }

    /// Play/pause button
    ///
    /// Pauses while playing. Otherwise resumes the loaded track, or starts
    /// the current track when nothing is loaded.
    pub fn toggle_play_pause<Q: PlayQueue + ?Sized>(&mut self, queue: &mut Q) -> PlaybackState {
        match self.state {
            PlaybackState::Playing => self.state = PlaybackState::Paused,
            PlaybackState::Paused if self.loaded.is_some() => self.state = PlaybackState::Playing,
            PlaybackState::Paused | PlaybackState::Stopped => {
                if !queue.is_empty() {
                    let index = queue.current().unwrap_or(0);
                    // Ignored if the queue shrank under the current index
                    let _ = self.play_index(queue, index);
                }
            }
        }
        self.state
    }

    /// Skip forward, wrapping to the first track
    pub fn next<Q: PlayQueue + ?Sized>(&mut self, queue: &mut Q) -> Option<&NowPlaying> {
        let len = queue.len();
        if len == 0 {
            return None;
        }
        let index = queue.current().map_or(0, |current| (current + 1) % len);
        self.play_index(queue, index).ok()
    }

    /// Skip back, wrapping to the last track
    pub fn previous<Q: PlayQueue + ?Sized>(&mut self, queue: &mut Q) -> Option<&NowPlaying> {
        let len = queue.len();
        if len == 0 {
            return None;
        }
        let index = queue
            .current()
            .map_or(len - 1, |current| (current + len - 1) % len);
        self.play_index(queue, index).ok()
    }

    /// The loaded track finished
    pub fn on_ended<Q: PlayQueue + ?Sized>(&mut self, queue: &mut Q) -> Option<&NowPlaying> {
        self.next(queue)
    }

    /// Unload the track
    pub fn stop(&mut self) {
        self.state = PlaybackState::Stopped;
        self.loaded = None;
    }

    // ===== Library events =====

    /// The active playlist changed
    pub fn on_switch(&mut self) {
        self.stop();
    }

    /// A track was appended
    ///
    /// Starts playback when it is the active playlist's first track. Adds to
    /// other playlists are ignored.
    pub fn on_track_added<Q: PlayQueue + ?Sized>(&mut self, queue: &mut Q, outcome: &AddOutcome) -> Option<&NowPlaying> {
        if !outcome.active || !outcome.first_track {
            return None;
        }
        self.play_index(queue, outcome.index).ok()
    }

    /// A track was removed from the active playlist
    ///
    /// Removing the current track stops it and moves on to whatever the
    /// rebased current index names. Other removals only shift indices.
    pub fn on_track_removed<Q: PlayQueue + ?Sized>(&mut self, queue: &mut Q, outcome: &RemoveOutcome) {
        if outcome.current_removed {
            self.stop();
            if let Some(index) = queue.current() {
                let _ = self.play_index(queue, index);
            }
        } else if let (Some(loaded), Some(current)) = (self.loaded.as_mut(), queue.current()) {
            loaded.index = current;
        }
    }

    /// A track of the active playlist was moved
    ///
    /// The loaded track keeps playing; only its position follows the queue.
    pub fn on_track_moved<Q: PlayQueue + ?Sized>(&mut self, queue: &Q) {
        if let (Some(loaded), Some(current)) = (self.loaded.as_mut(), queue.current()) {
            loaded.index = current;
        }
    }

    // ===== State =====

    /// Transport state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Loaded track
    pub fn now_playing(&self) -> Option<&NowPlaying> {
        self.loaded.as_ref()
    }

    /// Volume settings
    pub fn volume(&self) -> &Volume {
        &self.volume
    }

    /// Mutable volume settings
    pub fn volume_mut(&mut self) -> &mut Volume {
        &mut self.volume
    }

    /// Equalizer settings
    pub fn equalizer(&self) -> &Equalizer {
        &self.equalizer
    }

    /// Mutable equalizer settings
    pub fn equalizer_mut(&mut self) -> &mut Equalizer {
        &mut self.equalizer
    }
}
