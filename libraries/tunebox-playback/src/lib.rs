//! Tunebox Playback
//!
//! Platform-agnostic playback state for Tunebox.
//!
//! This crate provides:
//! - Transport control (play, pause, next/previous with wrap-around)
//! - Reactions to library mutations (auto-start, current track removed)
//! - Volume control (0-100%, mute/unmute)
//! - Five-band peaking equalizer with presets
//! - Frequency-bar visualizer layout
//!
//! Decoding and audio output belong to the platform media stack; this crate
//! only decides what it should be doing.
//!
//! # Example
//!
//! ```rust
//! use tunebox_core::{Track, TrackSource};
//! use tunebox_playback::{PlaybackController, PlaybackState, VecQueue};
//!
//! let mut queue = VecQueue::new(vec![
//!     Track::new("One", TrackSource::remote("https://cdn.example.com/1.m4a")),
//!     Track::new("Two", TrackSource::remote("https://cdn.example.com/2.m4a")),
//! ]);
//!
//! let mut controller = PlaybackController::new(80);
//! assert_eq!(controller.toggle_play_pause(&mut queue), PlaybackState::Playing);
//! assert_eq!(controller.next(&mut queue).unwrap().name, "Two");
//! assert_eq!(controller.next(&mut queue).unwrap().name, "One");
//! ```

mod controller;
pub mod equalizer;
mod error;
mod queue;
mod types;
pub mod visualizer;
mod volume;

pub use controller::PlaybackController;
pub use equalizer::{EqBand, EqPreset, Equalizer};
pub use error::{PlaybackError, Result};
pub use queue::{PlayQueue, VecQueue};
pub use types::{NowPlaying, PlaybackState};
pub use volume::Volume;
