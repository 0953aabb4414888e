//! Tunebox Core
//!
//! Platform-agnostic core types, traits, and error handling for Tunebox.
//!
//! This crate provides the foundational building blocks shared by the storage
//! adapters, the library manager, the playback controller and the front ends.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Playlist`, `Library`, `PlaylistSnapshot`
//! - **Storage Traits**: `BlobStore` (raw upload bytes) and `PlaylistStore`
//!   (playlist structure snapshot)
//! - **Session Media**: ephemeral handles that resolve uploaded bytes
//! - **Error Handling**: Unified `TuneboxError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use tunebox_core::types::{Library, Track, TrackSource};
//!
//! let mut library = Library::new("My Playlist");
//! let track = Track::new("Song", TrackSource::remote("https://cdn.example.com/song.m4a"));
//! library.tracks_mut("My Playlist").unwrap().push(track);
//!
//! assert_eq!(library.active_playlist().len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod media;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{Result, TuneboxError};
pub use media::SessionMedia;
pub use storage::{BlobStore, PlaylistStore, StoredBlob};

pub use types::{
    BlobKey, Library, Playlist, PlaylistSnapshot, SnapshotTrack, Theme, Track, TrackSource,
    DEFAULT_PLAYLIST_NAME,
};
