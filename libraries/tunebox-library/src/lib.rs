//! Tunebox Library
//!
//! The single authoritative, in-memory playlist library.
//!
//! This crate provides:
//! - [`LibraryManager`]: create, rename, delete and switch playlists; add,
//!   remove and move tracks; import uploads
//! - Current-index rebasing across removals and moves ([`rebase`])
//! - Write-behind persistence to the Blob Store and Playlist Store
//!   ([`WriteBehind`])
//! - Startup reconciliation of the playlist snapshot with stored uploads
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tunebox_library::LibraryManager;
//! # use tunebox_core::{BlobStore, PlaylistStore, Track, TrackSource};
//!
//! # async fn example(blobs: Arc<dyn BlobStore>, playlists: Arc<dyn PlaylistStore>) {
//! let mut manager = LibraryManager::bootstrap(blobs, playlists, "My Playlist").await;
//!
//! manager.create_playlist("Road Trip").unwrap();
//! let outcome = manager
//!     .add_track("Road Trip", Track::new("Song", TrackSource::remote("https://cdn.example.com/a.m4a")))
//!     .unwrap();
//! assert!(outcome.first_track);
//!
//! // Make queued writes durable before exiting
//! manager.flush().await;
//! # }
//! ```

mod error;
mod manager;
pub mod rebase;
mod write_behind;

pub use error::{LibraryError, Result};
pub use manager::{AddOutcome, DeleteOutcome, LibraryManager, RemoveOutcome};
pub use write_behind::WriteBehind;
