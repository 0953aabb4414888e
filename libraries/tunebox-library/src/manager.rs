//! Library manager
//!
//! Owns the in-memory [`Library`] together with the current playback index
//! and the live session handles. Every mutation goes through here, is
//! validated synchronously, and is then written behind to the stores.

use crate::error::{LibraryError, Result};
use crate::rebase;
use crate::write_behind::WriteBehind;
use bytes::Bytes;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tunebox_core::{
    BlobKey, BlobStore, Library, Playlist, PlaylistStore, SessionMedia, Theme, Track,
};

/// Result of appending a track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddOutcome {
    /// Position of the new track
    pub index: usize,

    /// The playlist was empty before the append
    pub first_track: bool,

    /// The track went into the active playlist
    pub active: bool,
}

/// Result of removing a track
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveOutcome {
    /// The removed track
    pub removed: Track,

    /// The removed track was the current track of the active playlist
    pub current_removed: bool,
}

/// Result of deleting a playlist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    /// The deleted playlist was active; another one took its place
    pub active_changed: bool,

    /// Blob Store deletions queued for the playlist's tracks
    pub blobs_deleted: usize,
}

/// Authoritative playlist state
pub struct LibraryManager {
    library: Library,
    current: Option<usize>,
    theme: Theme,
    media: SessionMedia,
    blobs: Arc<dyn BlobStore>,
    writer: WriteBehind,
}

impl LibraryManager {
    /// Load the library and reconcile it with the Blob Store
    ///
    /// Falls back to a single empty `default_name` playlist on first run or
    /// when the snapshot cannot be read. Every stored blob not referenced by
    /// a track is appended to the active playlist under a fresh session
    /// handle. Must be called inside a tokio runtime.
    pub async fn bootstrap(
        blobs: Arc<dyn BlobStore>,
        playlists: Arc<dyn PlaylistStore>,
        default_name: &str,
    ) -> Self {
        let mut library = match playlists.load().await {
            Ok(Some(library)) => library,
            Ok(None) => {
                info!(playlist = %default_name, "No saved playlists, starting fresh");
                Library::new(default_name)
            }
            Err(e) => {
                warn!(error = %e, "Failed to load playlists, starting fresh");
                Library::new(default_name)
            }
        };

        let theme = match playlists.load_theme().await {
            Ok(theme) => theme.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "Failed to load theme");
                Theme::default()
            }
        };

        let stored = match blobs.get_all().await {
            Ok(stored) => stored,
            Err(e) => {
                warn!(error = %e, "Failed to read blob store, uploads unavailable");
                Vec::new()
            }
        };

        let mut media = SessionMedia::new();
        let known = library.blob_keys();
        let active = library.active_name().to_string();
        let mut restored = 0usize;

        if let Some(tracks) = library.tracks_mut(&active) {
            for blob in stored.into_iter().filter(|blob| !known.contains(&blob.key)) {
                let source = media.register(blob.bytes);
                tracks.push(Track {
                    name: blob.name,
                    source,
                    blob_key: Some(blob.key),
                });
                restored += 1;
            }
        }

        let current = start_index(&library);
        info!(
            playlists = library.playlist_count(),
            active = %library.active_name(),
            restored,
            "Library ready"
        );

        Self {
            library,
            current,
            theme,
            media,
            writer: WriteBehind::spawn(Arc::clone(&blobs), playlists),
            blobs,
        }
    }

    /// Current library state
    pub fn library(&self) -> &Library {
        &self.library
    }

    /// Tracks of the active playlist
    pub fn active_tracks(&self) -> &[Track] {
        &self.library.active_playlist().tracks
    }

    /// Index of the current track in the active playlist
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Point the playback position at a track of the active playlist
    pub fn set_current(&mut self, index: usize) -> Result<()> {
        check_index(index, self.active_tracks().len())?;
        self.current = Some(index);
        Ok(())
    }

    /// Live session handles
    pub fn media(&self) -> &SessionMedia {
        &self.media
    }

    /// Current theme
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme and persist it
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.writer.save_theme(self.theme);
        self.theme
    }

    /// Create an empty playlist and make it active
    pub fn create_playlist(&mut self, name: &str) -> Result<()> {
        let name = valid_name(name)?;
        if !self.library.insert_playlist(Playlist::new(name)) {
            return Err(LibraryError::DuplicateName(name.to_string()));
        }

        info!(playlist = %name, "Created playlist");
        self.library.set_active(name);
        self.current = None;
        self.persist();
        Ok(())
    }

    /// Rename a playlist
    pub fn rename_playlist(&mut self, old: &str, new: &str) -> Result<()> {
        if !self.library.contains(old) {
            return Err(LibraryError::UnknownPlaylist(old.to_string()));
        }
        let new = valid_name(new)?;
        if new == old {
            return Err(LibraryError::UnchangedName(old.to_string()));
        }
        if !self.library.rename_playlist(old, new) {
            return Err(LibraryError::DuplicateName(new.to_string()));
        }

        info!(from = %old, to = %new, "Renamed playlist");
        self.persist();
        Ok(())
    }

    /// Delete a playlist and the blobs behind its tracks
    pub fn delete_playlist(&mut self, name: &str) -> Result<DeleteOutcome> {
        if !self.library.contains(name) {
            return Err(LibraryError::UnknownPlaylist(name.to_string()));
        }
        let was_active = self.library.active_name() == name;
        let playlist = self
            .library
            .remove_playlist(name)
            .ok_or_else(|| LibraryError::LastPlaylist(name.to_string()))?;

        let mut blobs_deleted = 0;
        for track in &playlist.tracks {
            if self.release(track) {
                blobs_deleted += 1;
            }
        }

        if was_active {
            self.current = start_index(&self.library);
        }

        info!(
            playlist = %name,
            active = %self.library.active_name(),
            blobs_deleted,
            "Deleted playlist"
        );
        self.persist();

        Ok(DeleteOutcome {
            active_changed: was_active,
            blobs_deleted,
        })
    }

    /// Make another playlist active, rewinding to its first track
    pub fn switch_active(&mut self, name: &str) -> Result<()> {
        if !self.library.set_active(name) {
            return Err(LibraryError::UnknownPlaylist(name.to_string()));
        }

        self.current = start_index(&self.library);
        debug!(playlist = %name, "Switched active playlist");
        self.persist();
        Ok(())
    }

    /// Append a track to a playlist
    pub fn add_track(&mut self, playlist: &str, track: Track) -> Result<AddOutcome> {
        let active = self.library.active_name() == playlist;
        let tracks = self
            .library
            .tracks_mut(playlist)
            .ok_or_else(|| LibraryError::UnknownPlaylist(playlist.to_string()))?;

        let first_track = tracks.is_empty();
        debug!(playlist = %playlist, track = %track.name, "Adding track");
        tracks.push(track);
        let index = tracks.len() - 1;

        self.persist();
        Ok(AddOutcome {
            index,
            first_track,
            active,
        })
    }

    /// Append a track to the active playlist
    pub fn add_to_active(&mut self, track: Track) -> AddOutcome {
        let active = self.library.active_name().to_string();
        let tracks = self.library.tracks_mut(&active);
        let index = tracks.map_or(0, |tracks| {
            tracks.push(track);
            tracks.len() - 1
        });

        self.persist();
        AddOutcome {
            index,
            first_track: index == 0,
            active: true,
        }
    }

    /// Store an uploaded file and append it to the active playlist
    ///
    /// The Blob Store write is awaited because the track needs its key. When
    /// the store is disabled or the write fails, the track is still added for
    /// this session, just without a key.
    pub async fn import_upload(&mut self, bytes: Bytes, name: &str) -> AddOutcome {
        let blob_key = match self.blobs.put(bytes.clone(), name).await {
            Ok(key) => key,
            Err(e) => {
                warn!(file = %name, error = %e, "Failed to store upload, keeping it for this session only");
                None
            }
        };

        let source = self.media.register(bytes);
        info!(file = %name, key = ?blob_key.map(BlobKey::get), "Imported upload");

        self.add_to_active(Track {
            name: name.to_string(),
            source,
            blob_key,
        })
    }

    /// Remove a track, deleting its blob
    pub fn remove_track(&mut self, playlist: &str, index: usize) -> Result<RemoveOutcome> {
        let is_active = self.library.active_name() == playlist;
        let tracks = self
            .library
            .tracks_mut(playlist)
            .ok_or_else(|| LibraryError::UnknownPlaylist(playlist.to_string()))?;
        check_index(index, tracks.len())?;

        let removed = tracks.remove(index);
        let new_len = tracks.len();

        let mut current_removed = false;
        if is_active {
            current_removed = self.current == Some(index);
            self.current = rebase::after_remove(self.current, index, new_len);
        }

        self.release(&removed);
        debug!(playlist = %playlist, index, track = %removed.name, "Removed track");
        self.persist();

        Ok(RemoveOutcome {
            removed,
            current_removed,
        })
    }

    /// Move a track, preserving the order of the others
    pub fn move_track(&mut self, playlist: &str, from: usize, to: usize) -> Result<()> {
        let is_active = self.library.active_name() == playlist;
        let tracks = self
            .library
            .tracks_mut(playlist)
            .ok_or_else(|| LibraryError::UnknownPlaylist(playlist.to_string()))?;
        check_index(from, tracks.len())?;
        check_index(to, tracks.len())?;

        let track = tracks.remove(from);
        tracks.insert(to, track);

        if is_active {
            self.current = rebase::after_move(self.current, from, to);
        }

        debug!(playlist = %playlist, from, to, "Moved track");
        self.persist();
        Ok(())
    }

    /// Wait for every queued store write to land
    pub async fn flush(&self) {
        self.writer.flush().await;
    }

    fn persist(&self) {
        self.writer.save_snapshot(&self.library);
    }

    /// Drop the session handle and queue the blob deletion for a track
    ///
    /// Returns whether a blob deletion was queued.
    fn release(&mut self, track: &Track) -> bool {
        if track.source.is_ephemeral() {
            self.media.revoke(track.source.as_src());
        }
        match track.blob_key {
            Some(key) => {
                self.writer.delete_blob(key);
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for LibraryManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LibraryManager")
            .field("library", &self.library)
            .field("current", &self.current)
            .field("theme", &self.theme)
            .field("media", &self.media)
            .field("blobs_enabled", &self.blobs.is_enabled())
            .finish_non_exhaustive()
    }
}

fn valid_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(LibraryError::InvalidName);
    }
    Ok(name)
}

fn check_index(index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(LibraryError::IndexOutOfBounds { index, len });
    }
    Ok(())
}

fn start_index(library: &Library) -> Option<usize> {
    if library.active_playlist().is_empty() {
        None
    } else {
        Some(0)
    }
}
