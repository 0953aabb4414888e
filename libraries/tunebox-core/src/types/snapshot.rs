/// Persisted form of the library
use crate::types::{Library, Playlist, Track, TrackSource};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Track as stored in the snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotTrack {
    /// Display name
    pub name: String,
    /// Source URL
    pub src: String,
}

/// Library minus every track with a session-local source
///
/// The playlists map serializes as `{ "<playlistName>": [{ "name", "src" }] }`.
/// The active playlist name is stored in its own scalar slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistSnapshot {
    /// Playlist name to persisted tracks
    pub playlists: BTreeMap<String, Vec<SnapshotTrack>>,

    /// Active playlist name
    pub active: Option<String>,
}

impl PlaylistSnapshot {
    /// Capture a library, dropping session-local tracks
    pub fn from_library(library: &Library) -> Self {
        let playlists = library
            .playlists()
            .map(|playlist| {
                let tracks = playlist
                    .tracks
                    .iter()
                    .filter(|track| track.is_persistable())
                    .map(|track| SnapshotTrack {
                        name: track.name.clone(),
                        src: track.source.as_src().to_string(),
                    })
                    .collect();
                (playlist.name.clone(), tracks)
            })
            .collect();

        Self {
            playlists,
            active: Some(library.active_name().to_string()),
        }
    }

    /// Rebuild a library
    ///
    /// Returns `None` for a snapshot without playlists. Stale session handles
    /// that slipped into a snapshot are dropped, since they cannot resolve.
    pub fn into_library(self) -> Option<Library> {
        let playlists = self.playlists.into_iter().map(|(name, tracks)| Playlist {
            name,
            tracks: tracks
                .into_iter()
                .map(|track| Track::new(track.name, TrackSource::from_src(track.src)))
                .filter(Track::is_persistable)
                .collect(),
        });

        Library::from_playlists(playlists, self.active.as_deref())
    }

    /// Serialize the playlists slot
    pub fn playlists_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.playlists)
    }

    /// Parse the playlists slot
    pub fn from_json(playlists: &str, active: Option<String>) -> serde_json::Result<Self> {
        Ok(Self {
            playlists: serde_json::from_str(playlists)?,
            active,
        })
    }
}
