/// Library: every playlist plus which one is active
use crate::types::{BlobKey, Playlist, Track};
use std::collections::{BTreeMap, BTreeSet};

/// Name of the playlist created on first run
pub const DEFAULT_PLAYLIST_NAME: &str = "My Playlist";

/// Complete in-memory playlist state
///
/// Invariants:
/// - there is always at least one playlist
/// - `active` always names an existing playlist
///
/// Playlists are kept in a `BTreeMap`, so iteration (and therefore the
/// fallback choice of active playlist) is lexicographic by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Library {
    playlists: BTreeMap<String, Playlist>,
    active: String,
}

impl Library {
    /// Create a library holding one empty playlist, which is active
    pub fn new(default_name: impl Into<String>) -> Self {
        let name = default_name.into();
        let mut playlists = BTreeMap::new();
        playlists.insert(name.clone(), Playlist::new(name.clone()));
        Self {
            playlists,
            active: name,
        }
    }

    /// Assemble a library from loaded playlists
    ///
    /// Returns `None` when there are no playlists. An `active` name that does
    /// not match any playlist falls back to the first playlist by name.
    pub fn from_playlists(
        playlists: impl IntoIterator<Item = Playlist>,
        active: Option<&str>,
    ) -> Option<Self> {
        let playlists: BTreeMap<String, Playlist> = playlists
            .into_iter()
            .map(|playlist| (playlist.name.clone(), playlist))
            .collect();

        let active = match active {
            Some(name) if playlists.contains_key(name) => name.to_string(),
            _ => playlists.keys().next()?.clone(),
        };

        Some(Self { playlists, active })
    }

    /// Name of the active playlist
    pub fn active_name(&self) -> &str {
        &self.active
    }

    /// The active playlist
    pub fn active_playlist(&self) -> &Playlist {
        // `active` always keys an existing entry
        &self.playlists[&self.active]
    }

    /// Look up a playlist by name
    pub fn playlist(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(name)
    }

    /// Whether a playlist with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.playlists.contains_key(name)
    }

    /// All playlists in name order
    pub fn playlists(&self) -> impl Iterator<Item = &Playlist> {
        self.playlists.values()
    }

    /// All playlist names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.playlists.keys().map(String::as_str)
    }

    /// Number of playlists (never zero)
    pub fn playlist_count(&self) -> usize {
        self.playlists.len()
    }

    /// Insert a playlist; returns `false` if the name is taken
    pub fn insert_playlist(&mut self, playlist: Playlist) -> bool {
        if self.playlists.contains_key(&playlist.name) {
            return false;
        }
        self.playlists.insert(playlist.name.clone(), playlist);
        true
    }

    /// Rename a playlist, keeping its tracks and the active pointer
    ///
    /// Returns `false` if `old` is missing or `new` is already taken.
    pub fn rename_playlist(&mut self, old: &str, new: &str) -> bool {
        if self.playlists.contains_key(new) {
            return false;
        }
        let Some(mut playlist) = self.playlists.remove(old) else {
            return false;
        };

        playlist.name = new.to_string();
        self.playlists.insert(new.to_string(), playlist);

        if self.active == old {
            self.active = new.to_string();
        }
        true
    }

    /// Remove a playlist
    ///
    /// Refuses to remove the last playlist. When the active playlist is
    /// removed, the first remaining playlist by name becomes active.
    pub fn remove_playlist(&mut self, name: &str) -> Option<Playlist> {
        if self.playlists.len() <= 1 {
            return None;
        }
        let removed = self.playlists.remove(name)?;

        if self.active == name {
            if let Some(first) = self.playlists.keys().next() {
                self.active = first.clone();
            }
        }
        Some(removed)
    }

    /// Make a playlist active; returns `false` if it does not exist
    pub fn set_active(&mut self, name: &str) -> bool {
        if !self.playlists.contains_key(name) {
            return false;
        }
        self.active = name.to_string();
        true
    }

    /// Mutable access to a playlist's tracks
    pub fn tracks_mut(&mut self, name: &str) -> Option<&mut Vec<Track>> {
        self.playlists.get_mut(name).map(|playlist| &mut playlist.tracks)
    }

    /// Every Blob Store key referenced by any track
    pub fn blob_keys(&self) -> BTreeSet<BlobKey> {
        self.playlists
            .values()
            .flat_map(|playlist| playlist.tracks.iter())
            .filter_map(|track| track.blob_key)
            .collect()
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYLIST_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TrackSource;

    fn library_with(names: &[&str]) -> Library {
        Library::from_playlists(names.iter().map(|n| Playlist::new(*n)), None).unwrap()
    }

    #[test]
    fn default_library_has_one_active_playlist() {
        let library = Library::default();
        assert_eq!(library.playlist_count(), 1);
        assert_eq!(library.active_name(), DEFAULT_PLAYLIST_NAME);
        assert!(library.active_playlist().is_empty());
    }

    #[test]
    fn from_playlists_rejects_empty_and_fixes_active() {
        assert!(Library::from_playlists(Vec::new(), Some("x")).is_none());

        let library =
            Library::from_playlists(vec![Playlist::new("b"), Playlist::new("a")], Some("zzz"))
                .unwrap();
        assert_eq!(library.active_name(), "a");

        let library =
            Library::from_playlists(vec![Playlist::new("b"), Playlist::new("a")], Some("b"))
                .unwrap();
        assert_eq!(library.active_name(), "b");
    }

    #[test]
    fn cannot_remove_last_playlist() {
        let mut library = Library::default();
        assert!(library.remove_playlist(DEFAULT_PLAYLIST_NAME).is_none());
        assert_eq!(library.playlist_count(), 1);
    }

    #[test]
    fn removing_active_falls_back_to_first_by_name() {
        let mut library = library_with(&["rock", "jazz", "ambient"]);
        assert!(library.set_active("jazz"));

        library.remove_playlist("jazz").unwrap();
        assert_eq!(library.active_name(), "ambient");
    }

    #[test]
    fn rename_moves_tracks_and_active_pointer() {
        let mut library = library_with(&["old"]);
        library
            .tracks_mut("old")
            .unwrap()
            .push(Track::new("a", TrackSource::remote("https://a")));

        assert!(library.rename_playlist("old", "new"));
        assert_eq!(library.active_name(), "new");
        assert_eq!(library.playlist("new").unwrap().len(), 1);
        assert_eq!(library.playlist("new").unwrap().name, "new");
        assert!(!library.contains("old"));
    }

    #[test]
    fn rename_refuses_taken_name() {
        let mut library = library_with(&["a", "b"]);
        let before = library.clone();
        assert!(!library.rename_playlist("a", "b"));
        assert_eq!(library, before);
    }

    #[test]
    fn blob_keys_collects_across_playlists() {
        let mut library = library_with(&["a", "b"]);
        library
            .tracks_mut("a")
            .unwrap()
            .push(Track::uploaded("x.mp3", "blob:session/1", BlobKey::new(4)));
        library
            .tracks_mut("b")
            .unwrap()
            .push(Track::uploaded("y.mp3", "blob:session/2", BlobKey::new(9)));

        let keys: Vec<_> = library.blob_keys().into_iter().collect();
        assert_eq!(keys, vec![BlobKey::new(4), BlobKey::new(9)]);
    }
}
