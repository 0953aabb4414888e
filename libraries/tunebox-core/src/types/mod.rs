mod ids;
mod library;
mod playlist;
mod snapshot;
mod theme;
mod track;

pub use ids::BlobKey;
pub use library::{Library, DEFAULT_PLAYLIST_NAME};
pub use playlist::Playlist;
pub use snapshot::{PlaylistSnapshot, SnapshotTrack};
pub use theme::Theme;
pub use track::{Track, TrackSource, SESSION_SCHEME};
