/// Track domain type
use crate::types::BlobKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scheme prefix of session-local media handles
///
/// Sources with this prefix only resolve inside the process that minted them.
pub const SESSION_SCHEME: &str = "blob:";

/// Where a track's audio comes from
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackSource {
    /// Remotely streamable URL (search results)
    Remote(String),

    /// Session-local handle resolving to uploaded bytes
    ///
    /// Not reconstructible after restart; such tracks are rebuilt from the
    /// Blob Store instead of the playlist snapshot.
    Session(String),
}

impl TrackSource {
    /// Create a remote source
    pub fn remote(url: impl Into<String>) -> Self {
        Self::Remote(url.into())
    }

    /// Classify a persisted `src` string
    pub fn from_src(src: impl Into<String>) -> Self {
        let src = src.into();
        if src.starts_with(SESSION_SCHEME) {
            Self::Session(src)
        } else {
            Self::Remote(src)
        }
    }

    /// The `src` string as rendered to the media element or snapshot
    pub fn as_src(&self) -> &str {
        match self {
            Self::Remote(url) => url,
            Self::Session(handle) => handle,
        }
    }

    /// Whether the source only lives for the current session
    pub fn is_ephemeral(&self) -> bool {
        matches!(self, Self::Session(_))
    }
}

impl fmt::Display for TrackSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_src())
    }
}

/// One playable item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Display name (file name for uploads, track name for search results)
    pub name: String,

    /// Resolvable audio source
    pub source: TrackSource,

    /// Blob Store entry backing this track, deleted along with the track
    pub blob_key: Option<BlobKey>,
}

impl Track {
    /// Create a track that is not backed by the Blob Store
    pub fn new(name: impl Into<String>, source: TrackSource) -> Self {
        Self {
            name: name.into(),
            source,
            blob_key: None,
        }
    }

    /// Create an uploaded track backed by a Blob Store entry
    pub fn uploaded(name: impl Into<String>, handle: impl Into<String>, key: BlobKey) -> Self {
        Self {
            name: name.into(),
            source: TrackSource::Session(handle.into()),
            blob_key: Some(key),
        }
    }

    /// Whether the track survives a snapshot round trip
    pub fn is_persistable(&self) -> bool {
        !self.source.is_ephemeral()
    }
}
