//! Types for the search API.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tunebox_core::{Track, TrackSource};

/// One search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Song title, "Unknown Track" when the server sent none
    pub track_name: String,

    /// Artist, "Unknown Artist" when the server sent none
    pub artist_name: String,

    /// Streamable preview clip
    pub preview_url: String,
}

/// Search hit as sent by the server
///
/// Any field may be missing or `null`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchHit {
    #[serde(default)]
    track_name: Option<String>,

    #[serde(default)]
    artist_name: Option<String>,

    #[serde(default)]
    preview_url: Option<String>,
}

impl SearchHit {
    /// Fill in missing names; hits without a preview cannot be played
    pub(crate) fn into_result(self) -> Option<SearchResult> {
        Some(SearchResult {
            preview_url: self.preview_url?,
            track_name: self.track_name.unwrap_or_else(|| "Unknown Track".to_string()),
            artist_name: self.artist_name.unwrap_or_else(|| "Unknown Artist".to_string()),
        })
    }
}

impl SearchResult {
    /// Result line as shown in the results panel
    pub fn display_line(&self) -> String {
        format!("{} - {}", self.track_name, self.artist_name)
    }

    /// Playlist track streaming the preview
    pub fn into_track(self) -> Track {
        Track::new(self.track_name, TrackSource::Remote(self.preview_url))
    }
}

/// Search client configuration
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Base URL of the server hosting `/api/search`
    pub base_url: String,

    /// Whole-request timeout
    pub timeout: Duration,
}

impl SearchConfig {
    /// Create a config with the default 15 second timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(15),
        }
    }

    /// Override the timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
