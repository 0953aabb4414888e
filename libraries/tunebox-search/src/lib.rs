//! Tunebox Search
//!
//! HTTP client for the remote song search API.
//!
//! `GET {base_url}/api/search?term=<term>` returns a JSON array of
//! `{ trackName, artistName, previewUrl }`. Results become remote playlist
//! tracks through [`SearchResult::into_track`].

mod client;
mod error;
mod types;

pub use client::SearchClient;
pub use error::{Result, SearchError};
pub use types::{SearchConfig, SearchResult};
