//! Session-local media handles
//!
//! Uploaded bytes are exposed to playback through `blob:session/<uuid>`
//! handles. Handles are only meaningful inside the process that minted them,
//! which is why tracks carrying them never enter the playlist snapshot.

use crate::types::{TrackSource, SESSION_SCHEME};
use bytes::Bytes;
use std::collections::HashMap;
use uuid::Uuid;

/// Registry of live session handles
#[derive(Debug, Default)]
pub struct SessionMedia {
    handles: HashMap<String, Bytes>,
}

impl SessionMedia {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a handle for a blob of bytes
    pub fn register(&mut self, bytes: Bytes) -> TrackSource {
        let handle = format!("{SESSION_SCHEME}session/{}", Uuid::new_v4());
        self.handles.insert(handle.clone(), bytes);
        TrackSource::Session(handle)
    }

    /// Resolve a handle to its bytes
    pub fn resolve(&self, handle: &str) -> Option<Bytes> {
        self.handles.get(handle).cloned()
    }

    /// Forget a handle; returns whether it was live
    pub fn revoke(&mut self, handle: &str) -> bool {
        self.handles.remove(handle).is_some()
    }

    /// Number of live handles
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Check if no handles are live
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
