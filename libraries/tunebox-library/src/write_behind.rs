//! Fire-and-forget persistence
//!
//! The manager never waits on storage. Every write is queued on an unbounded
//! channel and applied in order by a single worker task; failures are logged
//! and dropped. The in-memory library stays authoritative, so a failed write
//! only costs durability.

use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use tunebox_core::{BlobKey, BlobStore, Library, PlaylistStore, Theme};

/// A queued store write
#[derive(Debug)]
enum WriteOp {
    /// Overwrite the playlist snapshot
    SaveSnapshot(Box<Library>),

    /// Overwrite the theme preference
    SaveTheme(Theme),

    /// Delete a Blob Store entry
    DeleteBlob(BlobKey),

    /// Signal once every earlier write has been applied
    Barrier(oneshot::Sender<()>),
}

/// Handle to the write-behind worker
///
/// Dropping the handle closes the queue; the worker drains what is left and
/// exits.
#[derive(Debug)]
pub struct WriteBehind {
    tx: mpsc::UnboundedSender<WriteOp>,
    worker: JoinHandle<()>,
}

impl WriteBehind {
    /// Spawn the worker on the current tokio runtime
    pub fn spawn(blobs: Arc<dyn BlobStore>, playlists: Arc<dyn PlaylistStore>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let worker = tokio::spawn(run_worker(blobs, playlists, rx));
        Self { tx, worker }
    }

    /// Queue a snapshot save
    pub fn save_snapshot(&self, library: &Library) {
        self.send(WriteOp::SaveSnapshot(Box::new(library.clone())));
    }

    /// Queue a theme save
    pub fn save_theme(&self, theme: Theme) {
        self.send(WriteOp::SaveTheme(theme));
    }

    /// Queue a blob deletion
    pub fn delete_blob(&self, key: BlobKey) {
        self.send(WriteOp::DeleteBlob(key));
    }

    /// Wait until every write queued so far has been applied
    pub async fn flush(&self) {
        let (done_tx, done_rx) = oneshot::channel();
        self.send(WriteOp::Barrier(done_tx));

        if done_rx.await.is_err() {
            warn!("Write-behind worker stopped before flush completed");
        }
    }

    /// Whether the worker task has exited
    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    fn send(&self, op: WriteOp) {
        if let Err(e) = self.tx.send(op) {
            warn!(op = ?e.0, "Write-behind queue closed, write dropped");
        }
    }
}

async fn run_worker(
    blobs: Arc<dyn BlobStore>,
    playlists: Arc<dyn PlaylistStore>,
    mut rx: mpsc::UnboundedReceiver<WriteOp>,
) {
    debug!("Write-behind worker started");

    while let Some(op) = rx.recv().await {
        match op {
            WriteOp::SaveSnapshot(library) => {
                if let Err(e) = playlists.save(&library).await {
                    warn!(error = %e, "Failed to save playlist snapshot");
                }
            }
            WriteOp::SaveTheme(theme) => {
                if let Err(e) = playlists.save_theme(theme).await {
                    warn!(theme = theme.as_str(), error = %e, "Failed to save theme");
                }
            }
            WriteOp::DeleteBlob(key) => {
                if let Err(e) = blobs.delete(key).await {
                    warn!(key = %key, error = %e, "Failed to delete blob");
                }
            }
            WriteOp::Barrier(done) => {
                // The flusher may have given up waiting
                let _ = done.send(());
            }
        }
    }

    debug!("Write-behind worker stopped");
}
