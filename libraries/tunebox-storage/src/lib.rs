//! Tunebox Storage
//!
//! `SQLite` persistence for the two Tunebox storage layers.
//!
//! - **Blob Store** ([`blobs`]): uploaded file contents keyed by a monotonic,
//!   never-reused integer key
//! - **Playlist Store** ([`snapshot`]): the playlist snapshot, the active
//!   playlist name and the theme preference as key-value slots
//! - **In-memory stores** ([`memory`]): session-only implementations of the
//!   same traits, used when nothing should touch disk
//!
//! # Example
//!
//! ```rust,no_run
//! use tunebox_storage::{SqliteBlobStore, SqlitePlaylistStore};
//! use tunebox_core::PlaylistStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // The blob store degrades to a no-op store if its database cannot open
//! let blobs = SqliteBlobStore::open_or_disabled("sqlite://data/blobs.db").await;
//!
//! let playlists = SqlitePlaylistStore::open("sqlite://data/library.db").await?;
//! let library = playlists.load().await?;
//! # Ok(())
//! # }
//! ```

mod error;

// Vertical slices
pub mod blobs;
pub mod memory;
pub mod snapshot;

pub use blobs::SqliteBlobStore;
pub use error::{Result, StorageError};
pub use memory::{MemoryBlobStore, MemoryPlaylistStore};
pub use snapshot::SqlitePlaylistStore;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> std::result::Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://library.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> std::result::Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(url = %database_url, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::debug!(url = %database_url, "SQLite pool ready");

    Ok(pool)
}

/// Create a pool and bring its schema up to date
///
/// # Errors
///
/// Returns an error if the connection or a migration fails
pub async fn open_database(database_url: &str) -> Result<SqlitePool> {
    let pool = create_pool(database_url).await?;
    run_migrations(&pool)
        .await
        .map_err(|e| StorageError::Migration(e.to_string()))?;
    Ok(pool)
}
