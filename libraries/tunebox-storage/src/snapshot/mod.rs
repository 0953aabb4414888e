//! Playlist Store: snapshot and preference slots
//!
//! Values are stored as key-value pairs. The playlists slot holds the JSON
//! snapshot, the other slots hold plain strings.
//!
//! # Example
//!
//! ```rust,no_run
//! use tunebox_storage::snapshot;
//! # async fn example(pool: &sqlx::SqlitePool) -> Result<(), Box<dyn std::error::Error>> {
//! snapshot::set_value(pool, snapshot::KEY_THEME, "light").await?;
//! let theme = snapshot::get_value(pool, snapshot::KEY_THEME).await?;
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use tunebox_core::{Library, PlaylistSnapshot, PlaylistStore, Theme};

/// Playlist snapshot slot (JSON object of playlist name to tracks)
pub const KEY_PLAYLISTS: &str = "playlists";

/// Active playlist name slot
pub const KEY_ACTIVE_PLAYLIST: &str = "active_playlist";

/// Theme preference slot ("dark" or "light")
pub const KEY_THEME: &str = "theme";

/// Get a single slot
///
/// Returns `Ok(None)` if the slot was never written
pub async fn get_value(pool: &SqlitePool, key: &str) -> Result<Option<String>> {
    let row = sqlx::query("SELECT value FROM kv_store WHERE key = ?")
        .bind(key)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| row.get("value")))
}

/// Overwrite a single slot
pub async fn set_value(pool: &SqlitePool, key: &str, value: &str) -> Result<()> {
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        "INSERT INTO kv_store (key, value, updated_at)
         VALUES (?, ?, ?)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
    )
    .bind(key)
    .bind(value)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(())
}

/// Read the snapshot slots
pub async fn load_snapshot(pool: &SqlitePool) -> Result<Option<PlaylistSnapshot>> {
    let Some(playlists) = get_value(pool, KEY_PLAYLISTS).await? else {
        return Ok(None);
    };
    let active = get_value(pool, KEY_ACTIVE_PLAYLIST).await?;

    Ok(Some(PlaylistSnapshot::from_json(&playlists, active)?))
}

/// Write the snapshot slots in one transaction
pub async fn save_snapshot(pool: &SqlitePool, snapshot: &PlaylistSnapshot) -> Result<()> {
    let playlists = snapshot.playlists_json()?;
    let now = chrono::Utc::now().timestamp();

    let mut tx = pool.begin().await?;

    let upsert = "INSERT INTO kv_store (key, value, updated_at)
         VALUES (?, ?, ?)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

    sqlx::query(upsert)
        .bind(KEY_PLAYLISTS)
        .bind(&playlists)
        .bind(now)
        .execute(&mut *tx)
        .await?;

    if let Some(active) = &snapshot.active {
        sqlx::query(upsert)
            .bind(KEY_ACTIVE_PLAYLIST)
            .bind(active)
            .bind(now)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    Ok(())
}

/// `SQLite`-backed Playlist Store
#[derive(Debug, Clone)]
pub struct SqlitePlaylistStore {
    pool: SqlitePool,
}

impl SqlitePlaylistStore {
    /// Wrap an already migrated pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the database at `database_url`, running migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated
    pub async fn open(database_url: &str) -> Result<Self> {
        let pool = crate::open_database(database_url).await?;
        tracing::info!(url = %database_url, "Playlist store opened");
        Ok(Self::new(pool))
    }

    /// Get the underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl PlaylistStore for SqlitePlaylistStore {
    async fn load(&self) -> tunebox_core::Result<Option<Library>> {
        let snapshot = load_snapshot(&self.pool).await?;
        Ok(snapshot.and_then(PlaylistSnapshot::into_library))
    }

    async fn save(&self, library: &Library) -> tunebox_core::Result<()> {
        let snapshot = PlaylistSnapshot::from_library(library);
        save_snapshot(&self.pool, &snapshot).await?;
        tracing::debug!(
            playlists = snapshot.playlists.len(),
            active = ?snapshot.active,
            "Saved playlist snapshot"
        );
        Ok(())
    }

    async fn load_theme(&self) -> tunebox_core::Result<Option<Theme>> {
        let value = get_value(&self.pool, KEY_THEME).await?;
        Ok(value.as_deref().and_then(Theme::from_str))
    }

    async fn save_theme(&self, theme: Theme) -> tunebox_core::Result<()> {
        set_value(&self.pool, KEY_THEME, theme.as_str()).await?;
        Ok(())
    }
}
