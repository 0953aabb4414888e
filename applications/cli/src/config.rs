/// Tunebox configuration
use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "tunebox.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TuneboxConfig {
    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub search: SearchSettings,

    #[serde(default)]
    pub library: LibrarySettings,

    #[serde(default)]
    pub playback: PlaybackSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    /// Directory holding `library.db` and `blobs.db`
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LibrarySettings {
    /// Playlist created on first run
    #[serde(default = "default_playlist")]
    pub default_playlist: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaybackSettings {
    /// Initial volume (0-100)
    #[serde(default = "default_volume")]
    pub volume: u8,
}

impl TuneboxConfig {
    /// Load configuration from file and environment
    ///
    /// `path` must exist when given; otherwise `tunebox.toml` is read if
    /// present. `TUNEBOX_<SECTION>__<KEY>` environment variables override
    /// both, e.g. `TUNEBOX_SEARCH__BASE_URL`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("TUNEBOX")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.library.default_playlist.trim().is_empty() {
            return Err(CliError::Config(
                "library.default_playlist must not be empty".to_string(),
            ));
        }

        let url = &self.search.base_url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(CliError::Config(format!(
                "search.base_url must start with http:// or https:// (got {url:?})"
            )));
        }

        if self.playback.volume > 100 {
            return Err(CliError::Config(format!(
                "playback.volume must be 0-100 (got {})",
                self.playback.volume
            )));
        }

        Ok(())
    }

    /// SQLite URL of the Playlist Store
    pub fn library_db_url(&self) -> String {
        sqlite_url(&self.storage.data_dir.join("library.db"))
    }

    /// SQLite URL of the Blob Store
    pub fn blobs_db_url(&self) -> String {
        sqlite_url(&self.storage.data_dir.join("blobs.db"))
    }

    /// Search request timeout
    pub fn search_timeout(&self) -> Duration {
        Duration::from_secs(self.search.timeout_secs)
    }
}

fn sqlite_url(path: &Path) -> String {
    format!("sqlite://{}", path.display())
}

// Default values
impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            default_playlist: default_playlist(),
        }
    }
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            volume: default_volume(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_playlist() -> String {
    tunebox_core::DEFAULT_PLAYLIST_NAME.to_string()
}

fn default_volume() -> u8 {
    80
}
