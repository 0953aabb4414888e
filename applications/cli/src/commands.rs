//! One-shot commands
//!
//! Every invocation bootstraps the library, applies a single command,
//! renders the result and flushes the write-behind queue.

use crate::config::TuneboxConfig;
use crate::render;
use anyhow::{bail, Context};
use bytes::Bytes;
use clap::{Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use tunebox_core::PlaylistStore;
use tunebox_library::LibraryManager;
use tunebox_playback::PlaybackController;
use tunebox_search::{SearchClient, SearchConfig};
use tunebox_storage::{MemoryPlaylistStore, SqliteBlobStore, SqlitePlaylistStore};

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show playlists and the active playlist's tracks
    List,
    /// Create a playlist and make it active
    Create {
        /// Playlist name
        name: String,
    },
    /// Rename a playlist
    Rename {
        /// Current name
        old: String,
        /// New name
        new: String,
    },
    /// Delete a playlist and its uploaded files
    Delete {
        /// Playlist name
        name: String,
    },
    /// Make a playlist active
    Switch {
        /// Playlist name
        name: String,
    },
    /// Upload audio files into the active playlist
    Upload {
        /// Files to upload
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Search for songs
    Search {
        /// Search term
        term: String,
        /// Append result number N to the active playlist
        #[arg(long, value_name = "N")]
        add: Option<usize>,
    },
    /// Remove a track from the active playlist
    Remove {
        /// Track number
        index: usize,
    },
    /// Move a track within the active playlist
    Move {
        /// Track number to move
        from: usize,
        /// Destination track number
        to: usize,
    },
    /// Play a track, or toggle play/pause
    Play {
        /// Track number
        index: Option<usize>,
    },
    /// Show equalizer bands, or apply a preset
    Eq {
        /// flat, bass-boost or vocal-boost
        preset: Option<String>,
    },
    /// Show or toggle the colour theme
    Theme {
        action: Option<ThemeAction>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    Toggle,
}

/// Everything a command can touch
pub struct App {
    pub manager: LibraryManager,
    pub controller: PlaybackController,
    pub search: SearchClient,
}

impl App {
    /// Open the stores and bootstrap the library
    ///
    /// An unavailable Blob Store or Playlist Store degrades to session-only
    /// operation instead of failing.
    pub async fn open(config: &TuneboxConfig) -> anyhow::Result<Self> {
        tokio::fs::create_dir_all(&config.storage.data_dir)
            .await
            .with_context(|| format!("creating {}", config.storage.data_dir.display()))?;

        let blobs = Arc::new(SqliteBlobStore::open_or_disabled(&config.blobs_db_url()).await);

        let playlists: Arc<dyn PlaylistStore> =
            match SqlitePlaylistStore::open(&config.library_db_url()).await {
                Ok(store) => Arc::new(store),
                Err(e) => {
                    tracing::error!(error = %e, "Playlist store unavailable, changes will not be saved");
                    Arc::new(MemoryPlaylistStore::new())
                }
            };

        let manager =
            LibraryManager::bootstrap(blobs, playlists, &config.library.default_playlist).await;

        let search = SearchClient::new(
            SearchConfig::new(&config.search.base_url).with_timeout(config.search_timeout()),
        )?;

        Ok(Self {
            manager,
            controller: PlaybackController::new(config.playback.volume),
            search,
        })
    }

    /// Apply one command and render the outcome
    pub async fn execute(&mut self, command: Command) -> anyhow::Result<String> {
        let output = match command {
            Command::List => render::library(&self.manager, &self.controller),
            Command::Create { name } => {
                self.manager.create_playlist(&name)?;
                self.controller.on_switch();
                render::library(&self.manager, &self.controller)
            }
            Command::Rename { old, new } => {
                self.manager.rename_playlist(&old, &new)?;
                render::playlists(&self.manager)
            }
            Command::Delete { name } => {
                let outcome = self.manager.delete_playlist(&name)?;
                if outcome.active_changed {
                    self.controller.on_switch();
                }
                render::library(&self.manager, &self.controller)
            }
            Command::Switch { name } => {
                self.manager.switch_active(&name)?;
                self.controller.on_switch();
                render::library(&self.manager, &self.controller)
            }
            Command::Upload { files } => {
                for file in files {
                    self.upload(file).await?;
                }
                render::library(&self.manager, &self.controller)
            }
            Command::Search { term, add } => self.search(&term, add).await?,
            Command::Remove { index } => {
                let active = self.manager.library().active_name().to_string();
                let outcome = self.manager.remove_track(&active, index)?;
                self.controller.on_track_removed(&mut self.manager, &outcome);
                render::library(&self.manager, &self.controller)
            }
            Command::Move { from, to } => {
                let active = self.manager.library().active_name().to_string();
                self.manager.move_track(&active, from, to)?;
                self.controller.on_track_moved(&self.manager);
                render::library(&self.manager, &self.controller)
            }
            Command::Play { index } => {
                match index {
                    Some(index) => {
                        self.controller.play_index(&mut self.manager, index)?;
                    }
                    None => {
                        self.controller.toggle_play_pause(&mut self.manager);
                    }
                }
                render::now_playing(&self.controller)
            }
            Command::Eq { preset } => {
                if let Some(preset) = preset {
                    self.controller.equalizer_mut().apply_preset_named(&preset)?;
                }
                render::equalizer(self.controller.equalizer())
            }
            Command::Theme { action } => {
                if action == Some(ThemeAction::Toggle) {
                    self.manager.toggle_theme();
                }
                format!("Theme: {}\n", self.manager.theme().as_str())
            }
        };

        Ok(output)
    }

    /// Wait for queued store writes
    pub async fn flush(&self) {
        self.manager.flush().await;
    }

    async fn upload(&mut self, file: PathBuf) -> anyhow::Result<()> {
        let name = file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .with_context(|| format!("{} is not a file", file.display()))?;
        let bytes = tokio::fs::read(&file)
            .await
            .with_context(|| format!("reading {}", file.display()))?;

        let outcome = self.manager.import_upload(Bytes::from(bytes), &name).await;
        self.controller.on_track_added(&mut self.manager, &outcome);
        Ok(())
    }

    async fn search(&mut self, term: &str, add: Option<usize>) -> anyhow::Result<String> {
        let results = match self.search.search(term).await {
            Ok(results) => results,
            Err(e) => {
                tracing::warn!(term = %term, error = %e, "Search failed");
                return Ok(render::SEARCH_ERROR.to_string());
            }
        };

        let Some(number) = add else {
            return Ok(render::search_results(&results));
        };

        let Some(result) = results.get(number) else {
            bail!("No search result {number} ({} results)", results.len());
        };

        let track = result.clone().into_track();
        let outcome = self.manager.add_to_active(track);
        self.controller.on_track_added(&mut self.manager, &outcome);

        Ok(format!(
            "Added {}\n{}",
            result.display_line(),
            render::library(&self.manager, &self.controller)
        ))
    }
}
