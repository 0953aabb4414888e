//! Tunebox CLI Library
//!
//! Command-line music player front end over the Tunebox libraries.
//!
//! This library exposes the core components for testing purposes.

pub mod commands;
pub mod config;
pub mod error;
pub mod render;

// Re-export commonly used types for convenience
pub use commands::{App, Command, ThemeAction};
pub use config::TuneboxConfig;
pub use error::{CliError, Result};
