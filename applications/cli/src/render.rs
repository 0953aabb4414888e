//! Plain-text views

use std::fmt::Write;
use tunebox_library::LibraryManager;
use tunebox_playback::{Equalizer, PlaybackController, PlaybackState};
use tunebox_search::SearchResult;

/// Shown instead of results when a search fails
pub const SEARCH_ERROR: &str = "Error loading results.\n";

/// Playlists followed by the active playlist's tracks
pub fn library(manager: &LibraryManager, controller: &PlaybackController) -> String {
    let mut out = playlists(manager);
    out.push('\n');
    out.push_str(&tracks(manager, controller));
    out
}

/// Playlist names, active one marked with `*`
pub fn playlists(manager: &LibraryManager) -> String {
    let library = manager.library();
    let mut out = String::from("Playlists:\n");

    for playlist in library.playlists() {
        let marker = if playlist.name == library.active_name() { '*' } else { ' ' };
        let _ = writeln!(out, "  {marker} {} ({} tracks)", playlist.name, playlist.len());
    }
    out
}

/// Tracks of the active playlist, current one marked with `>`
pub fn tracks(manager: &LibraryManager, controller: &PlaybackController) -> String {
    let playlist = manager.library().active_playlist();
    let mut out = format!("{}:\n", playlist.name);

    if playlist.is_empty() {
        out.push_str("  (empty)\n");
        return out;
    }

    for (index, track) in playlist.tracks.iter().enumerate() {
        let marker = if manager.current_index() == Some(index) { '>' } else { ' ' };
        let upload = if track.source.is_ephemeral() { " [upload]" } else { "" };
        let _ = writeln!(out, "  {marker} {index}. {}{upload}", track.name);
    }

    out.push_str(&now_playing(controller));
    out
}

/// Transport line
pub fn now_playing(controller: &PlaybackController) -> String {
    match (controller.state(), controller.now_playing()) {
        (PlaybackState::Playing, Some(now)) => format!("Playing: {}\n", now.name),
        (PlaybackState::Paused, Some(now)) => format!("Paused: {}\n", now.name),
        _ => "Stopped\n".to_string(),
    }
}

/// Numbered search results
pub fn search_results(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return "No results.\n".to_string();
    }

    let mut out = String::new();
    for (number, result) in results.iter().enumerate() {
        let _ = writeln!(out, "  {number}. {}", result.display_line());
    }
    out
}

/// Band gains and the matching preset
pub fn equalizer(eq: &Equalizer) -> String {
    let mut out = String::new();
    for band in eq.bands() {
        let _ = writeln!(out, "  {:>6}  {:+.1} dB", band.label(), band.gain_db());
    }
    match eq.matching_preset() {
        Some(preset) => {
            let _ = writeln!(out, "Preset: {preset}");
        }
        None => out.push_str("Preset: custom\n"),
    }
    out
}
