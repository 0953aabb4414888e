//! Frequency-bar visualizer geometry
//!
//! Turns one frame of byte frequency data into the bars to draw on a canvas.

use serde::{Deserialize, Serialize};
use tunebox_core::Theme;

/// Analyser FFT size
pub const FFT_SIZE: usize = 256;

/// Frequency bins per frame (half the FFT size)
pub const BIN_COUNT: usize = FFT_SIZE / 2;

/// Bar width relative to an even split of the canvas
const BAR_WIDTH_FACTOR: f32 = 2.5;

/// Gap between bars in pixels
const BAR_GAP: f32 = 1.0;

/// One bar, in canvas coordinates (origin top-left)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// CSS colour
    pub color: String,
}

/// Fill colour for a bin magnitude
pub fn bar_color(value: u8, theme: Theme) -> String {
    match theme {
        Theme::Light => format!("rgba(69, 123, 157, {})", f32::from(value) / 255.0),
        Theme::Dark => format!("rgb({}, 150, 50)", u16::from(value) + 25),
    }
}

/// Lay out one frame of bars
///
/// Bars are `canvas_width / bins * 2.5` wide and half the bin magnitude
/// tall, anchored to the bottom edge. Bars past the right edge are still
/// returned; the canvas clips them.
pub fn bars(frequency_data: &[u8], canvas_width: f32, canvas_height: f32, theme: Theme) -> Vec<Bar> {
    if frequency_data.is_empty() {
        return Vec::new();
    }

    let width = canvas_width / frequency_data.len() as f32 * BAR_WIDTH_FACTOR;
    let mut x = 0.0;

    frequency_data
        .iter()
        .map(|&value| {
            let height = f32::from(value) / 2.0;
            let bar = Bar {
                x,
                y: canvas_height - height,
                width,
                height,
                color: bar_color(value, theme),
            };
            x += width + BAR_GAP;
            bar
        })
        .collect()
}
