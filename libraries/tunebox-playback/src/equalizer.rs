//! Five-band equalizer
//!
//! Peaking bands at fixed centre frequencies with Q = 1 and per-band gain
//! control (-12 to +12 dB). The platform audio graph applies the filters;
//! this module owns the settings and the biquad coefficients.

use crate::error::{PlaybackError, Result};
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::fmt;

/// Band centre frequencies (Hz)
pub const BAND_FREQUENCIES: [f32; 5] = [60.0, 310.0, 1000.0, 3000.0, 6000.0];

/// Q factor shared by every band
pub const BAND_Q: f32 = 1.0;

/// Lowest band gain (dB)
pub const MIN_GAIN_DB: f32 = -12.0;

/// Highest band gain (dB)
pub const MAX_GAIN_DB: f32 = 12.0;

/// Built-in gain presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EqPreset {
    /// All bands at 0 dB
    #[default]
    Flat,

    /// Lifted lows
    BassBoost,

    /// Lifted mids for voice
    VocalBoost,
}

impl EqPreset {
    /// Every preset, in display order
    pub const ALL: [EqPreset; 3] = [Self::Flat, Self::BassBoost, Self::VocalBoost];

    /// Band gains for this preset
    pub fn gains(self) -> [f32; 5] {
        match self {
            Self::Flat => [0.0; 5],
            Self::BassBoost => [8.0, 5.0, 0.0, 0.0, 0.0],
            Self::VocalBoost => [0.0, 0.0, 5.0, 5.0, 0.0],
        }
    }

    /// Preset key
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::BassBoost => "bass-boost",
            Self::VocalBoost => "vocal-boost",
        }
    }

    /// Look up a preset by key
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.as_str() == name)
            .ok_or_else(|| PlaybackError::UnknownPreset(name.to_string()))
    }
}

impl fmt::Display for EqPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized biquad coefficients (a0 = 1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiquadCoefficients {
    pub b0: f32,
    pub b1: f32,
    pub b2: f32,
    pub a1: f32,
    pub a2: f32,
}

/// One peaking band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EqBand {
    /// Centre frequency in Hz
    pub frequency: f32,
    gain_db: f32,
}

impl EqBand {
    fn new(frequency: f32) -> Self {
        Self {
            frequency,
            gain_db: 0.0,
        }
    }

    /// Gain in dB
    pub fn gain_db(&self) -> f32 {
        self.gain_db
    }

    /// Slider label: `60Hz`, `310Hz`, `1kHz`, ...
    pub fn label(&self) -> String {
        if self.frequency < 1000.0 {
            format!("{}Hz", self.frequency)
        } else {
            format!("{}kHz", self.frequency / 1000.0)
        }
    }

    /// Peaking filter coefficients for a sample rate
    ///
    /// Returns an identity filter for a non-positive sample rate. The centre
    /// frequency is capped at 45% of the sample rate to stay clear of Nyquist.
    pub fn coefficients(&self, sample_rate: f32) -> BiquadCoefficients {
        if sample_rate < 1.0 {
            return BiquadCoefficients {
                b0: 1.0,
                b1: 0.0,
                b2: 0.0,
                a1: 0.0,
                a2: 0.0,
            };
        }

        let a = 10.0_f32.powf(self.gain_db / 40.0);
        let frequency = self.frequency.min(sample_rate * 0.45);
        let omega = 2.0 * PI * frequency / sample_rate;
        let cos_omega = omega.cos();
        let alpha = omega.sin() / (2.0 * BAND_Q);

        let a0 = 1.0 + alpha / a;
        BiquadCoefficients {
            b0: (1.0 + alpha * a) / a0,
            b1: (-2.0 * cos_omega) / a0,
            b2: (1.0 - alpha * a) / a0,
            a1: (-2.0 * cos_omega) / a0,
            a2: (1.0 - alpha / a) / a0,
        }
    }
}

/// Equalizer settings
#[derive(Debug, Clone, PartialEq)]
pub struct Equalizer {
    bands: [EqBand; 5],
}

impl Equalizer {
    /// Create a flat equalizer
    pub fn new() -> Self {
        Self {
            bands: BAND_FREQUENCIES.map(EqBand::new),
        }
    }

    /// All bands, low to high
    pub fn bands(&self) -> &[EqBand] {
        &self.bands
    }

    /// Current gains, low to high
    pub fn gains(&self) -> [f32; 5] {
        self.bands.map(|band| band.gain_db)
    }

    /// Set one band's gain, clamped to -12..=12 dB
    pub fn set_gain(&mut self, band: usize, gain_db: f32) -> Result<()> {
        let band = self
            .bands
            .get_mut(band)
            .ok_or(PlaybackError::UnknownBand(band))?;
        band.gain_db = gain_db.clamp(MIN_GAIN_DB, MAX_GAIN_DB);
        Ok(())
    }

    /// Overwrite every band from a preset
    pub fn apply_preset(&mut self, preset: EqPreset) {
        for (band, gain) in self.bands.iter_mut().zip(preset.gains()) {
            band.gain_db = gain;
        }
    }

    /// Apply a preset by key
    pub fn apply_preset_named(&mut self, name: &str) -> Result<EqPreset> {
        let preset = EqPreset::from_name(name)?;
        self.apply_preset(preset);
        Ok(preset)
    }

    /// The preset matching the current gains, if any
    pub fn matching_preset(&self) -> Option<EqPreset> {
        let gains = self.gains();
        EqPreset::ALL.into_iter().find(|preset| preset.gains() == gains)
    }
}

impl Default for Equalizer {
    fn default() -> Self {
        Self::new()
    }
}
