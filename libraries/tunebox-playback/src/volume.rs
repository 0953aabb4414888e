//! Volume control
//!
//! Volume range is 0-100%, handed to the media element as a linear 0.0-1.0
//! gain.

/// Volume controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Volume {
    /// Volume level (0-100)
    level: u8,

    /// Mute state (preserves volume level)
    muted: bool,
}

impl Volume {
    /// Create new volume controller
    ///
    /// # Arguments
    /// * `level` - Initial volume (0-100, default: 80)
    pub fn new(level: u8) -> Self {
        Self {
            level: level.min(100),
            muted: false,
        }
    }

    /// Set volume level (0-100)
    pub fn set_level(&mut self, level: u8) {
        self.level = level.min(100);
    }

    /// Get current volume level (0-100)
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Toggle mute state
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Gain for the media element
    ///
    /// Returns 0.0 if muted, otherwise `level / 100`
    pub fn gain(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            f32::from(self.level) / 100.0
        }
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(80)
    }
}
