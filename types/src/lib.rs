//! Shared configuration types for tab alerts
//!
//! These are plain serde types so the host page can pass them in as a JS
//! object, or a native app can keep them in its own config file.

use serde::{Deserialize, Serialize};

/// Sound played when no `sound_src` is configured.
pub const DEFAULT_SOUND_SRC: &str = "/static/notification.mp3";

/// Default title flash period.
pub const DEFAULT_FLASH_INTERVAL_MS: u32 = 1000;

/// Floor for the flash period.
pub const MIN_FLASH_INTERVAL_MS: u32 = 100;

/// Ceiling for the flash period. `setInterval` takes a signed 32-bit delay
/// and treats anything that wraps negative as zero.
pub const MAX_FLASH_INTERVAL_MS: u32 = i32::MAX as u32;

// ─────────────────────────────────────────────────────────────────────────────
// Alert Settings
// ─────────────────────────────────────────────────────────────────────────────

/// Settings for the tab alert affordances.
///
/// Every field is optional on input; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertSettings {
    /// Master toggle for the notification sound
    #[serde(default = "default_true")]
    pub sound_enabled: bool,

    /// URL of the notification sound
    #[serde(default = "default_sound_src")]
    pub sound_src: String,

    /// Playback volume (0.0 - 1.0)
    #[serde(default = "default_volume")]
    pub volume: f32,

    /// Create and load the sound up front instead of on first play
    #[serde(default = "default_true")]
    pub preload: bool,

    /// Master toggle for title flashing
    #[serde(default = "default_true")]
    pub flash_enabled: bool,

    /// Time between title swaps, in milliseconds
    #[serde(default = "default_flash_interval_ms")]
    pub flash_interval_ms: u32,
}

impl AlertSettings {
    /// Volume clamped to `[0, 1]`. Non-finite values fall back to full volume.
    pub fn effective_volume(&self) -> f64 {
        if self.volume.is_finite() {
            f64::from(self.volume.clamp(0.0, 1.0))
        } else {
            1.0
        }
    }

    /// Flash period, kept within
    /// [`MIN_FLASH_INTERVAL_MS`]..=[`MAX_FLASH_INTERVAL_MS`].
    pub fn effective_flash_interval_ms(&self) -> u32 {
        self.flash_interval_ms.clamp(MIN_FLASH_INTERVAL_MS, MAX_FLASH_INTERVAL_MS)
    }
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            sound_src: default_sound_src(),
            volume: default_volume(),
            preload: true,
            flash_enabled: true,
            flash_interval_ms: default_flash_interval_ms(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_sound_src() -> String {
    DEFAULT_SOUND_SRC.to_string()
}

fn default_volume() -> f32 {
    1.0
}

fn default_flash_interval_ms() -> u32 {
    DEFAULT_FLASH_INTERVAL_MS
}
