//! Browser tab alerts
//!
//! Two affordances for pages that want attention while in the background:
//! flashing the tab title between a message and the original title, and
//! playing a short notification sound.
//!
//! The logic is written against the seams in [`surface`]; `browser` wires
//! them to `web-sys` when compiled for `wasm32`.

pub mod alerts;
pub mod audio;
pub mod error;
pub mod flasher;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub mod bindings;
#[cfg(target_arch = "wasm32")]
pub mod browser;
#[cfg(target_arch = "wasm32")]
pub mod hooks;

#[cfg(test)]
mod testing;

pub use alerts::TabAlerts;
pub use audio::AudioNotifier;
pub use error::AlertError;
pub use flasher::TitleFlasher;
pub use surface::{AudioBackend, Scheduler, TitleSurface};
pub use tab_alert_types::AlertSettings;

#[cfg(target_arch = "wasm32")]
pub use browser::{InstalledAlerts, init_logging, install, settings_from_js};
#[cfg(target_arch = "wasm32")]
pub use hooks::{TabAlertHandle, use_tab_alert, use_tab_alert_provider};
