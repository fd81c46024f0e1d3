//! Dioxus integration for tab alerts.
//!
//! Install once at the app root with `use_tab_alert_provider()`, then call
//! `use_tab_alert()` from any component that needs to alert the user.

use std::rc::Rc;

use dioxus::prelude::*;
use tab_alert_types::AlertSettings;

use crate::browser::{InstalledAlerts, install};

/// Handle to the page's tab alerts.
///
/// Every method is a no-op if the alerts could not be installed.
#[derive(Clone)]
pub struct TabAlertHandle {
    inner: Option<Rc<InstalledAlerts>>,
}

impl TabAlertHandle {
    fn install(settings: AlertSettings) -> Self {
        let inner = match install(settings) {
            Ok(installed) => Some(Rc::new(installed)),
            Err(e) => {
                tracing::warn!(error = %e, "Tab alerts unavailable");
                None
            }
        };
        Self { inner }
    }

    /// Play the sound and flash `message` if the tab is in the background.
    pub fn notify(&self, message: &str) -> bool {
        self.inner
            .as_ref()
            .is_some_and(|i| i.alerts().notify(message))
    }

    pub fn play_sound(&self) {
        if let Some(inner) = &self.inner {
            inner.alerts().play_sound();
        }
    }

    pub fn start_flashing(&self, message: &str) -> bool {
        self.inner
            .as_ref()
            .is_some_and(|i| i.alerts().start_flashing(message))
    }

    pub fn stop_flashing(&self) -> bool {
        self.inner
            .as_ref()
            .is_some_and(|i| i.alerts().stop_flashing())
    }
}

/// Install tab alerts at the app root and provide them by context.
///
/// Call this once in your App component before any children use alerts.
pub fn use_tab_alert_provider(settings: AlertSettings) -> TabAlertHandle {
    use_context_provider(move || TabAlertHandle::install(settings))
}

/// Get the tab alert handle from context.
pub fn use_tab_alert() -> TabAlertHandle {
    use_context::<TabAlertHandle>()
}
