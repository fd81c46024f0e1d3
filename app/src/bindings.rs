//! JS entry points for pages that do not use Dioxus.
//!
//! ```js
//! import init, { TabAlertBindings } from "./tab_alert.js";
//! await init();
//! const alerts = new TabAlertBindings({ sound_src: "/static/notification.mp3" });
//! alerts.notify("New message");
//! ```

use wasm_bindgen::prelude::*;

use crate::browser::{InstalledAlerts, install, settings_from_js};

#[wasm_bindgen]
pub struct TabAlertBindings {
    installed: InstalledAlerts,
}

#[wasm_bindgen]
impl TabAlertBindings {
    /// Install alerts on the current page. `settings` may be omitted.
    #[wasm_bindgen(constructor)]
    pub fn new(settings: JsValue) -> Result<TabAlertBindings, JsError> {
        let settings = settings_from_js(settings).map_err(|e| JsError::new(&e.to_string()))?;
        let installed = install(settings).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Self { installed })
    }

    #[wasm_bindgen(js_name = playSound)]
    pub fn play_sound(&self) {
        self.installed.alerts().play_sound();
    }

    #[wasm_bindgen(js_name = startFlashing)]
    pub fn start_flashing(&self, message: &str) -> bool {
        self.installed.alerts().start_flashing(message)
    }

    #[wasm_bindgen(js_name = stopFlashing)]
    pub fn stop_flashing(&self) -> bool {
        self.installed.alerts().stop_flashing()
    }

    pub fn notify(&self, message: &str) -> bool {
        self.installed.alerts().notify(message)
    }

    #[wasm_bindgen(getter, js_name = isFlashing)]
    pub fn is_flashing(&self) -> bool {
        self.installed.alerts().is_flashing()
    }
}

/// Turn on console logging. Pass `true` for debug output.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging(debug: bool) {
    crate::browser::init_logging(debug);
}
