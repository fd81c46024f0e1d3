//! Browser bindings
//!
//! Implements the page seams on top of `web-sys`: the document title and
//! focus, `setInterval` via gloo, and `HTMLAudioElement` playback.

use std::rc::{Rc, Weak};

use gloo_timers::callback::Interval;
use tab_alert_types::{AlertSettings, MAX_FLASH_INTERVAL_MS};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Event, HtmlAudioElement, Window};

use crate::alerts::TabAlerts;
use crate::error::AlertError;
use crate::surface::{AudioBackend, Scheduler, TitleSurface};

/// Alerts wired to the real page.
pub type BrowserAlerts = TabAlerts<DocumentTitle, IntervalScheduler, HtmlAudio>;

fn js_err(context: &'static str) -> impl FnOnce(JsValue) -> AlertError {
    move |value| AlertError::js(context, format!("{value:?}"))
}

fn window() -> Result<Window, AlertError> {
    web_sys::window().ok_or(AlertError::NoWindow)
}

// ─────────────────────────────────────────────────────────────────────────────
// Title
// ─────────────────────────────────────────────────────────────────────────────

/// `document.title` and `document.hasFocus()`.
pub struct DocumentTitle {
    document: Document,
}

impl DocumentTitle {
    pub fn new() -> Result<Self, AlertError> {
        let document = window()?.document().ok_or(AlertError::NoDocument)?;
        Ok(Self { document })
    }
}

impl TitleSurface for DocumentTitle {
    fn title(&self) -> String {
        self.document.title()
    }

    fn set_title(&self, title: &str) {
        self.document.set_title(title);
    }

    fn has_focus(&self) -> bool {
        // Unknown focus counts as focused so we never flash a visible tab
        self.document.has_focus().unwrap_or(true)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scheduler
// ─────────────────────────────────────────────────────────────────────────────

/// `setInterval`, cancelled when the [`Interval`] handle drops.
#[derive(Clone, Copy, Default)]
pub struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    type Handle = Interval;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Interval {
        // gloo hands the delay to setInterval as an i32
        Interval::new(period_ms.min(MAX_FLASH_INTERVAL_MS), tick)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Audio
// ─────────────────────────────────────────────────────────────────────────────

/// Playback through `HTMLAudioElement`.
#[derive(Clone, Copy, Default)]
pub struct HtmlAudio;

impl AudioBackend for HtmlAudio {
    type Clip = HtmlAudioElement;

    fn create(&self, src: &str) -> Result<HtmlAudioElement, AlertError> {
        HtmlAudioElement::new_with_src(src).map_err(js_err("create audio element"))
    }

    fn load(&self, clip: &HtmlAudioElement) {
        clip.load();
    }

    fn duplicate(&self, clip: &HtmlAudioElement) -> Result<HtmlAudioElement, AlertError> {
        clip.clone_node()
            .map_err(js_err("clone audio element"))?
            .dyn_into::<HtmlAudioElement>()
            .map_err(|node| AlertError::js("clone audio element", format!("{node:?}")))
    }

    fn play(&self, clip: HtmlAudioElement, volume: f64) -> Result<(), AlertError> {
        clip.set_volume(volume);
        let promise = clip.play().map_err(js_err("play audio"))?;

        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                tracing::warn!(
                    error = ?e,
                    "Audio playback blocked (user interaction required)"
                );
            }
        });
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Focus
// ─────────────────────────────────────────────────────────────────────────────

/// A `focus` listener on the window, removed when dropped.
pub struct FocusListener {
    window: Window,
    closure: Closure<dyn FnMut(Event)>,
}

impl FocusListener {
    pub fn new(mut on_focus: impl FnMut() + 'static) -> Result<Self, AlertError> {
        let window = window()?;
        let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| on_focus());

        window
            .add_event_listener_with_callback("focus", closure.as_ref().unchecked_ref())
            .map_err(js_err("add focus listener"))?;

        Ok(Self { window, closure })
    }
}

impl Drop for FocusListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("focus", self.closure.as_ref().unchecked_ref());
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Install
// ─────────────────────────────────────────────────────────────────────────────

/// Browser alerts together with the focus listener that cancels flashing.
///
/// Dropping this removes the listener and restores the original title.
pub struct InstalledAlerts {
    alerts: Rc<BrowserAlerts>,
    _focus: FocusListener,
}

impl InstalledAlerts {
    pub fn alerts(&self) -> &BrowserAlerts {
        &self.alerts
    }
}

/// Wire alerts to the current page.
pub fn install(settings: AlertSettings) -> Result<InstalledAlerts, AlertError> {
    let surface = Rc::new(DocumentTitle::new()?);
    let alerts = Rc::new(TabAlerts::new(
        settings,
        surface,
        IntervalScheduler,
        HtmlAudio,
    ));

    let weak: Weak<BrowserAlerts> = Rc::downgrade(&alerts);
    let focus = FocusListener::new(move || {
        if let Some(alerts) = weak.upgrade() {
            alerts.on_focus();
        }
    })?;

    tracing::info!(
        sound_src = %alerts.settings().sound_src,
        flash_interval_ms = alerts.settings().effective_flash_interval_ms(),
        "Tab alerts installed"
    );

    Ok(InstalledAlerts {
        alerts,
        _focus: focus,
    })
}

/// Read settings from a JS object passed by the page, e.g. `{ sound_src: ... }`.
///
/// `undefined` and `null` give the defaults.
pub fn settings_from_js(value: JsValue) -> Result<AlertSettings, AlertError> {
    if value.is_undefined() || value.is_null() {
        return Ok(AlertSettings::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| AlertError::Settings(e.to_string()))
}

/// Install the tracing subscriber that writes to the browser console.
pub fn init_logging(debug: bool) {
    let level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    if tracing::dispatcher::has_been_set() {
        tracing::debug!("Logging already initialized by the host app");
        return;
    }
    if let Err(e) = dioxus_logger::init(level) {
        tracing::warn!(error = %e, "Failed to initialize console logging");
    }
}
