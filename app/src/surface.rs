//! Seams between the alert logic and the page
//!
//! The browser implementations live in `browser`; tests drive the same
//! logic through in-memory doubles.

use crate::error::AlertError;

/// The document title and focus state of the tab.
pub trait TitleSurface {
    fn title(&self) -> String;

    fn set_title(&self, title: &str);

    /// Whether the tab currently has focus.
    fn has_focus(&self) -> bool;
}

/// Runs a callback repeatedly until the returned handle is dropped.
pub trait Scheduler {
    type Handle;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle;
}

/// Creates, preloads, copies and plays audio clips.
///
/// `play` only reports failures that happen synchronously. A rejection that
/// arrives later (e.g. autoplay policy) is logged by the backend itself.
pub trait AudioBackend {
    type Clip;

    fn create(&self, src: &str) -> Result<Self::Clip, AlertError>;

    fn load(&self, clip: &Self::Clip);

    fn duplicate(&self, clip: &Self::Clip) -> Result<Self::Clip, AlertError>;

    fn play(&self, clip: Self::Clip, volume: f64) -> Result<(), AlertError>;
}
