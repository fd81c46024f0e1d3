//! Tab title flashing
//!
//! While the tab is in the background the title alternates between an alert
//! message and the page's original title. Only one flash runs at a time.

use std::cell::RefCell;
use std::rc::Rc;

use crate::surface::{Scheduler, TitleSurface};

/// Alternates the tab title between a message and the original title.
pub struct TitleFlasher<T: TitleSurface, S: Scheduler> {
    surface: Rc<T>,
    scheduler: S,
    original_title: String,
    period_ms: u32,
    active: RefCell<Option<S::Handle>>,
}

impl<T: TitleSurface, S: Scheduler> TitleFlasher<T, S> {
    /// Create a flasher. The current title is remembered as the original.
    pub fn new(surface: Rc<T>, scheduler: S, period_ms: u32) -> Self {
        let original_title = surface.title();
        Self {
            surface,
            scheduler,
            original_title,
            period_ms,
            active: RefCell::new(None),
        }
    }

    pub fn original_title(&self) -> &str {
        &self.original_title
    }

    pub fn is_flashing(&self) -> bool {
        self.active.borrow().is_some()
    }

    /// Start flashing `message`.
    ///
    /// Returns `false` and does nothing if the tab has focus or a flash is
    /// already running. The first swap happens one period after the call.
    pub fn start(&self, message: &str) -> bool
    where
        T: 'static,
    {
        if self.is_flashing() {
            return false;
        }
        if self.surface.has_focus() {
            tracing::debug!("Tab focused, title flash skipped");
            return false;
        }

        let surface = Rc::clone(&self.surface);
        let original = self.original_title.clone();
        let message = message.to_string();
        let mut show_message = true;

        let handle = self.scheduler.every(
            self.period_ms,
            Box::new(move || {
                surface.set_title(if show_message { &message } else { &original });
                show_message = !show_message;
            }),
        );
        *self.active.borrow_mut() = Some(handle);

        tracing::debug!(period_ms = self.period_ms, "Title flash started");
        true
    }

    /// Stop flashing and restore the original title.
    ///
    /// Returns `false` if no flash was running; the title is left alone then.
    pub fn stop(&self) -> bool {
        let Some(handle) = self.active.borrow_mut().take() else {
            return false;
        };
        drop(handle);

        self.surface.set_title(&self.original_title);
        tracing::debug!("Title flash stopped");
        true
    }
}

impl<T: TitleSurface, S: Scheduler> Drop for TitleFlasher<T, S> {
    fn drop(&mut self) {
        self.stop();
    }
}
