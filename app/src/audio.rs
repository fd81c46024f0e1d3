//! Notification sound playback
//!
//! One master clip is created and preloaded lazily. Every play request works
//! on a fresh copy of it so back-to-back alerts overlap instead of restarting
//! each other.

use std::cell::{RefCell, RefMut};

use crate::error::AlertError;
use crate::surface::AudioBackend;

/// Plays the notification sound through an [`AudioBackend`].
pub struct AudioNotifier<A: AudioBackend> {
    backend: A,
    src: String,
    volume: f64,
    master: RefCell<Option<A::Clip>>,
}

impl<A: AudioBackend> AudioNotifier<A> {
    /// Create a notifier. Nothing is fetched until [`prepare`](Self::prepare)
    /// or the first [`play`](Self::play).
    pub fn new(backend: A, src: impl Into<String>, volume: f64) -> Self {
        Self {
            backend,
            src: src.into(),
            volume,
            master: RefCell::new(None),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn is_prepared(&self) -> bool {
        self.master.borrow().is_some()
    }

    /// Create and preload the master clip if it does not exist yet.
    pub fn prepare(&self) -> Result<(), AlertError> {
        self.master().map(drop)
    }

    /// Play the sound. Failures are logged and otherwise ignored.
    pub fn play(&self) {
        if let Err(e) = self.try_play() {
            tracing::warn!(src = %self.src, error = %e, "Notification sound not played");
        }
    }

    fn try_play(&self) -> Result<(), AlertError> {
        let copy = self.backend.duplicate(&*self.master()?)?;
        self.backend.play(copy, self.volume)
    }

    /// The master clip, created and preloaded on first access.
    fn master(&self) -> Result<RefMut<'_, A::Clip>, AlertError> {
        let mut slot = self.master.borrow_mut();
        let clip = match slot.take() {
            Some(clip) => clip,
            None => {
                let clip = self.backend.create(&self.src)?;
                self.backend.load(&clip);
                tracing::debug!(src = %self.src, "Notification sound preloaded");
                clip
            }
        };
        Ok(RefMut::map(slot, |slot| slot.insert(clip)))
    }
}
