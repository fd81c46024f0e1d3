//! In-memory doubles for the page seams, used by unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::AlertError;
use crate::surface::{AudioBackend, Scheduler, TitleSurface};

// ─────────────────────────────────────────────────────────────────────────────
// Title
// ─────────────────────────────────────────────────────────────────────────────

/// Title and focus state of a pretend tab. Starts unfocused.
pub struct FakeTitle {
    title: RefCell<String>,
    focused: Cell<bool>,
}

impl FakeTitle {
    pub fn new(title: &str) -> Self {
        Self {
            title: RefCell::new(title.to_string()),
            focused: Cell::new(false),
        }
    }

    pub fn get(&self) -> String {
        self.title.borrow().clone()
    }

    pub fn set(&self, title: &str) {
        *self.title.borrow_mut() = title.to_string();
    }

    pub fn set_focus(&self, focused: bool) {
        self.focused.set(focused);
    }
}

impl TitleSurface for FakeTitle {
    fn title(&self) -> String {
        self.get()
    }

    fn set_title(&self, title: &str) {
        self.set(title);
    }

    fn has_focus(&self) -> bool {
        self.focused.get()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scheduler
// ─────────────────────────────────────────────────────────────────────────────

struct FakeTimer {
    period_ms: u32,
    tick: Box<dyn FnMut()>,
    live: Rc<Cell<bool>>,
}

/// Scheduler whose timers only fire when the test calls [`tick`](Self::tick).
#[derive(Clone, Default)]
pub struct FakeScheduler {
    timers: Rc<RefCell<Vec<FakeTimer>>>,
}

/// Cancels its timer when dropped.
pub struct FakeInterval {
    live: Rc<Cell<bool>>,
}

impl Drop for FakeInterval {
    fn drop(&mut self) {
        self.live.set(false);
    }
}

impl FakeScheduler {
    /// Fire every live timer once.
    pub fn tick(&self) {
        for timer in self.timers.borrow_mut().iter_mut() {
            if timer.live.get() {
                (timer.tick)();
            }
        }
    }

    pub fn live_count(&self) -> usize {
        self.timers.borrow().iter().filter(|t| t.live.get()).count()
    }

    /// Periods of every timer ever scheduled, in order.
    pub fn periods(&self) -> Vec<u32> {
        self.timers.borrow().iter().map(|t| t.period_ms).collect()
    }
}

impl Scheduler for FakeScheduler {
    type Handle = FakeInterval;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> FakeInterval {
        let live = Rc::new(Cell::new(true));
        self.timers.borrow_mut().push(FakeTimer {
            period_ms,
            tick,
            live: Rc::clone(&live),
        });
        FakeInterval { live }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Audio
// ─────────────────────────────────────────────────────────────────────────────

/// A call made against [`FakeAudio`]. Clips are numbered in creation order.
#[derive(Debug, Clone, PartialEq)]
pub enum AudioCall {
    Create(String),
    Load(u32),
    Duplicate(u32),
    Play { clip: u32, volume: f64 },
}

#[derive(Default)]
struct FakeAudioState {
    calls: RefCell<Vec<AudioCall>>,
    next_clip: Cell<u32>,
    fail_create: Cell<bool>,
    fail_play: Cell<bool>,
}

/// Audio backend that records every call. Clones share one log.
#[derive(Clone, Default)]
pub struct FakeAudio {
    state: Rc<FakeAudioState>,
}

impl FakeAudio {
    pub fn calls(&self) -> Vec<AudioCall> {
        self.state.calls.borrow().clone()
    }

    pub fn fail_create(&self, fail: bool) {
        self.state.fail_create.set(fail);
    }

    pub fn fail_play(&self, fail: bool) {
        self.state.fail_play.set(fail);
    }

    fn record(&self, call: AudioCall) {
        self.state.calls.borrow_mut().push(call);
    }

    fn next_clip(&self) -> u32 {
        let id = self.state.next_clip.get();
        self.state.next_clip.set(id + 1);
        id
    }
}

impl AudioBackend for FakeAudio {
    type Clip = u32;

    fn create(&self, src: &str) -> Result<u32, AlertError> {
        self.record(AudioCall::Create(src.to_string()));
        if self.state.fail_create.get() {
            return Err(AlertError::js("create audio element", "unsupported source"));
        }
        Ok(self.next_clip())
    }

    fn load(&self, clip: &u32) {
        self.record(AudioCall::Load(*clip));
    }

    fn duplicate(&self, clip: &u32) -> Result<u32, AlertError> {
        self.record(AudioCall::Duplicate(*clip));
        Ok(self.next_clip())
    }

    fn play(&self, clip: u32, volume: f64) -> Result<(), AlertError> {
        self.record(AudioCall::Play { clip, volume });
        if self.state.fail_play.get() {
            return Err(AlertError::js("play audio", "NotAllowedError"));
        }
        Ok(())
    }
}
