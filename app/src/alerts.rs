//! Tab alert facade
//!
//! Bundles the notification sound and the title flasher behind the toggles
//! in [`AlertSettings`].

use std::rc::Rc;

use tab_alert_types::AlertSettings;

use crate::audio::AudioNotifier;
use crate::flasher::TitleFlasher;
use crate::surface::{AudioBackend, Scheduler, TitleSurface};

/// Notification sound and title flashing for one tab.
pub struct TabAlerts<T: TitleSurface, S: Scheduler, A: AudioBackend> {
    settings: AlertSettings,
    sound: AudioNotifier<A>,
    title: TitleFlasher<T, S>,
}

impl<T: TitleSurface + 'static, S: Scheduler, A: AudioBackend> TabAlerts<T, S, A> {
    /// Build alerts from settings. With `preload` on, the sound is created and
    /// loaded right away; a failure there is logged and retried on first play.
    pub fn new(settings: AlertSettings, surface: Rc<T>, scheduler: S, audio: A) -> Self {
        let sound = AudioNotifier::new(
            audio,
            settings.sound_src.clone(),
            settings.effective_volume(),
        );
        let title = TitleFlasher::new(
            surface,
            scheduler,
            settings.effective_flash_interval_ms(),
        );

        if settings.sound_enabled
            && settings.preload
            && let Err(e) = sound.prepare()
        {
            tracing::warn!(src = %settings.sound_src, error = %e, "Failed to preload notification sound");
        }

        Self {
            settings,
            sound,
            title,
        }
    }

    pub fn settings(&self) -> &AlertSettings {
        &self.settings
    }

    pub fn is_flashing(&self) -> bool {
        self.title.is_flashing()
    }

    /// Play the notification sound, unless sound is disabled.
    pub fn play_sound(&self) {
        if self.settings.sound_enabled {
            self.sound.play();
        }
    }

    /// Start flashing `message` in the tab title. See [`TitleFlasher::start`].
    pub fn start_flashing(&self, message: &str) -> bool {
        self.settings.flash_enabled && self.title.start(message)
    }

    /// Stop flashing and restore the original title.
    pub fn stop_flashing(&self) -> bool {
        self.title.stop()
    }

    /// The window regained focus.
    pub fn on_focus(&self) {
        self.stop_flashing();
    }

    /// Alert the user about something new: play the sound and flash `message`.
    ///
    /// Returns whether a flash was started.
    pub fn notify(&self, message: &str) -> bool {
        self.play_sound();
        self.start_flashing(message)
    }
}
