//! Edge and hold detection for the config button and the external switch.
//!
//! Both inputs are sampled once per poll tick; the tick period is the
//! debounce. [`InputSampler::sample`] turns raw levels into at most one
//! button event and one switch event per tick, button first.

use heapless::Vec;

use crate::config::LONG_PRESS_MS;

/// Events derived from the raw input levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Button has been held for the long-press threshold. Fires once per press.
    LongPressFired,
    /// Button released before a long press fired.
    ShortPressReleased,
    /// External switch logical level differs from the last reported one.
    /// Always reported once on the first tick after boot.
    ExternalLevelChanged(bool),
}

/// Events produced by a single tick.
pub type InputEvents = Vec<InputEvent, 2>;

/// Per-input bookkeeping carried between ticks.
pub struct InputSampler {
    long_press_ms: u64,
    press_start: Option<u64>,
    long_press_latch: bool,
    last_external: Option<bool>,
}

impl InputSampler {
    pub const fn new() -> Self {
        Self::with_threshold(LONG_PRESS_MS)
    }

    pub const fn with_threshold(long_press_ms: u64) -> Self {
        Self {
            long_press_ms,
            press_start: None,
            long_press_latch: false,
            last_external: None,
        }
    }

    /// Feed one tick of raw samples.
    ///
    /// `button_pressed` is the logical pressed state, `external_level` the
    /// logical (already inverted for active-low wiring) switch level.
    pub fn sample(&mut self, now_ms: u64, button_pressed: bool, external_level: bool) -> InputEvents {
        let mut events = InputEvents::new();

        if let Some(event) = self.sample_button(now_ms, button_pressed) {
            let _ = events.push(event);
        }

        if self.last_external != Some(external_level) {
            self.last_external = Some(external_level);
            let _ = events.push(InputEvent::ExternalLevelChanged(external_level));
        }

        events
    }

    /// True while the current press has already produced a long press.
    pub fn long_press_latched(&self) -> bool {
        self.long_press_latch
    }

    fn sample_button(&mut self, now_ms: u64, pressed: bool) -> Option<InputEvent> {
        match (pressed, self.press_start) {
            (true, None) => {
                self.press_start = Some(now_ms);
                None
            }
            (true, Some(start)) => {
                if !self.long_press_latch && now_ms.saturating_sub(start) >= self.long_press_ms {
                    self.long_press_latch = true;
                    Some(InputEvent::LongPressFired)
                } else {
                    None
                }
            }
            (false, Some(_)) => {
                self.press_start = None;
                let latched = core::mem::replace(&mut self.long_press_latch, false);
                (!latched).then_some(InputEvent::ShortPressReleased)
            }
            (false, None) => None,
        }
    }
}

impl Default for InputSampler {
    fn default() -> Self {
        Self::new()
    }
}
