//! GPIO inputs sampled by the poll loop.
//!
//! Two physical inputs (active-low with internal pull-up):
//!   - CONFIG button  - short press edits, long press walks the menu
//!   - external switch - dry contact; closed (low) means locked
//!
//! Nothing here waits on edges: the poll loop reads both levels once per
//! tick and `input_logic` turns them into events.

use embassy_nrf::gpio::{AnyPin, Input, Pull};

/// The two sampled inputs.
pub struct Inputs<'d> {
    button: Input<'d>,
    external: Input<'d>,
}

impl<'d> Inputs<'d> {
    pub fn new(button: AnyPin, external: AnyPin) -> Self {
        Self {
            button: Input::new(button, Pull::Up),
            external: Input::new(external, Pull::Up),
        }
    }

    /// Logical button state (pressed = true).
    pub fn button_pressed(&self) -> bool {
        self.button.is_low()
    }

    /// Logical external switch level (contact closed = true).
    pub fn external_level(&self) -> bool {
        self.external.is_low()
    }
}
