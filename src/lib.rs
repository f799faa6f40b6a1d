//! Test-only library interface for lock-beacon.
//!
//! This module re-exports the pure logic modules that can be tested
//! on the host (no embedded hardware required).
//!
//! Usage: `cargo test --lib` / `cargo test --test integration`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main].
//! This lib.rs provides a separate entry point for host-based testing.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod settings;

// Internal module paths for the actual implementations
#[path = "ble/beacon_payload.rs"]
mod ble_beacon_payload_impl;

#[path = "ui/input_logic.rs"]
mod ui_input_logic_impl;
#[path = "ui/menu_logic.rs"]
mod ui_menu_logic_impl;
#[path = "ui/view.rs"]
mod ui_view_impl;

pub mod ble {
    pub mod beacon_payload {
        pub use crate::ble_beacon_payload_impl::*;
    }
}

pub mod ui {
    pub mod input_logic {
        pub use crate::ui_input_logic_impl::*;
    }
    pub mod menu_logic {
        pub use crate::ui_menu_logic_impl::*;
    }
    pub mod view {
        pub use crate::ui_view_impl::*;
    }

    pub use menu_logic::Menu;
}

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
