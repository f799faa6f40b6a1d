//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and protocol
//! constants live here so they can be tuned in one place.

// Input polling

/// Period of the input poll loop (ms). Polling at this rate is the only
/// debouncing the button and the external switch get.
pub const POLL_INTERVAL_MS: u64 = 100;

/// Continuous press duration that counts as a long press (ms).
pub const LONG_PRESS_MS: u64 = 3000;

// BLE beacon

/// How long each advertising window stays open before the payload is
/// rebuilt (ms).
pub const ADV_WINDOW_MS: u64 = 2000;

/// Advertising interval inside a window (in 0.625 ms units). 160 = 100 ms.
pub const ADV_INTERVAL: u32 = 160;

/// Complete local name carried in every advertisement.
pub const BEACON_DEVICE_NAME: &str = "SecurityNode";

/// Vendor id in the manufacturer-specific element. 0xFFFF is the
/// Bluetooth SIG placeholder for unassigned / test use.
pub const BEACON_VENDOR_ID: u16 = 0xFFFF;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Config button      → P0.11  (active-low, internal pull-up)
//   External switch    → P0.03  (active-low dry contact, internal pull-up)
//   I²C SDA            → P0.26
//   I²C SCL            → P0.27

// Settings storage

/// Flash page index where the settings record starts (4 KB per page on nRF52840).
pub const STORAGE_FLASH_PAGE_START: u32 = 240;

/// Number of flash pages reserved for the settings record.
pub const STORAGE_FLASH_PAGE_COUNT: u32 = 2;
