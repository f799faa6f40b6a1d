//! Unified error type for lock-beacon.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.
//!
//! None of these ever reach the menu state machine: storage and display
//! failures are logged where they happen and the device keeps running.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Storage
    /// Flash could not be read (range not initialised, driver error).
    StorageUnavailable,

    /// Writing the settings record failed.
    StorageWriteFailure,

    /// A record was read back but its bytes are out of range.
    CorruptRecord,

    // UI / Display
    /// I²C transaction to the display failed.
    Display,

    // BLE
    /// The SoftDevice refused or aborted an advertising window.
    Advertise,
}
