//! Bluetooth Low Energy subsystem.
//!
//! This module drives the Nordic SoftDevice S140 as a **broadcaster**:
//! the device only ever sends non-connectable advertisements and never
//! accepts a connection.
//!
//! 1. **Beacon payload** - builds the advertising data carrying the node
//!    id and the lock state.
//! 2. **Beacon** - the periodic advertise/stop cycle, reading the live
//!    snapshot the poll loop publishes.

pub mod beacon;
pub mod beacon_payload;

use nrf_softdevice::{raw, Softdevice};

use crate::config::BEACON_DEVICE_NAME;

/// Enable the SoftDevice for a single advertising set and no connections.
pub fn enable_softdevice() -> &'static mut Softdevice {
    let config = nrf_softdevice::Config {
        clock: Some(raw::nrf_clock_lf_cfg_t {
            source: raw::NRF_CLOCK_LF_SRC_RC as u8,
            rc_ctiv: 16,
            rc_temp_ctiv: 2,
            accuracy: raw::NRF_CLOCK_LF_ACCURACY_500_PPM as u8,
        }),
        gap_role_count: Some(raw::ble_gap_cfg_role_count_t {
            adv_set_count: 1,
            periph_role_count: 0,
            central_role_count: 0,
            central_sec_count: 0,
            _bitfield_1: raw::ble_gap_cfg_role_count_t::new_bitfield_1(0),
        }),
        gap_device_name: Some(raw::ble_gap_cfg_device_name_t {
            p_value: BEACON_DEVICE_NAME.as_ptr() as _,
            current_len: BEACON_DEVICE_NAME.len() as u16,
            max_len: BEACON_DEVICE_NAME.len() as u16,
            write_perm: unsafe { core::mem::zeroed() },
            _bitfield_1: raw::ble_gap_cfg_device_name_t::new_bitfield_1(
                raw::BLE_GATTS_VLOC_STACK as u8,
            ),
        }),
        ..Default::default()
    };

    Softdevice::enable(&config)
}

/// SoftDevice event pump.
#[embassy_executor::task]
pub async fn softdevice_task(sd: &'static Softdevice) -> ! {
    sd.run().await
}
