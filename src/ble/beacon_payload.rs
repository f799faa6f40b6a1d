//! Beacon advertising data.
//!
//! Legacy (31-byte) advertisement, three AD structures:
//!
//! ```text
//! [0x02, 0x01, 0x06]                      flags: LE general discoverable, BR/EDR not supported
//! [n+1,  0x09, name...]                   complete local name
//! [0x05, 0xFF, vid_lo, vid_hi, node, lock] manufacturer specific data
//! ```
//!
//! `lock` is the raw sensed lock state (1 = locked). The reverse flag
//! only changes the on-device label, so receivers apply it themselves.

use heapless::Vec;

use crate::config::{BEACON_DEVICE_NAME, BEACON_VENDOR_ID};
use crate::settings::NodeId;

/// Maximum legacy advertising data length.
pub const MAX_ADV_DATA_LEN: usize = 31;

/// Length of the manufacturer element including its length byte.
pub const MANUFACTURER_ELEMENT_LEN: usize = 6;

const AD_TYPE_FLAGS: u8 = 0x01;
const AD_TYPE_COMPLETE_LOCAL_NAME: u8 = 0x09;
const AD_TYPE_MANUFACTURER_SPECIFIC: u8 = 0xFF;

/// LE General Discoverable Mode | BR/EDR Not Supported.
const ADV_FLAGS: u8 = 0x06;

// Flags (3) + name header (2) + manufacturer element (6).
const _: () = assert!(3 + 2 + BEACON_DEVICE_NAME.len() + MANUFACTURER_ELEMENT_LEN <= MAX_ADV_DATA_LEN);

/// The pair the beacon broadcasts, copied out of the poll loop as one value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BeaconSnapshot {
    pub node_id: NodeId,
    pub locked: bool,
}

impl BeaconSnapshot {
    pub const BOOT: BeaconSnapshot = BeaconSnapshot {
        node_id: NodeId::MIN,
        locked: false,
    };
}

/// Manufacturer-specific element carrying node id and lock state.
pub fn manufacturer_element(snapshot: &BeaconSnapshot) -> [u8; MANUFACTURER_ELEMENT_LEN] {
    let [vid_lo, vid_hi] = BEACON_VENDOR_ID.to_le_bytes();
    [
        (MANUFACTURER_ELEMENT_LEN - 1) as u8,
        AD_TYPE_MANUFACTURER_SPECIFIC,
        vid_lo,
        vid_hi,
        snapshot.node_id.get(),
        snapshot.locked as u8,
    ]
}

/// Full advertising data for one advertising window.
pub fn build_adv_data(snapshot: &BeaconSnapshot) -> Vec<u8, MAX_ADV_DATA_LEN> {
    let mut data = Vec::new();
    let name = BEACON_DEVICE_NAME.as_bytes();

    // Capacity is checked at compile time above.
    let _ = data.extend_from_slice(&[0x02, AD_TYPE_FLAGS, ADV_FLAGS]);
    let _ = data.push(name.len() as u8 + 1);
    let _ = data.push(AD_TYPE_COMPLETE_LOCAL_NAME);
    let _ = data.extend_from_slice(name);
    let _ = data.extend_from_slice(&manufacturer_element(snapshot));
    data
}
