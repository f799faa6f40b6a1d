//! Periodic beacon broadcaster.
//!
//! Every cycle copies the live snapshot, builds the advertising data and
//! advertises it non-connectable for `ADV_WINDOW_MS`, then stops and
//! starts over with a fresh snapshot. Changes made during a window show
//! up in the next one.

use core::cell::Cell;

use crate::ble::beacon_payload::{build_adv_data, BeaconSnapshot};
use crate::config::{ADV_INTERVAL, ADV_WINDOW_MS};
use crate::error::Error;
use defmt::{debug, error, info};
use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_time::{Duration, Instant, Timer};
use nrf_softdevice::ble::{peripheral, TxPower};
use nrf_softdevice::Softdevice;

/// Live (node id, lock state) pair, written by the poll loop.
///
/// Only ever accessed inside a short critical section that copies the
/// value in or out; nothing awaits while holding it.
static BEACON_STATE: Mutex<CriticalSectionRawMutex, Cell<BeaconSnapshot>> =
    Mutex::new(Cell::new(BeaconSnapshot::BOOT));

/// Replace the broadcast snapshot.
pub fn publish(snapshot: BeaconSnapshot) {
    BEACON_STATE.lock(|state| state.set(snapshot));
}

/// Copy out the current snapshot.
pub fn snapshot() -> BeaconSnapshot {
    BEACON_STATE.lock(|state| state.get())
}

/// Advertise `adv_data` until the window closes. Dropping the advertise
/// future stops the radio.
async fn advertise_window(sd: &Softdevice, adv_data: &[u8]) -> Result<(), Error> {
    let config = peripheral::Config {
        interval: ADV_INTERVAL,
        tx_power: TxPower::ZerodBm,
        ..Default::default()
    };
    let adv = peripheral::NonconnectableAdvertisement::NonscannableUndirected { adv_data };

    let window = Duration::from_millis(ADV_WINDOW_MS);
    let started = Instant::now();

    match select(peripheral::advertise(sd, adv, &config), Timer::after(window)).await {
        Either::First(result) => {
            if let Err(e) = result {
                error!("Advertising aborted: {:?}", e);
            }
            // Keep the cycle period even when the radio gave up early.
            Timer::at(started + window).await;
            Err(Error::Advertise)
        }
        Either::Second(()) => Ok(()),
    }
}

/// Beacon loop - never returns.
pub async fn run(sd: &'static Softdevice) -> ! {
    info!("Beacon started ({} ms windows)", ADV_WINDOW_MS);

    loop {
        let current = snapshot();
        let adv_data = build_adv_data(&current);

        info!(
            "Starting advertisement: node {} locked={}",
            current.node_id.get(),
            current.locked
        );
        if advertise_window(sd, &adv_data).await.is_ok() {
            debug!("Stop advertisement");
        }
    }
}
