//! User interface subsystem - OLED display + config button + external switch.
//!
//! The poll loop samples both inputs every tick, feeds the resulting
//! events to the menu state machine, saves committed settings, redraws
//! the screen and publishes the beacon snapshot.
//!
//! ## Components
//!
//! - **Inputs**: config button and external switch, polled (no edge IRQs)
//! - **Menu**: pure state machine in `menu_logic`
//! - **Display**: SSD1306 128×64 OLED via I²C

pub mod buttons;
pub mod display;
pub mod input_logic;
pub mod menu_logic;
pub mod view;

use crate::ble::beacon;
use crate::config::POLL_INTERVAL_MS;
use crate::storage;
use crate::ui::buttons::Inputs;
use crate::ui::display::Display;
use crate::ui::input_logic::InputSampler;
use crate::ui::menu_logic::{Change, MenuMachine};
use crate::ui::view::LockLabel;
use defmt::{info, warn};
use embassy_time::{Duration, Instant, Ticker};
use embedded_storage_async::nor_flash::NorFlash;

/// Run the input poll loop forever.
pub async fn poll_loop<I2C>(
    inputs: Inputs<'static>,
    screen: &mut Display<I2C>,
    flash: &mut impl NorFlash,
    mut machine: MenuMachine,
) -> !
where
    I2C: embedded_hal::i2c::I2c,
{
    let mut sampler = InputSampler::new();
    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));

    loop {
        let now = Instant::now().as_millis();
        let events = sampler.sample(now, inputs.button_pressed(), inputs.external_level());

        for event in events {
            let Some(change) = machine.handle(event) else {
                continue;
            };
            log_change(&change, &machine);

            if let Some(settings) = change.persist() {
                // Live settings already switched over; a failed write only
                // means the next boot comes up with the old record.
                if let Err(e) = storage::save(flash, &settings).await {
                    warn!("Settings not persisted: {}", e);
                }
            }

            beacon::publish(machine.beacon_snapshot());

            if let Err(e) = display::present(screen, &machine.view()) {
                warn!("Display update failed: {}", e);
            }
        }

        ticker.next().await;
    }
}

fn log_change(change: &Change, machine: &MenuMachine) {
    match change {
        Change::Advanced(menu) => info!("Menu -> {}", menu),
        Change::ReverseToggled(reverse) => info!("Reverse: {} -> {}", !reverse, reverse),
        Change::NodeIdEdited(node_id) => info!("Node id: {}", node_id),
        Change::ConfirmToggled(save) => info!("Save: {}", if *save { "YES" } else { "NO" }),
        Change::Committed(settings) => info!(
            "Settings committed: node {} reverse={}",
            settings.node_id.get(),
            settings.reverse
        ),
        Change::Discarded => info!("Settings edit discarded"),
        Change::LockChanged(locked) => info!(
            "{}",
            LockLabel::from_state(*locked, machine.settings().reverse).as_str()
        ),
    }
}
