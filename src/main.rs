//! lock-beacon firmware entry point.
//!
//! Boot order:
//! 1. embassy HAL with SoftDevice-compatible interrupt priorities
//! 2. SoftDevice + its event pump
//! 3. settings from flash (defaults when missing or corrupt)
//! 4. beacon task, then the input poll loop on the main task

#![no_std]
#![no_main]

mod ble;
mod config;
mod error;
mod settings;
mod storage;
mod ui;

use defmt::{info, unwrap};
use defmt_rtt as _; // global logger
use embassy_executor::Spawner;
use embassy_nrf::gpio::Pin as _;
use embassy_nrf::interrupt::{self, InterruptExt, Priority};
use embassy_nrf::{bind_interrupts, peripherals, twim};
use nrf_softdevice::{Flash, Softdevice};
use panic_probe as _;

use crate::ble::beacon;
use crate::ui::buttons::Inputs;
use crate::ui::display;
use crate::ui::menu_logic::MenuMachine;

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

#[embassy_executor::task]
async fn beacon_task(sd: &'static Softdevice) -> ! {
    beacon::run(sd).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("lock-beacon starting");

    // SoftDevice reserves priorities 0, 1 and 4.
    let mut nrf_config = embassy_nrf::config::Config::default();
    nrf_config.gpiote_interrupt_priority = Priority::P2;
    nrf_config.time_interrupt_priority = Priority::P2;
    let p = embassy_nrf::init(nrf_config);
    interrupt::TWISPI0.set_priority(Priority::P3);

    let sd: &'static Softdevice = ble::enable_softdevice();
    let mut flash = Flash::take(sd);
    unwrap!(spawner.spawn(ble::softdevice_task(sd)));
    info!("SoftDevice enabled");

    let settings = storage::load_or_default(&mut flash).await;
    let machine = MenuMachine::new(settings);
    beacon::publish(machine.beacon_snapshot());
    unwrap!(spawner.spawn(beacon_task(sd)));

    let inputs = Inputs::new(p.P0_11.degrade(), p.P0_03.degrade());
    let i2c = twim::Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let mut screen = display::init(i2c);

    info!("Entering poll loop");
    ui::poll_loop(inputs, &mut screen, &mut flash, machine).await
}
