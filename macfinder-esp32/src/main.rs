//! MAC Finder for ESP32
//!
//! Brings up Bluetooth Classic with an SPP server named `MAC_FINDER`, prints the
//! radio's factory address on the serial console once, then idles forever.
//! If Bluetooth cannot be started the device prints a fatal line and halts
//! until it is power-cycled.

mod board;
mod bt;

use esp_idf_svc::{hal::prelude::Peripherals, nvs::EspDefaultNvsPartition};
use log::*;
use macfinder_mcu::{Config, Reporter};

fn main() -> anyhow::Result<()> {
    // Initialize ESP-IDF
    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    info!("MAC Finder v0.1");

    let config = Config::DEFAULT;

    // Get peripherals
    let peripherals = Peripherals::take()?;
    // Bluedroid keeps its bonding data in NVS
    let nvs = EspDefaultNvsPartition::take()?;

    let mut console = board::UartConsole::new(
        peripherals.uart0,
        peripherals.pins.gpio1,
        peripherals.pins.gpio3,
        config.baud_rate,
    )?;
    info!("Console on UART0 at {} baud", config.baud_rate);

    let mut radio = bt::SppRadio::new(peripherals.modem, nvs);
    let mut delay = board::ThreadDelay;

    // Nothing is logged after the report, it must stay the last thing on
    // the console.
    let mut reporter = Reporter::new(config);
    match reporter.run(&mut console, &mut radio, &mut delay) {
        Ok(_) => reporter.idle(&mut delay),
        Err(_) => reporter.halt(&mut delay),
    }
}
