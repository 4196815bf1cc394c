//! MAC Finder MCU Library
//!
//! Hardware-independent half of the MAC finder firmware.
//!
//! This crate provides:
//! - `BtAddr`, the 6-byte Bluetooth device address and its console format
//! - Traits for the serial console, the Bluetooth radio and blocking delays
//! - `Reporter`, the one-shot start-up sequence that prints the address
//!
//! # MCU implementations
//! - ESP32: See `macfinder-esp32`
//!
//! # Note
//! Nothing here touches hardware, so the whole start-up sequence can be
//! exercised on the host with fake peripherals.

pub mod addr;
pub mod config;
pub mod console;
pub mod radio;
pub mod reporter;

pub use addr::*;
pub use config::*;
pub use console::*;
pub use radio::*;
pub use reporter::*;
