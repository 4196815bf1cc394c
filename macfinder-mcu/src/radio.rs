//! Bluetooth Radio Abstraction Traits

use crate::BtAddr;

/// Trait for a Bluetooth Classic radio exposing an SPP server
///
/// MCU-specific crates implement this trait using their Bluetooth stack.
pub trait Radio {
    /// Error type for radio bring-up
    type Error;

    /// Bring up the controller and host stack and register an SPP server
    /// discoverable as `device_name`
    fn start(&mut self, device_name: &str) -> Result<(), Self::Error>;

    /// Factory address of the radio
    ///
    /// Only meaningful after a successful `start`.
    fn address(&self) -> BtAddr;
}
