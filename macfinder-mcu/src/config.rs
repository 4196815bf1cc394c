//! Hardcoded firmware settings

use std::time::Duration;

/// Fixed settings of the MAC finder
///
/// There is no runtime configuration surface; `Config::DEFAULT` is what the
/// firmware ships with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name the SPP server is discoverable under
    pub device_name: &'static str,
    /// Serial console speed
    pub baud_rate: u32,
    /// Wait before the banner so a serial monitor can attach
    pub boot_delay: Duration,
    /// Empirical pause between radio bring-up and the address query
    pub settle_delay: Duration,
    /// Sleep period of the idle loop after the report
    pub idle_interval: Duration,
    /// Sleep period of the halt loop after a fatal error
    pub halt_interval: Duration,
}

impl Config {
    pub const DEFAULT: Config = Config {
        device_name: "MAC_FINDER",
        baud_rate: 115_200,
        boot_delay: Duration::from_millis(1000),
        settle_delay: Duration::from_millis(500),
        idle_interval: Duration::from_secs(10),
        halt_interval: Duration::from_secs(1),
    };
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}
