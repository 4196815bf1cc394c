//! Serial console and delay for the ESP32 dev board

use esp_idf_svc::hal::{
    gpio::{AnyIOPin, InputPin, OutputPin},
    peripheral::Peripheral,
    uart::{self, Uart, UartDriver},
    units::Hertz,
};
use esp_idf_svc::sys::EspError;
use macfinder_mcu::{Console, Delay};

/// Line console on a UART (UART0 is the USB bridge on most dev boards)
pub struct UartConsole<'d> {
    uart: UartDriver<'d>,
}

impl<'d> UartConsole<'d> {
    pub fn new<U: Uart>(
        uart: impl Peripheral<P = U> + 'd,
        tx: impl Peripheral<P = impl OutputPin> + 'd,
        rx: impl Peripheral<P = impl InputPin> + 'd,
        baud_rate: u32,
    ) -> Result<Self, EspError> {
        let config = uart::config::Config::default().baudrate(Hertz(baud_rate));
        let uart = UartDriver::new(
            uart,
            tx,
            rx,
            Option::<AnyIOPin>::None,
            Option::<AnyIOPin>::None,
            &config,
        )?;
        Ok(Self { uart })
    }

    fn write_all(&self, mut bytes: &[u8]) {
        while !bytes.is_empty() {
            match self.uart.write(bytes) {
                Ok(n) => bytes = &bytes[n..],
                // nowhere to report a broken console
                Err(_) => return,
            }
        }
    }
}

impl Console for UartConsole<'_> {
    fn write_line(&mut self, line: &str) {
        self.write_all(line.as_bytes());
        self.write_all(b"\r\n");
        let _ = self.uart.wait_tx_done(u32::MAX);
    }
}

/// Blocking delay on the main task
pub struct ThreadDelay;

impl Delay for ThreadDelay {
    fn delay(&mut self, duration: std::time::Duration) {
        std::thread::sleep(duration);
    }
}
