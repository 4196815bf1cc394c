//! One-shot start-up report of the radio's hardware address
//!
//! The sequence is: boot delay, banner, radio bring-up, settling delay,
//! address query, report. A failed bring-up prints a single fatal line and
//! the device is parked until it is power-cycled.

use crate::{BtAddr, Config, Console, Delay, Radio};

pub const BANNER: [&str; 4] = [
    "",
    "#################################",
    "## HERRAMIENTA DE OBTENCIÓN MAC ##",
    "#################################",
];

pub const FATAL_RADIO: &str = "FATAL: Error iniciando Bluetooth.";

pub const RULE: &str = "----------------------------------";
pub const ADDR_LABEL: &str = "DIRECCIÓN MAC SPP (Bluetooth Classic):";
pub const HINT: &str = "Guarda esta MAC para usarla en el Emisor!";

/// Where the reporter is in its life
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Starting,
    /// Terminal: bring-up failed, waiting for a power cycle
    RadioFailed,
    RadioOk,
    Reported,
    /// Terminal: address printed, nothing left to do
    Idle,
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError<E> {
    #[error("radio initialization failed: {0:?}")]
    RadioInit(E),
}

pub struct Reporter {
    config: Config,
    stage: Stage,
}

impl Reporter {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            stage: Stage::Starting,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Run the start-up sequence once
    ///
    /// On radio failure the fatal line has already been written when this
    /// returns; the caller's only job is to `halt`.
    pub fn run<C, R, D>(
        &mut self,
        console: &mut C,
        radio: &mut R,
        delay: &mut D,
    ) -> Result<BtAddr, ReportError<R::Error>>
    where
        C: Console,
        R: Radio,
        D: Delay,
    {
        debug_assert_eq!(self.stage, Stage::Starting, "start-up sequence runs once");

        delay.delay(self.config.boot_delay);
        for line in BANNER {
            console.write_line(line);
        }

        if let Err(e) = radio.start(self.config.device_name) {
            console.write_line(FATAL_RADIO);
            self.stage = Stage::RadioFailed;
            return Err(ReportError::RadioInit(e));
        }
        self.stage = Stage::RadioOk;

        // no completion signal to wait on, just give the stack a moment
        delay.delay(self.config.settle_delay);

        let addr = radio.address();
        print_address(console, &addr);
        self.stage = Stage::Reported;

        Ok(addr)
    }

    /// Sleep forever after a successful report
    pub fn idle<D: Delay>(mut self, delay: &mut D) -> ! {
        debug_assert_eq!(self.stage, Stage::Reported);
        self.stage = Stage::Idle;
        loop {
            delay.delay(self.config.idle_interval);
        }
    }

    /// Sleep forever after a fatal error
    pub fn halt<D: Delay>(self, delay: &mut D) -> ! {
        loop {
            delay.delay(self.config.halt_interval);
        }
    }
}

fn print_address<C: Console>(console: &mut C, addr: &BtAddr) {
    console.write_line("");
    console.write_line(RULE);
    console.write_line(ADDR_LABEL);
    console.write_line(&addr.to_string());
    console.write_line(RULE);
    console.write_line(HINT);
}
