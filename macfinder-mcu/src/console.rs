//! Serial Console and Delay Abstraction Traits

use std::time::Duration;

/// Line-oriented text output (UART on real hardware)
///
/// Writes are infallible from the caller's point of view: there is nobody to
/// report a broken console to.
pub trait Console {
    /// Write `line` followed by a newline
    fn write_line(&mut self, line: &str);
}

/// Blocking delay on the current thread
pub trait Delay {
    fn delay(&mut self, duration: Duration);
}
