use core::time::Duration;
use serialport::SerialPort;

pub mod config;
pub mod probe;

pub use probe::{run, Outcome, ProbeError};

/// # Errors
///
/// Will return `Err` if serial port cannot be opened.
pub fn open_serial_port(
    path: &str,
    baud_rate: u32,
    timeout: Duration,
) -> Result<Box<dyn SerialPort>, serialport::Error> {
    serialport::new(path, baud_rate).timeout(timeout).open()
}
