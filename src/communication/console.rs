//! Console reporter
//!
//! Human-readable trace lines over a UART. Formatting is presentation only;
//! nothing downstream parses these lines.

use crate::platform::{traits::UartInterface, PlatformError};
use core::fmt::{self, Write};
use heapless::String;

/// Longest line the reporter formats in one go
pub const LINE_CAPACITY: usize = 64;

/// Console reporter over a UART
pub struct Console<U> {
    uart: U,
}

impl<U: UartInterface> Console<U> {
    /// Wrap an initialized UART
    pub fn new(uart: U) -> Self {
        Self { uart }
    }

    /// Borrow the underlying UART
    pub fn uart(&self) -> &U {
        &self.uart
    }

    /// Release the UART
    pub fn release(self) -> U {
        self.uart
    }

    /// Format one line, append `\r\n`, transmit it and wait for the UART to
    /// drain
    ///
    /// Formatted output that does not fit `LINE_CAPACITY` is cut at the
    /// argument that overflowed.
    pub fn line(&mut self, args: fmt::Arguments<'_>) -> Result<(), PlatformError> {
        let mut buf: String<LINE_CAPACITY> = String::new();
        // Overflow only truncates the line
        let _ = buf.write_fmt(args);
        self.uart.write(buf.as_bytes())?;
        self.uart.write(b"\r\n")?;
        self.uart.flush()
    }

    /// `ID: 0x..`
    pub fn report_identity(&mut self, id: u8) -> Result<(), PlatformError> {
        self.line(format_args!("ID: {:#x}", id))
    }

    /// `Status: 0x..`
    pub fn report_status(&mut self, status: u8) -> Result<(), PlatformError> {
        self.line(format_args!("Status: {:#x}", status))
    }

    /// `<label>: <signed decimal>`
    pub fn report_sample(&mut self, label: &str, sample: i16) -> Result<(), PlatformError> {
        self.line(format_args!("{}: {}", label, sample))
    }
}

impl<U: UartInterface> Write for Console<U> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.uart.write(s.as_bytes()).map(|_| ()).map_err(|_| fmt::Error)
    }
}
