//! UART interface trait
//!
//! This module defines the console UART interface that platform implementations must provide.

use super::SystemClock;
use crate::platform::{
    error::{PlatformError, UartError},
    Result,
};

/// UART configuration
#[derive(Debug, Clone, Copy)]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baud_rate: u32,
    /// Clock feeding the baud-rate generator
    pub clock: SystemClock,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            baud_rate: 115200,
            clock: SystemClock::PIOSC,
        }
    }
}

impl UartConfig {
    /// Integer and fractional baud-rate divisors for 16x oversampling
    ///
    /// Returns `(IBRD, FBRD)` where `FBRD` is the fraction in 1/64 steps.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Uart(UartError::InvalidBaudRate)` if the baud
    /// rate is zero or the integer divisor falls outside `1..=0xFFFF`.
    pub fn divisors(&self) -> Result<(u16, u8)> {
        if self.baud_rate == 0 {
            return Err(PlatformError::Uart(UartError::InvalidBaudRate));
        }

        // Divisor scaled by 64, rounded to nearest
        let scaled = (u64::from(self.clock.hz()) * 8 / u64::from(self.baud_rate) + 1) / 2;
        let ibrd = scaled / 64;
        let fbrd = (scaled % 64) as u8;

        if ibrd == 0 || ibrd > 0xFFFF {
            return Err(PlatformError::Uart(UartError::InvalidBaudRate));
        }

        Ok((ibrd as u16, fbrd))
    }
}

/// UART interface trait
///
/// Platform implementations must provide this interface for the console.
///
/// # Safety Invariants
///
/// - UART peripheral must be initialized before use
/// - Only one owner per UART peripheral instance
/// - No concurrent access to the same UART from multiple contexts
pub trait UartInterface {
    /// Write data to UART
    ///
    /// Blocks until every byte has been queued in the transmit FIFO.
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Uart` if the write operation fails.
    fn write(&mut self, data: &[u8]) -> Result<usize>;

    /// Flush transmit buffer
    ///
    /// Blocks until all pending transmit data has been sent.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Uart` if the flush operation fails.
    fn flush(&mut self) -> Result<()>;
}
