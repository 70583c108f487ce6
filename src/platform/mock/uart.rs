//! Mock UART implementation for testing

use crate::platform::{
    Result,
    traits::{UartConfig, UartInterface},
};
use std::string::String;
use std::vec::Vec;

/// Mock UART implementation
///
/// Captures transmitted bytes in memory so tests can verify console output
/// without hardware.
///
/// # Example
///
/// ```ignore
/// use tiva_bmi160::platform::mock::MockUart;
/// use tiva_bmi160::platform::traits::UartInterface;
///
/// let mut uart = MockUart::new(Default::default());
/// uart.write(b"Hello").unwrap();
/// assert_eq!(uart.tx_buffer(), b"Hello");
/// ```
#[derive(Debug)]
pub struct MockUart {
    config: UartConfig,
    tx_buffer: Vec<u8>,
    flushes: usize,
}

impl MockUart {
    /// Create a new mock UART
    pub fn new(config: UartConfig) -> Self {
        Self {
            config,
            tx_buffer: Vec::new(),
            flushes: 0,
        }
    }

    /// Get transmitted data (for test verification)
    pub fn tx_buffer(&self) -> Vec<u8> {
        self.tx_buffer.clone()
    }

    /// Transmitted data as text
    pub fn tx_string(&self) -> String {
        String::from_utf8_lossy(&self.tx_buffer).into_owned()
    }

    /// Clear transmit buffer
    pub fn clear_tx_buffer(&mut self) {
        self.tx_buffer.clear();
    }

    /// Number of flush calls
    pub fn flush_count(&self) -> usize {
        self.flushes
    }

    /// Get current baud rate
    pub fn baud_rate(&self) -> u32 {
        self.config.baud_rate
    }
}

impl UartInterface for MockUart {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        self.tx_buffer.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }
}
