//! Platform error types
//!
//! This module defines error types for platform configuration.
//!
//! Bus transfers themselves never fail at this layer: a peripheral that does
//! not acknowledge leaves the controller busy and the caller blocked. Errors
//! here only cover configuration that cannot be programmed into hardware.

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
///
/// All platform implementations map their HAL-specific errors to these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "tm4c129x", derive(defmt::Format))]
pub enum PlatformError {
    /// UART configuration failed
    Uart(UartError),
    /// I2C configuration failed
    I2c(I2cError),
}

/// UART-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "tm4c129x", derive(defmt::Format))]
pub enum UartError {
    /// Baud rate cannot be derived from the UART clock
    InvalidBaudRate,
}

/// I2C-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "tm4c129x", derive(defmt::Format))]
pub enum I2cError {
    /// SCL frequency cannot be derived from the system clock
    InvalidFrequency,
    /// Address does not fit in 7 bits
    InvalidAddress,
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Uart(e) => write!(f, "UART error: {:?}", e),
            PlatformError::I2c(e) => write!(f, "I2C error: {:?}", e),
        }
    }
}
