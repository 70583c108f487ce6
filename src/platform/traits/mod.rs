//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.

pub mod clock;
pub mod i2c;
pub mod uart;

// Re-export trait interfaces
pub use clock::SystemClock;
pub use i2c::{Direction, I2cConfig, I2cMasterCommand, I2cMasterInterface, PeripheralAddress};
pub use uart::{UartConfig, UartInterface};
