//! I2C Bus Transport and Register Access
//!
//! Blocking, single-master transactions on top of an
//! [`I2cMasterInterface`](crate::platform::traits::I2cMasterInterface)
//! controller.
//!
//! # Layers
//!
//! - [`BusTransport`]: single-byte and burst transfers against an addressed
//!   peripheral. Each controller command is followed by a double-wait on the
//!   busy signal (assert, then clear).
//! - [`RegisterBus`]: "write register address, then read/write value(s)" for
//!   one fixed peripheral, relying on the peripheral's register pointer
//!   auto-increment for bursts.
//!
//! # Blocking
//!
//! There is no timeout. A peripheral that never acknowledges leaves the
//! controller busy and the calling context spinning; nothing above this layer
//! sees an error for it.
//!
//! # Usage
//!
//! ```ignore
//! use tiva_bmi160::communication::i2c::{BusTransport, RegisterBus};
//! use tiva_bmi160::platform::traits::PeripheralAddress;
//!
//! let mut regs = RegisterBus::new(BusTransport::new(i2c), PeripheralAddress::new(0x69));
//! let id = regs.read_register(0x00);
//! ```

mod register;
mod transport;

pub use register::RegisterBus;
pub use transport::BusTransport;

use core::fmt;

/// Bus transaction error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "tm4c129x", derive(defmt::Format))]
pub enum BusError {
    /// Burst buffer was empty
    InvalidLength,
}

impl fmt::Display for BusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusError::InvalidLength => write!(f, "Burst transfer needs at least one byte"),
        }
    }
}
