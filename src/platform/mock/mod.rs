//! Mock platform implementation for testing
//!
//! This module provides mock implementations of platform traits that can be used
//! for unit testing without requiring actual hardware.
//!
//! # Feature Gate
//!
//! This module is available in two contexts:
//! - During test builds (`#[cfg(test)]`)
//! - When the `mock` feature is enabled
//!
//! # Example
//!
//! ```ignore
//! use tiva_bmi160::communication::i2c::BusTransport;
//! use tiva_bmi160::platform::mock::MockI2cMaster;
//! use tiva_bmi160::platform::traits::PeripheralAddress;
//!
//! let mut i2c = MockI2cMaster::new();
//! i2c.set_read_data(&[0xD1]);
//!
//! let mut transport = BusTransport::new(&mut i2c);
//! assert_eq!(transport.read_single(PeripheralAddress::new(0x69)), 0xD1);
//! ```

#![cfg(any(test, feature = "mock"))]

mod i2c;
mod uart;

pub use i2c::{I2cEvent, MockI2cMaster};
pub use uart::MockUart;
