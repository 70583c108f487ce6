//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the bus controller and the
//! console UART. All register-level code is isolated to the platform
//! implementations below.

pub mod error;
pub mod traits;

// Platform implementations (feature-gated)
#[cfg(feature = "tm4c129x")]
pub mod tm4c129x;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result};
pub use traits::{
    Direction, I2cConfig, I2cMasterCommand, I2cMasterInterface, PeripheralAddress, SystemClock,
    UartConfig, UartInterface,
};
