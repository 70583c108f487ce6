//! Communication
//!
//! # Modules
//!
//! - `i2c`: blocking I2C bus transport and register access
//! - `console`: human-readable trace lines over the console UART

pub mod console;
pub mod i2c;

pub use console::Console;
