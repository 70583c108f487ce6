#![cfg_attr(not(any(test, feature = "mock")), no_std)]

//! tiva_bmi160 - BMI160 IMU bring-up for the EK-TM4C1294XL
//!
//! Blocking I2C master transport, BMI160 register driver and a UART console
//! reporter, layered on a small platform abstraction so everything above the
//! controller runs against host mocks in tests.

// Platform abstraction layer (controller traits, TM4C129x and mock backends)
pub mod platform;

// Device drivers using platform abstraction
pub mod devices;

// Logging macros
pub mod core;

// Bus transport, register access and console reporting
pub mod communication;
