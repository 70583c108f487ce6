//! Device drivers
//!
//! Drivers here are written against the platform traits only, so the same
//! code runs on the TM4C129x controller and on the host mocks.
//!
//! ## Modules
//!
//! - `imu`: IMU sensor drivers (BMI160)

pub mod imu;
