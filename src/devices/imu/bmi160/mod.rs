//! BMI160 6-axis IMU driver
//!
//! Register map, data-ready polling and the blocking I2C driver.
//!
//! ## Usage
//!
//! ```ignore
//! use tiva_bmi160::devices::imu::bmi160::{Axis, Bmi160};
//!
//! let mut imu = Bmi160::new(i2c);
//! let id = imu.identify();
//! imu.initialize()?;
//! imu.wait_for_data_ready(|status| { console.report_status(status).ok(); });
//! let x = imu.read_axis(Axis::AccelX)?;
//! ```

mod driver;
pub mod poll;
pub mod registers;

pub use driver::Bmi160;
pub use poll::{DataReadyPoll, PollState};
pub use registers::{Axis, Command, DataStatus, BMI160_ADDR, BMI160_ADDR_SDO_LOW};
