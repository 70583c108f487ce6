//! IMU Drivers
//!
//! ## Available Drivers
//!
//! - `bmi160`: Bosch BMI160 6-axis IMU over I2C (any `I2cMasterInterface`)
//!
//! ## Usage
//!
//! ```ignore
//! use tiva_bmi160::devices::imu::Bmi160;
//! use tiva_bmi160::platform::mock::MockI2cMaster;
//!
//! let mut i2c = MockI2cMaster::new();
//! i2c.set_read_data(&[0xD1]);
//! let mut imu = Bmi160::new(&mut i2c);
//! assert_eq!(imu.identify(), 0xD1);
//! ```

pub mod bmi160;

pub use bmi160::Bmi160;
