//! BMI160 Register Definitions
//!
//! Based on the BMI160 datasheet (BST-BMI160-DS000), section 2.11
//! "Register Map".

#![allow(dead_code)]

use crate::platform::traits::PeripheralAddress;
use bitflags::bitflags;

// ============================================================================
// BMI160 I2C Address
// ============================================================================

/// BMI160 I2C address when SDO is pulled low
pub const BMI160_ADDR_SDO_LOW: PeripheralAddress = PeripheralAddress::new(0x68);

/// BMI160 I2C address when SDO is pulled high (breakout default)
pub const BMI160_ADDR: PeripheralAddress = PeripheralAddress::new(0x69);

// ============================================================================
// BMI160 Registers
// ============================================================================

/// Chip identification
pub const CHIP_ID: u8 = 0x00;

/// Error flags
pub const ERR_REG: u8 = 0x02;

/// Power mode of accelerometer, gyroscope and magnetometer interface
pub const PMU_STATUS: u8 = 0x03;

/// Start of the sensor data block (MAG, RHALL, GYR, ACC), 2 bytes per axis, LSB first
pub const DATA_START: u8 = 0x04;
pub const DATA_MAG_X_L: u8 = 0x04;
pub const DATA_RHALL_L: u8 = 0x0A;
pub const DATA_GYR_X_L: u8 = 0x0C;
pub const DATA_ACC_X_L: u8 = 0x12;

/// Sensor time, 24-bit LSB first
pub const SENSORTIME_0: u8 = 0x18;

/// Data ready and self-test status
pub const STATUS: u8 = 0x1B;

/// Interrupt status
pub const INT_STATUS_0: u8 = 0x1C;

/// Temperature, 16-bit LSB first
pub const TEMPERATURE_0: u8 = 0x20;

/// FIFO fill level and data
pub const FIFO_LENGTH_0: u8 = 0x22;
pub const FIFO_DATA: u8 = 0x24;

/// Accelerometer output data rate / bandwidth and range
pub const ACC_CONF: u8 = 0x40;
pub const ACC_RANGE: u8 = 0x41;

/// Gyroscope output data rate / bandwidth and range
pub const GYR_CONF: u8 = 0x42;
pub const GYR_RANGE: u8 = 0x43;

/// Command register
pub const CMD: u8 = 0x7E;

// ============================================================================
// Register Values
// ============================================================================

/// Expected CHIP_ID content
pub const CHIP_ID_VALUE: u8 = 0xD1;

/// Bytes per data block axis
pub const AXIS_BYTES: usize = 2;

/// Commands accepted by the CMD register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "tm4c129x", derive(defmt::Format))]
#[repr(u8)]
pub enum Command {
    /// Start fast offset compensation
    StartFoc = 0x03,
    /// Accelerometer suspend
    AccelSuspend = 0x10,
    /// Accelerometer normal power mode
    AccelNormal = 0x11,
    /// Accelerometer low power mode
    AccelLowPower = 0x12,
    /// Gyroscope suspend
    GyroSuspend = 0x14,
    /// Gyroscope normal power mode
    GyroNormal = 0x15,
    /// Gyroscope fast start-up
    GyroFastStartUp = 0x17,
    /// Clear FIFO content
    FifoFlush = 0xB0,
    /// Reset interrupt engine
    IntReset = 0xB1,
    /// Full soft reset, registers return to defaults
    SoftReset = 0xB6,
}

impl Command {
    /// Value written to `CMD`
    pub const fn value(self) -> u8 {
        self as u8
    }
}

/// Power-mode command sent by `Bmi160::initialize`
pub const INIT_COMMAND: Command = Command::GyroNormal;

/// Axes of the data block, in register order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "tm4c129x", derive(defmt::Format))]
#[repr(u8)]
pub enum Axis {
    MagX = 0,
    MagY = 1,
    MagZ = 2,
    Rhall = 3,
    GyroX = 4,
    GyroY = 5,
    GyroZ = 6,
    AccelX = 7,
    AccelY = 8,
    AccelZ = 9,
}

impl Axis {
    /// Axis offset within the data block, in 2-byte words
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Address of the axis' low byte
    pub const fn register(self) -> u8 {
        DATA_START + 2 * self.index()
    }

    /// Convert from a raw data block index
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::MagX),
            1 => Some(Self::MagY),
            2 => Some(Self::MagZ),
            3 => Some(Self::Rhall),
            4 => Some(Self::GyroX),
            5 => Some(Self::GyroY),
            6 => Some(Self::GyroZ),
            7 => Some(Self::AccelX),
            8 => Some(Self::AccelY),
            9 => Some(Self::AccelZ),
            _ => None,
        }
    }
}

bitflags! {
    /// STATUS register (0x1B)
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DataStatus: u8 {
        /// New accelerometer sample available
        const DRDY_ACC = 1 << 7;
        /// New gyroscope sample available
        const DRDY_GYR = 1 << 6;
        /// New magnetometer sample available
        const DRDY_MAG = 1 << 5;
        /// NVM write finished
        const NVM_RDY = 1 << 4;
        /// Fast offset compensation finished
        const FOC_RDY = 1 << 3;
        /// Magnetometer manual operation in progress
        const MAG_MAN_OP = 1 << 2;
        /// Gyroscope self-test passed
        const GYR_SELF_TEST_OK = 1 << 1;
    }
}

impl DataStatus {
    /// The flag the polling loop waits on
    pub const DATA_READY: Self = Self::DRDY_ACC;

    /// Decode a raw status byte, keeping undefined bits
    pub const fn from_raw(status: u8) -> Self {
        Self::from_bits_retain(status)
    }

    /// Whether a fresh sample can be read
    pub const fn is_data_ready(self) -> bool {
        self.contains(Self::DATA_READY)
    }
}
