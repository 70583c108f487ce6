//! TM4C129x I2C master implementation
//!
//! Drives I2C0 through its master registers:
//!
//! - `I2CMSA`: 7-bit target address and R/S bit
//! - `I2CMDR`: data register (transmit and receive)
//! - `I2CMCS`: command on write, status (BUSY in bit 0) on read
//! - `I2CMTPR`: SCL timer period
//!
//! No error or arbitration bits are consulted; a transfer that is never
//! acknowledged leaves the caller waiting on BUSY.
//!
//! # Example
//!
//! ```ignore
//! use tiva_bmi160::platform::tm4c129x::Tm4cI2cMaster;
//! use tiva_bmi160::platform::traits::{I2cConfig, SystemClock};
//!
//! let p = tm4c129x::Peripherals::take().unwrap();
//! let i2c = Tm4cI2cMaster::new(
//!     p.I2C0,
//!     &p.SYSCTL,
//!     &p.GPIO_PORTB_AHB,
//!     SystemClock::PIOSC,
//!     I2cConfig::default(),
//! )?;
//! ```

use super::{enable_gpio_port, pctl_value, GPIO_PORT_B};
use crate::platform::{
    traits::{Direction, I2cConfig, I2cMasterCommand, I2cMasterInterface, PeripheralAddress, SystemClock},
    Result,
};
use tm4c129x::{GPIO_PORTB_AHB, I2C0, SYSCTL};

/// SYSCTL clock gating bit for I2C module 0
const I2C_MODULE_0: u32 = 1 << 0;
/// PB2 / PB3 carry SCL / SDA
const PIN_SCL: u32 = 2;
const PIN_SDA: u32 = 3;
/// Port-control function number of I2C0 on port B
const PCTL_I2C0: u32 = 2;
/// I2CMCR master function enable
const MCR_MFE: u32 = 1 << 4;
/// I2CMCS status busy flag
const MCS_BUSY: u32 = 1 << 0;

/// TM4C129x I2C0 master
///
/// Owns the I2C0 peripheral. Construction performs the pin and clock setup
/// that the bus transport assumes has already happened.
pub struct Tm4cI2cMaster {
    i2c: I2C0,
}

impl Tm4cI2cMaster {
    /// Configure PB2/PB3 and I2C0 as a bus master
    ///
    /// # Arguments
    ///
    /// * `i2c` - The I2C0 peripheral
    /// * `sysctl` - System control block, for clock gating
    /// * `portb` - GPIO port B (AHB aperture), for pin muxing
    /// * `clock` - System clock feeding the I2C module
    /// * `config` - Bus frequency
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::I2c(I2cError::InvalidFrequency)` if the bus
    /// frequency cannot be derived from `clock`.
    pub fn new(
        i2c: I2C0,
        sysctl: &SYSCTL,
        portb: &GPIO_PORTB_AHB,
        clock: SystemClock,
        config: I2cConfig,
    ) -> Result<Self> {
        let tpr = config.timer_period(clock)?;

        enable_gpio_port(sysctl, GPIO_PORT_B);
        sysctl
            .rcgci2c
            .modify(|r, w| unsafe { w.bits(r.bits() | I2C_MODULE_0) });
        while sysctl.pri2c.read().bits() & I2C_MODULE_0 == 0 {
            core::hint::spin_loop();
        }

        let pins = (1 << PIN_SCL) | (1 << PIN_SDA);
        portb
            .afsel
            .modify(|r, w| unsafe { w.bits(r.bits() | pins) });
        portb
            .odr
            .modify(|r, w| unsafe { w.bits(r.bits() | (1 << PIN_SDA)) });
        portb
            .den
            .modify(|r, w| unsafe { w.bits(r.bits() | pins) });
        portb.pctl.modify(|r, w| {
            let value = pctl_value(r.bits(), PIN_SCL, PCTL_I2C0);
            unsafe { w.bits(pctl_value(value, PIN_SDA, PCTL_I2C0)) }
        });

        i2c.mcr.write(|w| unsafe { w.bits(MCR_MFE) });
        i2c.mtpr.write(|w| unsafe { w.bits(u32::from(tpr)) });

        crate::log_info!(
            "I2C0 master enabled: {} Hz from {} Hz (TPR={})",
            config.frequency,
            clock.hz(),
            tpr
        );

        Ok(Self { i2c })
    }

    /// Release the I2C0 peripheral
    pub fn free(self) -> I2C0 {
        self.i2c
    }
}

impl I2cMasterInterface for Tm4cI2cMaster {
    fn set_target(&mut self, addr: PeripheralAddress, direction: Direction) {
        let value = (u32::from(addr.get()) << 1) | u32::from(direction.rw_bit());
        self.i2c.msa.write(|w| unsafe { w.bits(value) });
    }

    fn put_data(&mut self, byte: u8) {
        self.i2c.mdr.write(|w| unsafe { w.bits(u32::from(byte)) });
    }

    fn data(&mut self) -> u8 {
        (self.i2c.mdr.read().bits() & 0xFF) as u8
    }

    fn control(&mut self, command: I2cMasterCommand) {
        self.i2c
            .mcs
            .write(|w| unsafe { w.bits(u32::from(command.bits())) });
    }

    fn is_busy(&self) -> bool {
        self.i2c.mcs.read().bits() & MCS_BUSY != 0
    }
}
