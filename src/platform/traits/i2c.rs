//! I2C master controller trait
//!
//! This module defines the command-level I2C master interface that platform
//! implementations must provide. It mirrors how a TM4C129x-style controller is
//! driven: latch the target address, load or fetch the data register, issue a
//! master command, then watch the busy signal.

use super::SystemClock;
use crate::platform::{
    error::{I2cError, PlatformError},
    Result,
};

/// 7-bit peripheral address on the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "tm4c129x", derive(defmt::Format))]
pub struct PeripheralAddress(u8);

impl PeripheralAddress {
    /// Create an address from a compile-time constant
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a `const`) if `addr` does not fit
    /// in 7 bits. Use `TryFrom<u8>` for runtime values.
    pub const fn new(addr: u8) -> Self {
        assert!(addr <= 0x7F, "I2C peripheral address must fit in 7 bits");
        Self(addr)
    }

    /// Raw 7-bit address value
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for PeripheralAddress {
    type Error = PlatformError;

    fn try_from(addr: u8) -> Result<Self> {
        if addr <= 0x7F {
            Ok(Self(addr))
        } else {
            Err(PlatformError::I2c(I2cError::InvalidAddress))
        }
    }
}

/// Transfer direction latched with the target address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "tm4c129x", derive(defmt::Format))]
pub enum Direction {
    /// Master transmits to the peripheral
    Write,
    /// Master receives from the peripheral
    Read,
}

impl Direction {
    /// R/S bit as it appears in the low bit of the address register
    pub const fn rw_bit(self) -> u8 {
        match self {
            Direction::Write => 0,
            Direction::Read => 1,
        }
    }
}

/// Master control commands
///
/// `bits()` gives the `I2CMCS` write encoding (ACK, STOP, START, RUN bits).
/// Single send and single receive share an encoding; the direction latched
/// with the target address tells them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "tm4c129x", derive(defmt::Format))]
pub enum I2cMasterCommand {
    /// START, one byte out, STOP
    SingleSend,
    /// START, one byte in (NACKed), STOP
    SingleReceive,
    /// START, first byte out, bus held
    BurstSendStart,
    /// Next byte out, bus held
    BurstSendCont,
    /// Last byte out, STOP
    BurstSendFinish,
    /// START, first byte in (ACKed), bus held
    BurstReceiveStart,
    /// Next byte in (ACKed), bus held
    BurstReceiveCont,
    /// Last byte in (NACKed), STOP
    BurstReceiveFinish,
}

impl I2cMasterCommand {
    const RUN: u8 = 0x01;
    const START: u8 = 0x02;
    const STOP: u8 = 0x04;
    const ACK: u8 = 0x08;

    /// Value written to the master control/status register
    pub const fn bits(self) -> u8 {
        match self {
            Self::SingleSend | Self::SingleReceive => Self::START | Self::RUN | Self::STOP,
            Self::BurstSendStart => Self::START | Self::RUN,
            Self::BurstSendCont => Self::RUN,
            Self::BurstSendFinish | Self::BurstReceiveFinish => Self::RUN | Self::STOP,
            Self::BurstReceiveStart => Self::ACK | Self::START | Self::RUN,
            Self::BurstReceiveCont => Self::ACK | Self::RUN,
        }
    }

    /// Direction of the data phase this command clocks
    pub const fn direction(self) -> Direction {
        match self {
            Self::SingleSend | Self::BurstSendStart | Self::BurstSendCont | Self::BurstSendFinish => {
                Direction::Write
            }
            Self::SingleReceive
            | Self::BurstReceiveStart
            | Self::BurstReceiveCont
            | Self::BurstReceiveFinish => Direction::Read,
        }
    }
}

/// I2C configuration
#[derive(Debug, Clone, Copy)]
pub struct I2cConfig {
    /// Bus frequency in Hz (typically 100_000 or 400_000)
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self {
            frequency: 100_000, // 100 kHz standard mode
        }
    }
}

impl I2cConfig {
    /// 400 kHz fast mode
    pub const fn fast_mode() -> Self {
        Self { frequency: 400_000 }
    }

    /// Compute the master timer period for the given system clock
    ///
    /// SCL period is `2 * (1 + TPR) * (SCL_LP + SCL_HP)` system clocks with a
    /// fixed low/high split of 6/4, rounded so the bus never runs faster than
    /// requested.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::I2c(I2cError::InvalidFrequency)` if the
    /// frequency is zero or the period does not fit the 7-bit TPR field.
    pub fn timer_period(&self, clock: SystemClock) -> Result<u8> {
        if self.frequency == 0 {
            return Err(PlatformError::I2c(I2cError::InvalidFrequency));
        }

        let divisor = 2 * 10 * u64::from(self.frequency);
        let periods = (u64::from(clock.hz()) + divisor - 1) / divisor;

        match periods.checked_sub(1) {
            Some(tpr @ 1..=0x7F) => Ok(tpr as u8),
            _ => Err(PlatformError::I2c(I2cError::InvalidFrequency)),
        }
    }
}

/// Command-level I2C master interface
///
/// Platform implementations must provide this interface for the bus
/// transport. Every method maps onto one register access; none of them wait.
///
/// # Safety Invariants
///
/// - Pins, clock gating and the timer period are configured before use
/// - Only one owner per controller instance
/// - No concurrent access from multiple contexts (e.g. main loop and an ISR)
pub trait I2cMasterInterface {
    /// Latch the peripheral address and transfer direction
    fn set_target(&mut self, addr: PeripheralAddress, direction: Direction);

    /// Load the transmit data register
    fn put_data(&mut self, byte: u8);

    /// Fetch the receive data register
    fn data(&mut self) -> u8;

    /// Issue a master command
    fn control(&mut self, command: I2cMasterCommand);

    /// Controller busy signal
    fn is_busy(&self) -> bool;
}

impl<M: I2cMasterInterface + ?Sized> I2cMasterInterface for &mut M {
    fn set_target(&mut self, addr: PeripheralAddress, direction: Direction) {
        (**self).set_target(addr, direction)
    }

    fn put_data(&mut self, byte: u8) {
        (**self).put_data(byte)
    }

    fn data(&mut self) -> u8 {
        (**self).data()
    }

    fn control(&mut self, command: I2cMasterCommand) {
        (**self).control(command)
    }

    fn is_busy(&self) -> bool {
        (**self).is_busy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_encodings() {
        assert_eq!(I2cMasterCommand::SingleSend.bits(), 0x07);
        assert_eq!(I2cMasterCommand::SingleReceive.bits(), 0x07);
        assert_eq!(I2cMasterCommand::BurstSendStart.bits(), 0x03);
        assert_eq!(I2cMasterCommand::BurstSendCont.bits(), 0x01);
        assert_eq!(I2cMasterCommand::BurstSendFinish.bits(), 0x05);
        assert_eq!(I2cMasterCommand::BurstReceiveStart.bits(), 0x0B);
        assert_eq!(I2cMasterCommand::BurstReceiveCont.bits(), 0x09);
        assert_eq!(I2cMasterCommand::BurstReceiveFinish.bits(), 0x05);
    }

    #[test]
    fn test_command_direction() {
        assert_eq!(I2cMasterCommand::BurstSendCont.direction(), Direction::Write);
        assert_eq!(I2cMasterCommand::BurstReceiveCont.direction(), Direction::Read);
        assert_eq!(I2cMasterCommand::SingleReceive.direction(), Direction::Read);
    }

    #[test]
    fn test_peripheral_address_range() {
        assert_eq!(PeripheralAddress::try_from(0x69).unwrap().get(), 0x69);
        assert_eq!(PeripheralAddress::try_from(0x7F).unwrap().get(), 0x7F);
        assert_eq!(
            PeripheralAddress::try_from(0x80),
            Err(PlatformError::I2c(I2cError::InvalidAddress))
        );
    }

    #[test]
    fn test_timer_period_standard_mode() {
        let config = I2cConfig::default();
        assert_eq!(config.timer_period(SystemClock::PIOSC), Ok(7));
        assert_eq!(config.timer_period(SystemClock::new(120_000_000)), Ok(59));
    }

    #[test]
    fn test_timer_period_fast_mode() {
        let config = I2cConfig::fast_mode();
        assert_eq!(config.timer_period(SystemClock::PIOSC), Ok(1));
        assert_eq!(config.timer_period(SystemClock::new(120_000_000)), Ok(14));
    }

    #[test]
    fn test_timer_period_out_of_range() {
        let zero = I2cConfig { frequency: 0 };
        assert_eq!(
            zero.timer_period(SystemClock::PIOSC),
            Err(PlatformError::I2c(I2cError::InvalidFrequency))
        );

        // 1 MHz from 16 MHz would need TPR = 0
        let too_fast = I2cConfig { frequency: 1_000_000 };
        assert!(too_fast.timer_period(SystemClock::PIOSC).is_err());

        // 10 kHz from 120 MHz would need TPR = 599
        let too_slow = I2cConfig { frequency: 10_000 };
        assert!(too_slow.timer_period(SystemClock::new(120_000_000)).is_err());
    }
}
