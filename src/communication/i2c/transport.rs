//! Blocking I2C bus transport
//!
//! # Framing
//!
//! ```text
//! single read:   SA(R)  SINGLE_RECEIVE                          -> byte
//! single write:  SA(W)  DATA  SINGLE_SEND
//! burst read:    SA(R)  RECEIVE_START  RECEIVE_CONT*  RECEIVE_FINISH
//! burst write:   SA(W)  DATA SEND_START  (DATA SEND_CONT)*  DATA SEND_FINISH
//! ```
//!
//! A burst of exactly one byte uses the single framing: START and FINISH
//! are two separate data phases, so start/finish framing would clock a
//! second byte on the wire.

use super::BusError;
use crate::platform::traits::{Direction, I2cMasterCommand, I2cMasterInterface, PeripheralAddress};

/// Blocking transport over an I2C master controller
///
/// Owns no state beyond the controller. Every transaction is built and fully
/// consumed within one call.
///
/// # Type Parameters
///
/// * `M` - Controller implementing `I2cMasterInterface` (or `&mut` to one)
pub struct BusTransport<M> {
    master: M,
}

impl<M: I2cMasterInterface> BusTransport<M> {
    /// Create a transport; the controller must already be configured
    pub fn new(master: M) -> Self {
        Self { master }
    }

    /// Borrow the underlying controller
    pub fn master(&self) -> &M {
        &self.master
    }

    /// Release the controller
    pub fn release(self) -> M {
        self.master
    }

    /// Read one byte from `addr`
    ///
    /// Blocks until the controller reports completion; never returns if the
    /// peripheral does not acknowledge.
    pub fn read_single(&mut self, addr: PeripheralAddress) -> u8 {
        self.master.set_target(addr, Direction::Read);
        let byte = self.receive(I2cMasterCommand::SingleReceive);
        crate::log_trace!("I2C {:#x} read {:#x}", addr.get(), byte);
        byte
    }

    /// Write one byte to `addr`
    pub fn write_single(&mut self, addr: PeripheralAddress, byte: u8) {
        crate::log_trace!("I2C {:#x} write {:#x}", addr.get(), byte);
        self.master.set_target(addr, Direction::Write);
        self.send(I2cMasterCommand::SingleSend, byte);
    }

    /// Fill `buffer` with consecutive bytes from `addr`
    ///
    /// # Errors
    ///
    /// Returns `BusError::InvalidLength` for an empty buffer, before any bus
    /// activity.
    pub fn read_burst(&mut self, addr: PeripheralAddress, buffer: &mut [u8]) -> Result<(), BusError> {
        match buffer {
            [] => return Err(BusError::InvalidLength),
            [only] => *only = self.read_single(addr),
            [first, middle @ .., last] => {
                self.master.set_target(addr, Direction::Read);
                *first = self.receive(I2cMasterCommand::BurstReceiveStart);
                for slot in middle.iter_mut() {
                    *slot = self.receive(I2cMasterCommand::BurstReceiveCont);
                }
                *last = self.receive(I2cMasterCommand::BurstReceiveFinish);
            }
        }
        crate::log_trace!("I2C {:#x} burst read {} bytes", addr.get(), buffer.len());
        Ok(())
    }

    /// Transmit every byte of `data` to `addr`, in order
    ///
    /// # Errors
    ///
    /// Returns `BusError::InvalidLength` for empty `data`, before any bus
    /// activity.
    pub fn write_burst(&mut self, addr: PeripheralAddress, data: &[u8]) -> Result<(), BusError> {
        match data {
            [] => return Err(BusError::InvalidLength),
            [only] => self.write_single(addr, *only),
            [first, middle @ .., last] => {
                crate::log_trace!("I2C {:#x} burst write {} bytes", addr.get(), data.len());
                self.master.set_target(addr, Direction::Write);
                self.send(I2cMasterCommand::BurstSendStart, *first);
                for &byte in middle {
                    self.send(I2cMasterCommand::BurstSendCont, byte);
                }
                self.send(I2cMasterCommand::BurstSendFinish, *last);
            }
        }
        Ok(())
    }

    /// Issue a receive command and fetch the byte once it has landed
    fn receive(&mut self, command: I2cMasterCommand) -> u8 {
        self.master.control(command);
        self.wait_for_completion();
        self.master.data()
    }

    /// Load a byte and issue a send command
    fn send(&mut self, command: I2cMasterCommand, byte: u8) {
        self.master.put_data(byte);
        self.master.control(command);
        self.wait_for_completion();
    }

    /// Double-wait: busy must assert, then clear
    ///
    /// The first loop covers the cycles between issuing a command and the
    /// controller raising BUSY.
    fn wait_for_completion(&self) {
        while !self.master.is_busy() {
            core::hint::spin_loop();
        }
        while self.master.is_busy() {
            core::hint::spin_loop();
        }
    }
}
