//! Register access for one addressed peripheral

use super::{BusError, BusTransport};
use crate::platform::traits::{I2cMasterInterface, PeripheralAddress};

/// Register-oriented view of a single peripheral
///
/// Writing a register address primes the peripheral's internal register
/// pointer; the following read (or the rest of a burst write) is applied at
/// that pointer and auto-increments from there.
pub struct RegisterBus<M> {
    transport: BusTransport<M>,
    address: PeripheralAddress,
}

impl<M: I2cMasterInterface> RegisterBus<M> {
    /// Bind a transport to a peripheral address
    pub fn new(transport: BusTransport<M>, address: PeripheralAddress) -> Self {
        Self { transport, address }
    }

    /// Peripheral address this view talks to
    pub fn address(&self) -> PeripheralAddress {
        self.address
    }

    /// Borrow the underlying transport
    pub fn transport(&self) -> &BusTransport<M> {
        &self.transport
    }

    /// Release the transport
    pub fn release(self) -> BusTransport<M> {
        self.transport
    }

    /// Point at `reg`, then read one byte
    pub fn read_register(&mut self, reg: u8) -> u8 {
        self.transport.write_single(self.address, reg);
        self.transport.read_single(self.address)
    }

    /// Point at `start`, then burst-read `buffer.len()` consecutive registers
    ///
    /// # Errors
    ///
    /// Returns `BusError::InvalidLength` for an empty buffer, before any bus
    /// activity (the register pointer is left untouched).
    pub fn read_registers(&mut self, start: u8, buffer: &mut [u8]) -> Result<(), BusError> {
        if buffer.is_empty() {
            return Err(BusError::InvalidLength);
        }
        self.transport.write_single(self.address, start);
        self.transport.read_burst(self.address, buffer)
    }

    /// Burst-write `data[0]` as the register address followed by its values
    ///
    /// # Errors
    ///
    /// Returns `BusError::InvalidLength` for empty `data`.
    pub fn write_registers(&mut self, data: &[u8]) -> Result<(), BusError> {
        self.transport.write_burst(self.address, data)
    }

    /// Write a single register value
    pub fn write_register(&mut self, reg: u8, value: u8) -> Result<(), BusError> {
        self.write_registers(&[reg, value])
    }
}
