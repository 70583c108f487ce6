//! Mock I2C master controller for testing

use crate::platform::traits::{Direction, I2cMasterCommand, I2cMasterInterface, PeripheralAddress};
use core::cell::Cell;
use std::collections::VecDeque;
use std::vec::Vec;

/// Controller access recorded by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum I2cEvent {
    /// Address register written
    SetTarget { addr: u8, direction: Direction },
    /// Transmit data register loaded
    PutData(u8),
    /// Master command issued
    Control(I2cMasterCommand),
    /// Receive data register fetched
    DataGet(u8),
}

/// Busy signal state after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BusyPhase {
    Idle,
    Pending { until_busy: u32, busy_left: u32 },
}

/// Mock I2C master
///
/// Records every controller access for test verification and serves
/// pre-programmed bytes to receive commands. After each command the busy
/// signal reads idle for `assert_delay` polls, busy for `busy_polls` polls,
/// then idle again, which counts as one completed transfer.
#[derive(Debug)]
pub struct MockI2cMaster {
    events: Vec<I2cEvent>,
    read_data: VecDeque<u8>,
    data_register: u8,
    assert_delay: u32,
    busy_polls: u32,
    phase: Cell<BusyPhase>,
    completions: Cell<usize>,
    reads_while_busy: usize,
}

impl MockI2cMaster {
    /// Create a new mock whose busy signal asserts on the first poll
    pub fn new() -> Self {
        Self::with_timing(0, 1)
    }

    /// Create a mock with explicit busy-signal timing
    ///
    /// `busy_polls` is clamped to at least one so the signal always asserts.
    pub fn with_timing(assert_delay: u32, busy_polls: u32) -> Self {
        Self {
            events: Vec::new(),
            read_data: VecDeque::new(),
            data_register: 0,
            assert_delay,
            busy_polls: busy_polls.max(1),
            phase: Cell::new(BusyPhase::Idle),
            completions: Cell::new(0),
            reads_while_busy: 0,
        }
    }

    /// Get event log (for test verification)
    pub fn events(&self) -> Vec<I2cEvent> {
        self.events.clone()
    }

    /// Commands issued, in order
    pub fn commands(&self) -> Vec<I2cMasterCommand> {
        self.events
            .iter()
            .filter_map(|event| match event {
                I2cEvent::Control(command) => Some(*command),
                _ => None,
            })
            .collect()
    }

    /// Bytes loaded into the transmit register, in order
    pub fn written_bytes(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|event| match event {
                I2cEvent::PutData(byte) => Some(*byte),
                _ => None,
            })
            .collect()
    }

    /// Clear event log and completion counter
    pub fn clear_events(&mut self) {
        self.events.clear();
        self.completions.set(0);
        self.reads_while_busy = 0;
    }

    /// Set data to return for receive commands
    ///
    /// When the queue runs dry the mock returns `0xFF`, an idle-high bus.
    pub fn set_read_data(&mut self, data: &[u8]) {
        self.read_data = data.iter().copied().collect();
    }

    /// Bytes still queued for receive commands
    pub fn pending_read_data(&self) -> usize {
        self.read_data.len()
    }

    /// Number of busy-then-idle transitions observed
    pub fn completions(&self) -> usize {
        self.completions.get()
    }

    /// Number of data register fetches made before the transfer completed
    pub fn reads_while_busy(&self) -> usize {
        self.reads_while_busy
    }
}

impl Default for MockI2cMaster {
    fn default() -> Self {
        Self::new()
    }
}

impl I2cMasterInterface for MockI2cMaster {
    fn set_target(&mut self, addr: PeripheralAddress, direction: Direction) {
        self.events.push(I2cEvent::SetTarget {
            addr: addr.get(),
            direction,
        });
    }

    fn put_data(&mut self, byte: u8) {
        self.events.push(I2cEvent::PutData(byte));
    }

    fn data(&mut self) -> u8 {
        if self.phase.get() != BusyPhase::Idle {
            self.reads_while_busy += 1;
        }
        self.events.push(I2cEvent::DataGet(self.data_register));
        self.data_register
    }

    fn control(&mut self, command: I2cMasterCommand) {
        self.events.push(I2cEvent::Control(command));
        if command.direction() == Direction::Read {
            self.data_register = self.read_data.pop_front().unwrap_or(0xFF);
        }
        self.phase.set(BusyPhase::Pending {
            until_busy: self.assert_delay,
            busy_left: self.busy_polls,
        });
    }

    fn is_busy(&self) -> bool {
        match self.phase.get() {
            BusyPhase::Idle => false,
            BusyPhase::Pending {
                until_busy,
                busy_left,
            } if until_busy > 0 => {
                self.phase.set(BusyPhase::Pending {
                    until_busy: until_busy - 1,
                    busy_left,
                });
                false
            }
            BusyPhase::Pending { busy_left, .. } if busy_left > 0 => {
                self.phase.set(BusyPhase::Pending {
                    until_busy: 0,
                    busy_left: busy_left - 1,
                });
                true
            }
            BusyPhase::Pending { .. } => {
                self.phase.set(BusyPhase::Idle);
                self.completions.set(self.completions.get() + 1);
                false
            }
        }
    }
}
