//! Data-ready polling state machine
//!
//! ```text
//! NotReady --(status bit 7 clear)--> NotReady
//! NotReady --(status bit 7 set)----> Ready
//! ```
//!
//! `Ready` is terminal: it permits one sample read, and polling for the next
//! sample starts from a fresh (or reset) machine. There is no attempt bound
//! and no delay between polls.

use super::registers::DataStatus;

/// Polling state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "tm4c129x", derive(defmt::Format))]
pub enum PollState {
    /// Waiting for the data-ready bit
    NotReady,
    /// A fresh sample is available
    Ready,
}

/// Data-ready poller
#[derive(Debug, Clone, Copy)]
pub struct DataReadyPoll {
    state: PollState,
    polls: u32,
}

impl DataReadyPoll {
    /// Start in `NotReady` with no status reads counted
    pub const fn new() -> Self {
        Self {
            state: PollState::NotReady,
            polls: 0,
        }
    }

    /// Current state
    pub fn state(&self) -> PollState {
        self.state
    }

    /// Status reads fed to the machine
    pub fn polls(&self) -> u32 {
        self.polls
    }

    /// Feed one status byte
    ///
    /// Once `Ready`, further status bytes are ignored and not counted.
    pub fn observe(&mut self, status: u8) -> PollState {
        if self.state == PollState::NotReady {
            self.polls = self.polls.saturating_add(1);
            if DataStatus::from_raw(status).is_data_ready() {
                self.state = PollState::Ready;
            }
        }
        self.state
    }

    /// Return to `NotReady` to wait for the next sample
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for DataReadyPoll {
    fn default() -> Self {
        Self::new()
    }
}
