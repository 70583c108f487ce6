//! System clock configuration
//!
//! The clock frequency is an explicit value handed to every routine that
//! derives bus or baud timing from it.

/// System clock frequency feeding the peripherals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "tm4c129x", derive(defmt::Format))]
pub struct SystemClock {
    hz: u32,
}

impl SystemClock {
    /// Precision internal oscillator, the clock source out of reset
    pub const PIOSC: Self = Self::new(16_000_000);

    /// Create a clock description from a frequency in Hz
    pub const fn new(hz: u32) -> Self {
        Self { hz }
    }

    /// Frequency in Hz
    pub const fn hz(&self) -> u32 {
        self.hz
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::PIOSC
    }
}
