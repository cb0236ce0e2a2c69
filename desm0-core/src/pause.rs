//! Refresh pause on a held button
//!
//! While the button is held the tick interrupt is off, so nothing but the
//! UART can wake the core. The button raises no interrupt of its own, which
//! means the main loop has to keep polling it instead of sleeping until the
//! release is seen.

use desm0_hal::TickTimer;

/// Change reported by [`RefreshPause::update`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PauseChange {
    /// Button went down; tick interrupt disabled
    Paused,
    /// Button came back up; tick interrupt enabled
    Resumed,
}

/// Edge-triggered pause state
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RefreshPause {
    paused: bool,
}

impl RefreshPause {
    /// Start running
    pub const fn new() -> Self {
        Self { paused: false }
    }

    /// Feed the current button level, switching the tick interrupt on an edge
    pub fn update<T: TickTimer>(&mut self, held: bool, tick: &mut T) -> Option<PauseChange> {
        if held == self.paused {
            return None;
        }
        self.paused = held;
        if held {
            tick.disable_interrupt();
            Some(PauseChange::Paused)
        } else {
            tick.enable_interrupt();
            Some(PauseChange::Resumed)
        }
    }

    /// Check whether refresh is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Check whether the loop may wait for an interrupt
    ///
    /// False while paused: the release would go unseen until the next byte.
    pub fn may_sleep(&self) -> bool {
        !self.paused
    }
}
