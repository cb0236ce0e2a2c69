//! Periodic system tick abstraction

/// System tick timer (a 24-bit down-counter on Cortex-M0)
pub trait TickTimer {
    /// Start counting from `reload` with the overflow interrupt enabled
    fn start(&mut self, reload: u32);

    /// Enable the overflow interrupt without touching the counter
    fn enable_interrupt(&mut self);

    /// Disable the overflow interrupt; the counter keeps running
    fn disable_interrupt(&mut self);

    /// Current counter value (counts down)
    fn current(&self) -> u32;
}

/// Counts elapsed between two readings of a down-counter
///
/// Valid when at most one wrap happened in between.
pub fn countdown_elapsed(start: u32, end: u32, reload: u32) -> u32 {
    if start >= end {
        start - end
    } else {
        start + (reload - end) + 1
    }
}
