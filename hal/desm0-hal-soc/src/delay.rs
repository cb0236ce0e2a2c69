//! Busy-wait delay

use embedded_hal::delay::DelayNs;

/// Spin delay calibrated from the core clock
///
/// Counts cycles, so interrupts taken during the wait lengthen it.
#[derive(Debug, Clone, Copy)]
pub struct BusyDelay {
    core_clock_hz: u32,
}

impl BusyDelay {
    /// Delay for a core running at `core_clock_hz`
    pub const fn new(core_clock_hz: u32) -> Self {
        Self { core_clock_hz }
    }

    /// Core cycles for `ns` nanoseconds, at least one
    pub fn cycles(&self, ns: u32) -> u32 {
        let cycles = u64::from(ns) * u64::from(self.core_clock_hz) / 1_000_000_000;
        cycles.clamp(1, u64::from(u32::MAX)) as u32
    }
}

impl DelayNs for BusyDelay {
    fn delay_ns(&mut self, ns: u32) {
        cortex_m::asm::delay(self.cycles(ns));
    }
}
