//! SysTick as the tick timer

use cortex_m::peripheral::syst::SystClkSource;
use cortex_m::peripheral::SYST;
use desm0_hal::TickTimer;

/// SysTick clocked from the core clock
pub struct SysTickTimer {
    syst: SYST,
}

impl SysTickTimer {
    /// Take ownership of SysTick; nothing runs until `start`
    pub fn new(syst: SYST) -> Self {
        Self { syst }
    }

    /// Give the peripheral back
    pub fn free(self) -> SYST {
        self.syst
    }
}

impl TickTimer for SysTickTimer {
    fn start(&mut self, reload: u32) {
        self.syst.disable_counter();
        self.syst.set_clock_source(SystClkSource::Core);
        self.syst.set_reload(reload);
        self.syst.clear_current();
        self.syst.enable_interrupt();
        self.syst.enable_counter();
    }

    fn enable_interrupt(&mut self) {
        self.syst.enable_interrupt();
    }

    fn disable_interrupt(&mut self) {
        self.syst.disable_interrupt();
    }

    fn current(&self) -> u32 {
        SYST::get_current()
    }
}
