//! Interrupt enable/disable through the Cortex-M NVIC

use cortex_m::interrupt::InterruptNumber;
use cortex_m::peripheral::NVIC;
use desm0_hal::{Interrupt, InterruptControl};

/// External interrupt lines of the SoC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum SocInterrupt {
    /// UART receive
    Uart = 1,
}

impl SocInterrupt {
    /// Match a raw IRQ number from the default handler
    pub fn from_irqn(irqn: i16) -> Option<Self> {
        match irqn {
            1 => Some(SocInterrupt::Uart),
            _ => None,
        }
    }
}

// SAFETY: discriminants are valid IRQ numbers of this SoC
unsafe impl InterruptNumber for SocInterrupt {
    fn number(self) -> u16 {
        self as u16
    }
}

impl From<Interrupt> for SocInterrupt {
    fn from(irq: Interrupt) -> Self {
        match irq {
            Interrupt::UartRx => SocInterrupt::Uart,
        }
    }
}

/// NVIC-backed interrupt control
#[derive(Debug, Default)]
pub struct Nvic {
    _private: (),
}

impl Nvic {
    /// Handle to the NVIC enable and mask registers
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl InterruptControl for Nvic {
    fn enable(&mut self, irq: Interrupt) {
        // SAFETY: the handlers behind these lines only share state through
        // atomics, so unmasking cannot break a mask-based critical section
        unsafe { NVIC::unmask(SocInterrupt::from(irq)) }
    }

    fn disable(&mut self, irq: Interrupt) {
        NVIC::mask(SocInterrupt::from(irq));
        // Make sure the mask has taken effect before touching shared state
        cortex_m::asm::dsb();
        cortex_m::asm::isb();
    }
}
