//! SoC memory map and raw register access

use core::ptr;

/// GPIO block
pub const GPIO_BASE: usize = 0x5000_0000;
/// LED output port
pub const GPIO_OUT0: usize = GPIO_BASE;
/// Accelerometer SPI output port
pub const GPIO_OUT1: usize = GPIO_BASE + 0x4;
/// Switch input port
pub const GPIO_IN0: usize = GPIO_BASE + 0x8;
/// MISO and button input port
pub const GPIO_IN1: usize = GPIO_BASE + 0xC;

/// UART block
pub const UART_BASE: usize = 0x5100_0000;
pub const UART_RXD: usize = UART_BASE;
pub const UART_TXD: usize = UART_BASE + 0x4;
pub const UART_STATUS: usize = UART_BASE + 0x8;
pub const UART_CONTROL: usize = UART_BASE + 0xC;

/// UART status bits
pub mod uart_status {
    pub const TX_FULL: u8 = 1 << 0;
    pub const TX_EMPTY: u8 = 1 << 1;
    pub const RX_FULL: u8 = 1 << 2;
    pub const RX_NOT_EMPTY: u8 = 1 << 3;
}

/// Numeric display block, one byte per register
pub const DISPLAY_BASE: usize = 0x5200_0000;

/// A register in the fixed SoC memory map
///
/// Constructed only from the constants above, inside this crate.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Reg(usize);

impl Reg {
    pub(crate) const fn at(addr: usize) -> Self {
        Self(addr)
    }

    pub(crate) fn read8(self) -> u8 {
        // SAFETY: fixed, aligned SoC register; byte loads have no side
        // effects beyond those the hardware defines for the register
        unsafe { ptr::read_volatile(self.0 as *const u8) }
    }

    pub(crate) fn write8(self, value: u8) {
        // SAFETY: fixed, aligned SoC register
        unsafe { ptr::write_volatile(self.0 as *mut u8, value) }
    }

    pub(crate) fn read16(self) -> u16 {
        // SAFETY: fixed, halfword-aligned SoC register
        unsafe { ptr::read_volatile(self.0 as *const u16) }
    }

    pub(crate) fn write16(self, value: u16) {
        // SAFETY: fixed, halfword-aligned SoC register
        unsafe { ptr::write_volatile(self.0 as *mut u16, value) }
    }

    /// Read-modify-write; not atomic with respect to interrupts
    pub(crate) fn modify16(self, f: impl FnOnce(u16) -> u16) {
        self.write16(f(self.read16()));
    }
}
