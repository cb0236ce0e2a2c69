//! Numeric display registers

use desm0_hal::display::{SegmentDisplay, DISPLAY_REGISTERS};

use crate::regs::{Reg, DISPLAY_BASE};

/// Eight-digit numeric display
#[derive(Debug, Default)]
pub struct Display {
    _private: (),
}

impl Display {
    /// Handle to the display register block
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl SegmentDisplay for Display {
    fn write_register(&mut self, index: usize, value: u8) {
        if index < DISPLAY_REGISTERS {
            Reg::at(DISPLAY_BASE + index).write8(value);
        }
    }
}
