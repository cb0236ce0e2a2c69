//! Numeric display formatting
//!
//! The display block has eight digit registers, a per-digit hex-mode mask
//! and a per-digit enable mask. A signed reading uses the four rightmost
//! digits for the magnitude and the fifth for the sign; the rest stay
//! blank.

use desm0_hal::display::{SegmentDisplay, DISPLAY_REGISTERS};

/// Glyph code for a minus sign
pub const GLYPH_MINUS: u8 = 17;

/// Glyph code for a blank digit
pub const GLYPH_BLANK: u8 = 31;

/// Number of decimal digits shown
pub const DIGITS: usize = 4;

const SIGN_REGISTER: usize = 4;
const HEX_MODE_REGISTER: usize = 8;
const ENABLE_REGISTER: usize = 9;

/// Complete register image for one displayed value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitFrame {
    registers: [u8; DISPLAY_REGISTERS],
}

impl DigitFrame {
    /// Format a signed value
    ///
    /// Magnitudes above 9999 keep their low four digits.
    pub fn from_value(value: i16) -> Self {
        let mut registers = [GLYPH_BLANK; DISPLAY_REGISTERS];

        let mut magnitude = value.unsigned_abs();
        for digit in registers.iter_mut().take(DIGITS) {
            *digit = (magnitude % 10) as u8;
            magnitude /= 10;
        }

        if value < 0 {
            registers[SIGN_REGISTER] = GLYPH_MINUS;
        }
        registers[HEX_MODE_REGISTER] = 0xFF;
        registers[ENABLE_REGISTER] = 0xFF;

        Self { registers }
    }

    /// Raw register values, index 0 is the rightmost digit
    pub fn registers(&self) -> &[u8; DISPLAY_REGISTERS] {
        &self.registers
    }

    /// Decimal digits, least significant first
    pub fn digits(&self) -> [u8; DIGITS] {
        let mut digits = [0; DIGITS];
        digits.copy_from_slice(&self.registers[..DIGITS]);
        digits
    }

    /// Check whether the sign position shows a minus
    pub fn is_negative(&self) -> bool {
        self.registers[SIGN_REGISTER] == GLYPH_MINUS
    }

    /// Write the frame to a display
    pub fn show<D: SegmentDisplay>(&self, display: &mut D) {
        display.write_all(&self.registers);
    }
}
