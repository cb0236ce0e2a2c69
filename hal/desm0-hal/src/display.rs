//! Memory-mapped numeric display

/// Number of byte registers in the display block
pub const DISPLAY_REGISTERS: usize = 10;

/// Numeric (seven-segment style) display with byte-wide registers
///
/// Registers 0-7 select the glyph for each digit position, register 8
/// selects hex mode per digit and register 9 enables digits.
pub trait SegmentDisplay {
    /// Write one display register
    fn write_register(&mut self, index: usize, value: u8);

    /// Write all registers in order
    fn write_all(&mut self, values: &[u8; DISPLAY_REGISTERS]) {
        for (index, &value) in values.iter().enumerate() {
            self.write_register(index, value);
        }
    }
}
