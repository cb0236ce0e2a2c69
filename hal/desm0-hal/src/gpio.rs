//! GPIO port abstractions
//!
//! The SoC GPIO block exposes 16-bit ports rather than individually
//! configurable pins.

/// 16-bit output port (e.g. the LED bank)
///
/// Writes take effect immediately; there is no caching in between.
pub trait OutputPort {
    /// Write all 16 bits
    fn write(&mut self, value: u16);

    /// Read back the value currently driven
    fn read_back(&self) -> u16;

    /// Write the low byte only, leaving the high byte untouched
    fn write_low(&mut self, value: u8) {
        let current = self.read_back();
        self.write((current & 0xFF00) | u16::from(value));
    }

    /// Write the high byte only, leaving the low byte untouched
    fn write_high(&mut self, value: u8) {
        let current = self.read_back();
        self.write((current & 0x00FF) | (u16::from(value) << 8));
    }

    /// Invert the bits selected by `mask`
    fn toggle(&mut self, mask: u16) {
        let current = self.read_back();
        self.write(current ^ mask);
    }
}

/// 16-bit input port (e.g. the switch bank)
pub trait InputPort {
    /// Read the current state of all 16 inputs
    fn read(&self) -> u16;
}
