//! SPI bus abstractions
//!
//! Two layers: [`SpiLines`] is the raw wires (what a bit-banging master
//! drives), [`SpiMaster`] is a byte transport with chip-select (what a
//! register protocol talks to).

/// SPI peripherals on the board, one select line each
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiTarget {
    /// No peripheral selected; every select line released
    None,
    /// Numeric display
    Display,
    /// ADXL362 accelerometer
    Accelerometer,
}

/// Raw SPI wires
///
/// Select lines are active-low; implementations translate
/// [`SpiLines::set_select`] into the right line levels.
pub trait SpiLines {
    /// Drive the master-out line
    fn set_mosi(&mut self, high: bool);

    /// Drive the clock line
    fn set_sclk(&mut self, high: bool);

    /// Sample the master-in line
    fn miso(&mut self) -> bool;

    /// Assert the select line of `target` and release all others
    ///
    /// [`SpiTarget::None`] releases everything.
    fn set_select(&mut self, target: SpiTarget);
}

/// Byte transport with exclusive chip select
///
/// A transaction is everything between selecting a target and selecting
/// [`SpiTarget::None`]; callers must not start another in between.
pub trait SpiMaster {
    /// Select `target`, releasing any other target first
    fn select(&mut self, target: SpiTarget);

    /// Transfer one byte in each direction, blocking until done
    fn transfer_byte(&mut self, tx: u8) -> u8;
}

impl<T: SpiMaster + ?Sized> SpiMaster for &mut T {
    fn select(&mut self, target: SpiTarget) {
        (**self).select(target)
    }

    fn transfer_byte(&mut self, tx: u8) -> u8 {
        (**self).transfer_byte(tx)
    }
}
