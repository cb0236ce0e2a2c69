//! Accelerometer trait and axis selection

use core::fmt;

/// Measurement axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Pick the axis from the two rightmost switches
    ///
    /// - `00` → X
    /// - `01` → Y
    /// - `1x` → Z
    ///
    /// Each setting selects exactly one axis.
    pub fn from_switches(switches: u16) -> Self {
        match switches & 0b11 {
            0 => Axis::X,
            1 => Axis::Y,
            _ => Axis::Z,
        }
    }

    /// Console label
    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "X-Axis",
            Axis::Y => "Y-Axis",
            Axis::Z => "Z-Axis",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Three-axis accelerometer
///
/// Reads cannot fail: the bus has no error channel, so a misbehaving device
/// shows up as wrong numbers rather than an error.
pub trait Accelerometer {
    /// Read one axis as a signed raw value
    fn read_axis(&mut self, axis: Axis) -> i16;
}

impl<T: Accelerometer + ?Sized> Accelerometer for &mut T {
    fn read_axis(&mut self, axis: Axis) -> i16 {
        (**self).read_axis(axis)
    }
}
