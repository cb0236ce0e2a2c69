//! Tilt monitor refresh
//!
//! One refresh reads the axis selected on the switches, shows it as a bar
//! on the LEDs and as a signed number on the display.

use core::fmt;

use desm0_hal::{InputPort, OutputPort, SegmentDisplay};

use crate::display::DigitFrame;
use crate::leds::bar_graph;
use crate::traits::{Accelerometer, Axis};

/// Result of one refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TiltReading {
    /// Axis that was read
    pub axis: Axis,
    /// Raw signed axis value
    pub raw: i16,
    /// LED pattern written
    pub leds: u16,
}

impl fmt::Display for TiltReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} (raw {})", self.axis, self.leds, self.raw)
    }
}

/// Tilt monitor over an accelerometer, LED bank, switch bank and display
pub struct TiltMonitor<A, L, S, D> {
    accel: A,
    leds: L,
    switches: S,
    display: D,
    last: Option<TiltReading>,
}

impl<A, L, S, D> TiltMonitor<A, L, S, D>
where
    A: Accelerometer,
    L: OutputPort,
    S: InputPort,
    D: SegmentDisplay,
{
    /// Create a monitor; nothing is read or written until the first refresh
    pub fn new(accel: A, leds: L, switches: S, display: D) -> Self {
        Self {
            accel,
            leds,
            switches,
            display,
            last: None,
        }
    }

    /// Read, then update LEDs and display
    pub fn refresh(&mut self) -> TiltReading {
        let axis = Axis::from_switches(self.switches.read());
        let raw = self.accel.read_axis(axis);
        let leds = bar_graph(raw);

        self.leds.write(leds);
        DigitFrame::from_value(raw).show(&mut self.display);

        let reading = TiltReading { axis, raw, leds };
        self.last = Some(reading);
        reading
    }

    /// Most recent reading
    pub fn last(&self) -> Option<TiltReading> {
        self.last
    }

    /// LED bank, for showing other status between refreshes
    pub fn leds_mut(&mut self) -> &mut L {
        &mut self.leds
    }

    /// Accelerometer, for configuration outside the refresh cycle
    pub fn accel_mut(&mut self) -> &mut A {
        &mut self.accel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use desm0_hal::display::DISPLAY_REGISTERS;

    struct FixedAccel {
        x: i16,
        y: i16,
        z: i16,
        reads: Vec<Axis>,
    }

    impl Accelerometer for FixedAccel {
        fn read_axis(&mut self, axis: Axis) -> i16 {
            self.reads.push(axis);
            match axis {
                Axis::X => self.x,
                Axis::Y => self.y,
                Axis::Z => self.z,
            }
        }
    }

    #[derive(Default)]
    struct MockLeds(u16);

    impl OutputPort for MockLeds {
        fn write(&mut self, value: u16) {
            self.0 = value;
        }

        fn read_back(&self) -> u16 {
            self.0
        }
    }

    struct MockSwitches(u16);

    impl InputPort for MockSwitches {
        fn read(&self) -> u16 {
            self.0
        }
    }

    #[derive(Default)]
    struct MockDisplay([u8; DISPLAY_REGISTERS]);

    impl SegmentDisplay for MockDisplay {
        fn write_register(&mut self, index: usize, value: u8) {
            self.0[index] = value;
        }
    }

    fn monitor(
        switches: u16,
    ) -> TiltMonitor<FixedAccel, MockLeds, MockSwitches, MockDisplay> {
        TiltMonitor::new(
            FixedAccel {
                x: -345,
                y: 58,
                z: 876,
                reads: Vec::new(),
            },
            MockLeds::default(),
            MockSwitches(switches),
            MockDisplay::default(),
        )
    }

    #[test]
    fn test_refresh_reads_selected_axis_once() {
        for (switches, axis) in [(0b00, Axis::X), (0b01, Axis::Y), (0b10, Axis::Z), (0b11, Axis::Z)] {
            let mut m = monitor(switches);
            let reading = m.refresh();
            assert_eq!(reading.axis, axis);
            assert_eq!(m.accel.reads, [axis]);
        }
    }

    #[test]
    fn test_refresh_drives_leds_and_display() {
        let mut m = monitor(0b10);
        let reading = m.refresh();

        assert_eq!(reading.raw, 876);
        assert_eq!(reading.leds, 0xFC00);
        assert_eq!(m.leds.0, 0xFC00);
        assert_eq!(&m.display.0, DigitFrame::from_value(876).registers());
        assert_eq!(m.last(), Some(reading));
    }

    #[test]
    fn test_reading_display_text() {
        let mut m = monitor(0b00);
        let reading = m.refresh();
        assert_eq!(format!("{}", reading), "X-Axis: 3 (raw -345)");
    }

    #[test]
    fn test_leds_mut_between_refreshes() {
        let mut m = monitor(0b00);
        m.refresh();
        m.leds_mut().write_low(b'A');
        assert_eq!(m.leds.0, 0x0041);
    }
}
