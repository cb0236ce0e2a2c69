//! ADXL362 accelerometer (SPI register interface)
//!
//! Every access is one framed transaction with the chip selected
//! throughout:
//!
//! - Read: `0x0B`, address, then one dummy byte per register; the device
//!   auto-increments the address
//! - Write: `0x0A`, address, value
//!
//! Axis data is 12-bit two's complement sign-extended to 16 bits, low byte
//! first.

use desm0_core::config::RegisterWrite;
use desm0_core::traits::{Accelerometer, Axis};
use desm0_hal::{SpiMaster, SpiTarget};

/// ADXL362 register addresses
pub mod reg {
    /// Analog Devices ID (0xAD)
    pub const DEVID_AD: u8 = 0x00;
    /// MEMS ID (0x1D)
    pub const DEVID_MST: u8 = 0x01;
    /// Part ID (0xF2)
    pub const PARTID: u8 = 0x02;
    /// Silicon revision
    pub const REVID: u8 = 0x03;
    /// X axis, 8 most significant bits
    pub const XDATA: u8 = 0x08;
    /// Y axis, 8 most significant bits
    pub const YDATA: u8 = 0x09;
    /// Z axis, 8 most significant bits
    pub const ZDATA: u8 = 0x0A;
    /// Status flags
    pub const STATUS: u8 = 0x0B;
    /// X axis low byte
    pub const XDATA_L: u8 = 0x0E;
    /// X axis high byte
    pub const XDATA_H: u8 = 0x0F;
    /// Y axis low byte
    pub const YDATA_L: u8 = 0x10;
    /// Y axis high byte
    pub const YDATA_H: u8 = 0x11;
    /// Z axis low byte
    pub const ZDATA_L: u8 = 0x12;
    /// Z axis high byte
    pub const ZDATA_H: u8 = 0x13;
    /// Soft reset (write 0x52)
    pub const SOFT_RESET: u8 = 0x1F;
    /// Range and output data rate
    pub const FILTER_CTL: u8 = 0x2C;
    /// Measurement mode
    pub const POWER_CTL: u8 = 0x2D;
    /// Self test
    pub const SELF_TEST: u8 = 0x2E;
}

/// Read instruction
pub const READ_OPCODE: u8 = 0x0B;

/// Write instruction
pub const WRITE_OPCODE: u8 = 0x0A;

/// Byte clocked out while reading
pub const DUMMY_BYTE: u8 = 0xFF;

/// Expected DEVID_AD value
pub const DEVICE_ID: u8 = 0xAD;

/// Expected PARTID value
pub const PART_ID: u8 = 0xF2;

/// Low register of an axis
pub fn axis_register(axis: Axis) -> u8 {
    match axis {
        Axis::X => reg::XDATA_L,
        Axis::Y => reg::YDATA_L,
        Axis::Z => reg::ZDATA_L,
    }
}

/// ADXL362 on an SPI master
pub struct Adxl362<S> {
    spi: S,
}

impl<S: SpiMaster> Adxl362<S> {
    /// Wrap an SPI master; the device is not touched until the first access
    pub fn new(spi: S) -> Self {
        Self { spi }
    }

    /// Give the SPI master back
    pub fn free(self) -> S {
        self.spi
    }

    /// Access the SPI master
    pub fn spi_mut(&mut self) -> &mut S {
        &mut self.spi
    }

    /// Read consecutive registers starting at `address` into `buf`
    pub fn read_into(&mut self, address: u8, buf: &mut [u8]) {
        self.spi.select(SpiTarget::Accelerometer);
        self.spi.transfer_byte(READ_OPCODE);
        self.spi.transfer_byte(address);
        for byte in buf.iter_mut() {
            *byte = self.spi.transfer_byte(DUMMY_BYTE);
        }
        self.spi.select(SpiTarget::None);

        #[cfg(feature = "defmt")]
        defmt::trace!("adxl362 read {=u8:#x}: {=[u8]:#x}", address, buf);
    }

    /// Read `N` consecutive registers starting at `address`
    pub fn read_registers<const N: usize>(&mut self, address: u8) -> [u8; N] {
        let mut buf = [0u8; N];
        self.read_into(address, &mut buf);
        buf
    }

    /// Read one register
    pub fn read_register(&mut self, address: u8) -> u8 {
        let [value] = self.read_registers::<1>(address);
        value
    }

    /// Write one register
    pub fn write_register(&mut self, address: u8, value: u8) {
        self.spi.select(SpiTarget::Accelerometer);
        self.spi.transfer_byte(WRITE_OPCODE);
        self.spi.transfer_byte(address);
        self.spi.transfer_byte(value);
        self.spi.select(SpiTarget::None);

        #[cfg(feature = "defmt")]
        defmt::trace!("adxl362 write {=u8:#x} = {=u8:#x}", address, value);
    }

    /// Read a 16-bit register pair, low byte at `address`
    pub fn read_i16(&mut self, address: u8) -> i16 {
        let [low, high] = self.read_registers::<2>(address);
        i16::from_le_bytes([low, high])
    }

    /// Apply register writes in order
    pub fn apply(&mut self, writes: &[RegisterWrite]) {
        for write in writes {
            self.write_register(write.address, write.value);
        }
    }

    /// Check the ID registers
    pub fn identify(&mut self) -> bool {
        let [devid, _mst, partid] = self.read_registers::<3>(reg::DEVID_AD);
        devid == DEVICE_ID && partid == PART_ID
    }
}

impl<S: SpiMaster> Accelerometer for Adxl362<S> {
    fn read_axis(&mut self, axis: Axis) -> i16 {
        self.read_i16(axis_register(axis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        Select(SpiTarget),
        Byte(u8),
    }

    /// SPI master that records traffic and replays canned responses
    #[derive(Default)]
    struct RecordingSpi {
        events: Vec<Event>,
        responses: VecDeque<u8>,
    }

    impl RecordingSpi {
        fn replying(bytes: &[u8]) -> Self {
            Self {
                responses: bytes.iter().copied().collect(),
                ..Default::default()
            }
        }

        fn selects(&self) -> Vec<SpiTarget> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    Event::Select(t) => Some(*t),
                    Event::Byte(_) => None,
                })
                .collect()
        }

        fn bytes(&self) -> Vec<u8> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    Event::Byte(b) => Some(*b),
                    Event::Select(_) => None,
                })
                .collect()
        }
    }

    impl SpiMaster for RecordingSpi {
        fn select(&mut self, target: SpiTarget) {
            self.events.push(Event::Select(target));
        }

        fn transfer_byte(&mut self, tx: u8) -> u8 {
            self.events.push(Event::Byte(tx));
            self.responses.pop_front().unwrap_or(0)
        }
    }

    #[test]
    fn test_read_frame() {
        // Opcode and address clock back junk before the data bytes
        let mut accel = Adxl362::new(RecordingSpi::replying(&[0, 0, 0x3A, 0x00]));
        assert_eq!(accel.read_registers::<2>(reg::XDATA_L), [0x3A, 0x00]);

        let spi = accel.free();
        assert_eq!(
            spi.events,
            [
                Event::Select(SpiTarget::Accelerometer),
                Event::Byte(READ_OPCODE),
                Event::Byte(0x0E),
                Event::Byte(DUMMY_BYTE),
                Event::Byte(DUMMY_BYTE),
                Event::Select(SpiTarget::None),
            ]
        );
    }

    #[test]
    fn test_write_frame() {
        let mut accel = Adxl362::new(RecordingSpi::default());
        accel.write_register(reg::POWER_CTL, 0x02);

        let spi = accel.free();
        assert_eq!(
            spi.events,
            [
                Event::Select(SpiTarget::Accelerometer),
                Event::Byte(WRITE_OPCODE),
                Event::Byte(0x2D),
                Event::Byte(0x02),
                Event::Select(SpiTarget::None),
            ]
        );
    }

    #[test]
    fn test_one_select_per_transaction() {
        let mut accel = Adxl362::new(RecordingSpi::default());
        accel.write_register(reg::FILTER_CTL, 0x01);
        accel.read_register(reg::PARTID);
        accel.read_axis(Axis::Z);
        accel.read_registers::<6>(reg::XDATA_L);

        let selects = accel.free().selects();
        assert_eq!(selects.len(), 8);
        for pair in selects.chunks(2) {
            assert_eq!(pair, [SpiTarget::Accelerometer, SpiTarget::None]);
        }
    }

    #[test]
    fn test_axis_value_assembly() {
        let mut accel = Adxl362::new(RecordingSpi::replying(&[0, 0, 0x3A, 0x00]));
        assert_eq!(accel.read_axis(Axis::X), 58);

        let mut accel = Adxl362::new(RecordingSpi::replying(&[0, 0, 0xC6, 0xFF]));
        assert_eq!(accel.read_axis(Axis::X), -58);
    }

    #[test]
    fn test_axis_registers() {
        for (axis, address) in [(Axis::X, 0x0E), (Axis::Y, 0x10), (Axis::Z, 0x12)] {
            let mut accel = Adxl362::new(RecordingSpi::default());
            accel.read_axis(axis);
            assert_eq!(accel.free().bytes(), [READ_OPCODE, address, DUMMY_BYTE, DUMMY_BYTE]);
        }
    }

    #[test]
    fn test_apply_in_order() {
        let mut accel = Adxl362::new(RecordingSpi::default());
        accel.apply(&[RegisterWrite::new(0x2D, 0x02), RegisterWrite::new(0x2C, 0x01)]);
        assert_eq!(
            accel.free().bytes(),
            [WRITE_OPCODE, 0x2D, 0x02, WRITE_OPCODE, 0x2C, 0x01]
        );
    }

    #[test]
    fn test_identify() {
        let mut accel = Adxl362::new(RecordingSpi::replying(&[0, 0, 0xAD, 0x1D, 0xF2]));
        assert!(accel.identify());

        let mut accel = Adxl362::new(RecordingSpi::replying(&[0, 0, 0xFF, 0xFF, 0xFF]));
        assert!(!accel.identify());
    }
}
