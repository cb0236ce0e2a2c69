//! Simulated ADXL362 on raw SPI lines
//!
//! Behaves like the device at the wire level in mode 0: MOSI is sampled on
//! the rising clock edge, MISO changes on the falling edge. A transaction
//! starts when the accelerometer select is asserted and ends when it is
//! released.
//!
//! Register contents:
//!
//! | Range         | Behaviour                              |
//! |---------------|----------------------------------------|
//! | `0x00..=0x03` | ID registers, read-only reset values   |
//! | `0x08..=0x13` | Axis data, set with [`Adxl362Sim::set_axis`] |
//! | `0x1F`        | Soft reset on `0x52`                   |
//! | `0x20..=0x2E` | Control registers, read/write          |
//!
//! Everything else reads as zero and ignores writes.

use desm0_core::traits::Axis;
use desm0_hal::{SpiLines, SpiTarget};

use super::adxl362::{axis_register, reg, DEVICE_ID, PART_ID, READ_OPCODE, WRITE_OPCODE};

/// Size of the register map
pub const REGISTER_COUNT: usize = 0x40;

/// Value written to `SOFT_RESET` to reset the device
pub const SOFT_RESET_KEY: u8 = 0x52;

const MEMS_ID: u8 = 0x1D;
const REVISION: u8 = 0x01;

/// X axis value after reset
pub const DEFAULT_X: i16 = -345;

/// Y axis value after reset (level)
pub const DEFAULT_Y: i16 = 0;

/// Z axis value after reset
pub const DEFAULT_Z: i16 = 876;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    Read,
    Write,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Instruction,
    Address(Access),
    Data(Access),
    /// Unknown instruction; clock through until released
    Ignore,
}

/// Bit-level ADXL362 peer
pub struct Adxl362Sim {
    registers: [u8; REGISTER_COUNT],
    phase: Phase,
    address: u8,

    mosi: bool,
    sclk: bool,
    miso: bool,
    shift_in: u8,
    bits_in: u8,
    shift_out: u8,

    selects: usize,
    releases: usize,
}

impl Default for Adxl362Sim {
    fn default() -> Self {
        Self::new()
    }
}

impl Adxl362Sim {
    /// Device straight out of reset
    pub fn new() -> Self {
        let mut sim = Self {
            registers: [0; REGISTER_COUNT],
            phase: Phase::Idle,
            address: 0,
            mosi: false,
            sclk: false,
            miso: false,
            shift_in: 0,
            bits_in: 0,
            shift_out: 0,
            selects: 0,
            releases: 0,
        };
        sim.reset();
        sim
    }

    fn reset(&mut self) {
        self.registers = [0; REGISTER_COUNT];
        self.registers[usize::from(reg::DEVID_AD)] = DEVICE_ID;
        self.registers[usize::from(reg::DEVID_MST)] = MEMS_ID;
        self.registers[usize::from(reg::PARTID)] = PART_ID;
        self.registers[usize::from(reg::REVID)] = REVISION;
        self.set_axis(Axis::X, DEFAULT_X);
        self.set_axis(Axis::Y, DEFAULT_Y);
        self.set_axis(Axis::Z, DEFAULT_Z);
    }

    /// Set the value an axis reports
    pub fn set_axis(&mut self, axis: Axis, value: i16) {
        let low = usize::from(axis_register(axis));
        let [l, h] = value.to_le_bytes();
        self.registers[low] = l;
        self.registers[low + 1] = h;

        let msb = match axis {
            Axis::X => reg::XDATA,
            Axis::Y => reg::YDATA,
            Axis::Z => reg::ZDATA,
        };
        // 8-bit registers hold the top of the 12-bit sample
        self.registers[usize::from(msb)] = (value >> 4) as u8;
    }

    /// Register contents, bypassing the bus
    pub fn register(&self, address: u8) -> u8 {
        self.registers[usize::from(address) % REGISTER_COUNT]
    }

    /// Number of times the select line was asserted
    pub fn select_count(&self) -> usize {
        self.selects
    }

    /// Number of times the select line was released
    pub fn release_count(&self) -> usize {
        self.releases
    }

    /// Check whether a transaction is open
    pub fn is_selected(&self) -> bool {
        self.phase != Phase::Idle
    }

    fn is_writable(address: u8) -> bool {
        (0x20..=reg::SELF_TEST).contains(&address)
    }

    fn next_address(&mut self) {
        self.address = (self.address + 1) % REGISTER_COUNT as u8;
    }

    /// Handle a complete byte, returning the byte to shift out next
    fn on_byte(&mut self, byte: u8) -> u8 {
        match self.phase {
            Phase::Idle | Phase::Ignore => 0,
            Phase::Instruction => {
                self.phase = match byte {
                    READ_OPCODE => Phase::Address(Access::Read),
                    WRITE_OPCODE => Phase::Address(Access::Write),
                    _ => Phase::Ignore,
                };
                0
            }
            Phase::Address(access) => {
                self.address = byte % REGISTER_COUNT as u8;
                self.phase = Phase::Data(access);
                match access {
                    Access::Read => self.register(self.address),
                    Access::Write => 0,
                }
            }
            Phase::Data(Access::Read) => {
                self.next_address();
                self.register(self.address)
            }
            Phase::Data(Access::Write) => {
                if self.address == reg::SOFT_RESET {
                    if byte == SOFT_RESET_KEY {
                        self.reset();
                    }
                } else if Self::is_writable(self.address) {
                    self.registers[usize::from(self.address)] = byte;
                }
                self.next_address();
                0
            }
        }
    }
}

impl SpiLines for Adxl362Sim {
    fn set_mosi(&mut self, high: bool) {
        self.mosi = high;
    }

    fn set_sclk(&mut self, high: bool) {
        let rising = high && !self.sclk;
        let falling = !high && self.sclk;
        self.sclk = high;

        if !self.is_selected() {
            return;
        }

        if rising {
            self.shift_in = (self.shift_in << 1) | u8::from(self.mosi);
            self.bits_in += 1;
            if self.bits_in == 8 {
                let byte = self.shift_in;
                self.shift_in = 0;
                self.bits_in = 0;
                self.shift_out = self.on_byte(byte);
            }
        } else if falling {
            self.miso = self.shift_out & 0x80 != 0;
            self.shift_out <<= 1;
        }
    }

    fn miso(&mut self) -> bool {
        self.is_selected() && self.miso
    }

    fn set_select(&mut self, target: SpiTarget) {
        let active = target == SpiTarget::Accelerometer;
        if active && !self.is_selected() {
            self.selects += 1;
            self.phase = Phase::Instruction;
            self.shift_in = 0;
            self.bits_in = 0;
            self.shift_out = 0;
            self.miso = false;
        } else if !active && self.is_selected() {
            self.releases += 1;
            self.phase = Phase::Idle;
        }
    }
}
