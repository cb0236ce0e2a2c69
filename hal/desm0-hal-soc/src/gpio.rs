//! GPIO ports
//!
//! | Register | Bits    | Use                                      |
//! |----------|---------|------------------------------------------|
//! | Out0     | 15..0   | LEDs                                     |
//! | Out1     | 0       | accelerometer select (active low)        |
//! | Out1     | 1       | SCLK                                     |
//! | Out1     | 2       | MOSI                                     |
//! | Out1     | 3       | display select (active low)              |
//! | In0      | 15..0   | switches                                 |
//! | In1      | 15      | MISO                                     |
//! | In1      | 4..0    | buttons U, D, L, C, R                    |

use desm0_hal::{InputPort, OutputPort, SpiLines, SpiTarget};

use crate::regs::{Reg, GPIO_IN0, GPIO_IN1, GPIO_OUT0, GPIO_OUT1};

const OUT0: Reg = Reg::at(GPIO_OUT0);
const OUT1: Reg = Reg::at(GPIO_OUT1);
const IN0: Reg = Reg::at(GPIO_IN0);
const IN1: Reg = Reg::at(GPIO_IN1);

const ACL_SS: u16 = 1 << 0;
const ACL_SCLK: u16 = 1 << 1;
const ACL_MOSI: u16 = 1 << 2;
const DISP_SS: u16 = 1 << 3;
const MISO: u16 = 1 << 15;
const BUTTON_MASK: u16 = 0x1F;

/// LED bank
#[derive(Debug, Default)]
pub struct Leds {
    _private: (),
}

impl Leds {
    /// LED bank on the low output port
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl OutputPort for Leds {
    fn write(&mut self, value: u16) {
        OUT0.write16(value);
    }

    fn read_back(&self) -> u16 {
        OUT0.read16()
    }
}

/// Switch bank
#[derive(Debug, Default)]
pub struct Switches {
    _private: (),
}

impl Switches {
    /// Slide switches on the low input port
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl InputPort for Switches {
    fn read(&self) -> u16 {
        IN0.read16()
    }
}

/// Push buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Right,
    Centre,
    Left,
    Down,
    Up,
}

impl Button {
    /// Bit in the button port
    pub const fn mask(self) -> u16 {
        match self {
            Button::Right => 0x01,
            Button::Centre => 0x02,
            Button::Left => 0x04,
            Button::Down => 0x08,
            Button::Up => 0x10,
        }
    }
}

/// Push-button port
#[derive(Debug, Default)]
pub struct Buttons {
    _private: (),
}

impl Buttons {
    /// Buttons on the high input port
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Check whether `button` is held down
    pub fn is_pressed(&self, button: Button) -> bool {
        self.read() & button.mask() != 0
    }
}

impl InputPort for Buttons {
    fn read(&self) -> u16 {
        IN1.read16() & BUTTON_MASK
    }
}

/// Accelerometer and display SPI wires
#[derive(Debug, Default)]
pub struct AclLines {
    _private: (),
}

impl AclLines {
    /// SPI wires on the high output port
    pub const fn new() -> Self {
        Self { _private: () }
    }

    fn set_bit(mask: u16, high: bool) {
        OUT1.modify16(|v| if high { v | mask } else { v & !mask });
    }
}

impl SpiLines for AclLines {
    fn set_mosi(&mut self, high: bool) {
        Self::set_bit(ACL_MOSI, high);
    }

    fn set_sclk(&mut self, high: bool) {
        Self::set_bit(ACL_SCLK, high);
    }

    fn miso(&mut self) -> bool {
        IN1.read16() & MISO != 0
    }

    fn set_select(&mut self, target: SpiTarget) {
        let asserted = match target {
            SpiTarget::None => 0,
            SpiTarget::Display => DISP_SS,
            SpiTarget::Accelerometer => ACL_SS,
        };
        // Release everything, then pull the chosen line low
        OUT1.modify16(|v| (v | ACL_SS | DISP_SS) & !asserted);
    }
}
