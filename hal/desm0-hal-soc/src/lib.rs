//! Register-level HAL for the DES Cortex-M0 SoC
//!
//! Implements the `desm0-hal` traits on the SoC memory map:
//!
//! | Base          | Block                                    |
//! |---------------|------------------------------------------|
//! | `0x5000_0000` | GPIO: LEDs, SPI lines, switches, buttons |
//! | `0x5100_0000` | UART                                     |
//! | `0x5200_0000` | Numeric display                          |
//! | `0xE000_E010` | SysTick (via `cortex-m`)                 |
//! | `0xE000_E100` | NVIC (via `cortex-m`)                    |
//!
//! Peripheral handles are zero-sized views of fixed registers. Every
//! register access is a single volatile load or store of the register's
//! natural width.

#![no_std]

pub mod delay;
pub mod display;
pub mod gpio;
pub mod nvic;
pub mod regs;
pub mod systick;
pub mod uart;

pub use delay::BusyDelay;
pub use display::Display;
pub use gpio::{AclLines, Button, Buttons, Leds, Switches};
pub use nvic::{Nvic, SocInterrupt};
pub use systick::SysTickTimer;
pub use uart::Uart;
