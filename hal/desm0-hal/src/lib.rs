//! desm0 Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the tilt monitor
//! logic is written against. The register-level implementation for the
//! DES Cortex-M0 SoC lives in `desm0-hal-soc`; host tests implement the
//! same traits with mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  desm0-firmware / desm0-core / desm0-drivers │
//! └──────────────────────────────────────────────┘
//!                        │
//!                        ▼
//! ┌──────────────────────────────────────────────┐
//! │  desm0-hal (this crate - traits)             │
//! └──────────────────────────────────────────────┘
//!                        │
//!            ┌───────────┴───────────┐
//!            ▼                       ▼
//!    ┌───────────────┐       ┌───────────────┐
//!    │ desm0-hal-soc │       │  host mocks   │
//!    └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPort`], [`gpio::InputPort`] - Digital I/O
//! - [`uart::UartTx`], [`uart::UartRx`] - Byte-wise serial
//! - [`irq::InterruptControl`] - Per-source interrupt enable/disable
//! - [`tick::TickTimer`] - Periodic system tick
//! - [`spi::SpiLines`], [`spi::SpiMaster`] - SPI wires and byte transport
//! - [`display::SegmentDisplay`] - Numeric display registers

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod gpio;
pub mod irq;
pub mod spi;
pub mod tick;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use display::SegmentDisplay;
pub use gpio::{InputPort, OutputPort};
pub use irq::{Interrupt, InterruptControl, IrqDisabled};
pub use spi::{SpiLines, SpiMaster, SpiTarget};
pub use tick::{countdown_elapsed, TickTimer};
pub use uart::{UartRx, UartTx};
