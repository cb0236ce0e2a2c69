//! Interrupt-driven line reception
//!
//! Bytes arrive one interrupt at a time and are collected into a
//! fixed-capacity buffer until a carriage return (or a full buffer) closes
//! the message. The main loop then drains the message with the receive
//! interrupt masked.
//!
//! ```text
//!   EMPTY ──byte──▶ FILLING ──CR / full──▶ READY ──drain──▶ EMPTY
//!                    ▲   │
//!                    └───┘ byte
//! ```

pub mod receiver;
pub mod transform;

pub use receiver::{Line, LineReceiver, TERMINATOR};
pub use transform::{invert_case, CASE_BIT};
