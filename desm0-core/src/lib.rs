//! Board-agnostic core logic for the tilt monitor firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Interrupt-driven line receiver with a masked-interrupt handoff
//! - UART console (newline translation, echoed input)
//! - LED bar graph and numeric display formatting
//! - Tilt monitor refresh step and the button-held pause
//! - Device traits (accelerometer) and axis selection
//! - Board configuration types

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod console;
pub mod display;
pub mod leds;
pub mod line;
pub mod monitor;
pub mod pause;
pub mod traits;
