//! Device driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in desm0-hal and desm0-core:
//!
//! - Bit-banged SPI master over raw GPIO lines
//! - ADXL362 accelerometer register framing
//! - ADXL362 bit-level simulator for host tests

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod accel;
pub mod spi;
