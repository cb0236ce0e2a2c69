//! Configuration types
//!
//! Board configuration is written as TOML next to the firmware crate,
//! validated at build time and baked in as constants.

pub mod board;

pub use board::*;
