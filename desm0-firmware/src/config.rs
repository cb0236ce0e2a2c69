//! Board constants generated from board.toml

use desm0_core::config::RegisterWrite;

include!(concat!(env!("OUT_DIR"), "/board_config.rs"));

/// Length of the delay calibration run, in half-bit waits
pub const CALIBRATION_WAITS: u32 = 100;
