//! Device traits
//!
//! These traits define the interface between the application logic
//! and device driver implementations.

pub mod accel;

pub use accel::{Accelerometer, Axis};
