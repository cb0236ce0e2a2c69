//! Accelerometer drivers

pub mod adxl362;
pub mod sim;

pub use adxl362::Adxl362;
pub use sim::Adxl362Sim;
