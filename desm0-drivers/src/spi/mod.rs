//! SPI transports

pub mod bitbang;

pub use bitbang::BitBangSpi;
