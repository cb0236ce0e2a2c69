//! Board configuration
//!
//! Clock, timing and peripheral start-up settings for one board.

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum accelerometer register writes applied at start-up
pub const MAX_INIT_WRITES: usize = 8;

/// Largest SysTick reload value (24-bit counter)
pub const SYSTICK_MAX_RELOAD: u32 = 0x00FF_FFFF;

/// Longest SPI half-bit time in nanoseconds (1 ms)
pub const MAX_HALF_BIT_NS: u32 = 1_000_000;

/// Highest accelerometer register address
pub const ACCEL_MAX_REGISTER: u8 = 0x3F;

/// One register write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RegisterWrite {
    /// Register address
    pub address: u8,
    /// Value to write
    pub value: u8,
}

impl RegisterWrite {
    /// Write `value` to `address`
    pub const fn new(address: u8, value: u8) -> Self {
        Self { address, value }
    }
}

/// Configuration error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Receive buffer needs room for at least one byte plus the NUL
    RxCapacityTooSmall,
    /// Core clock of zero
    ZeroClock,
    /// SPI half-bit time of zero
    ZeroHalfBit,
    /// SPI half-bit time above `MAX_HALF_BIT_NS`
    HalfBitTooLong,
    /// SysTick reload outside 1..=0xFF_FFFF
    SysTickReloadOutOfRange,
    /// Refresh interval of zero ticks
    ZeroRefreshInterval,
    /// Register address past the end of the register map
    RegisterOutOfRange(u8),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::RxCapacityTooSmall => write!(f, "rx_capacity must be at least 2"),
            ConfigError::ZeroClock => write!(f, "core_clock_hz must be non-zero"),
            ConfigError::ZeroHalfBit => write!(f, "spi_half_bit_ns must be non-zero"),
            ConfigError::HalfBitTooLong => {
                write!(f, "spi_half_bit_ns must be at most {}", MAX_HALF_BIT_NS)
            }
            ConfigError::SysTickReloadOutOfRange => {
                write!(f, "systick_reload must be in 1..={:#X}", SYSTICK_MAX_RELOAD)
            }
            ConfigError::ZeroRefreshInterval => write!(f, "refresh_ticks must be non-zero"),
            ConfigError::RegisterOutOfRange(addr) => {
                write!(f, "accelerometer register {:#04X} out of range", addr)
            }
        }
    }
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoardConfig {
    /// Line receive buffer size in bytes, terminator slot included
    pub rx_capacity: u16,
    /// Core clock in Hz
    pub core_clock_hz: u32,
    /// SPI half-bit time in nanoseconds
    pub spi_half_bit_ns: u32,
    /// SysTick reload value (core clocks per tick)
    pub systick_reload: u32,
    /// Ticks between tilt refreshes
    pub refresh_ticks: u32,
    /// Accelerometer register writes applied at start-up, in order
    pub accel_init: Vec<RegisterWrite, MAX_INIT_WRITES>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        let mut accel_init = Vec::new();
        // Measurement mode, then +/-2 g at 100 Hz
        let _ = accel_init.push(RegisterWrite::new(0x2D, 0x02));
        let _ = accel_init.push(RegisterWrite::new(0x2C, 0x01));

        Self {
            rx_capacity: 100,
            core_clock_hz: 50_000_000,
            spi_half_bit_ns: 2_000,
            systick_reload: 500_000,
            refresh_ticks: 40,
            accel_init,
        }
    }
}

impl BoardConfig {
    /// Check every field against its hardware limits
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rx_capacity < 2 {
            return Err(ConfigError::RxCapacityTooSmall);
        }
        if self.core_clock_hz == 0 {
            return Err(ConfigError::ZeroClock);
        }
        if self.spi_half_bit_ns == 0 {
            return Err(ConfigError::ZeroHalfBit);
        }
        if self.spi_half_bit_ns > MAX_HALF_BIT_NS {
            return Err(ConfigError::HalfBitTooLong);
        }
        if self.systick_reload == 0 || self.systick_reload > SYSTICK_MAX_RELOAD {
            return Err(ConfigError::SysTickReloadOutOfRange);
        }
        if self.refresh_ticks == 0 {
            return Err(ConfigError::ZeroRefreshInterval);
        }
        if let Some(write) = self
            .accel_init
            .iter()
            .find(|w| w.address > ACCEL_MAX_REGISTER)
        {
            return Err(ConfigError::RegisterOutOfRange(write.address));
        }
        Ok(())
    }

    /// Tick rate in millihertz
    pub fn tick_rate_mhz(&self) -> u64 {
        u64::from(self.core_clock_hz) * 1000 / u64::from(self.systick_reload.max(1))
    }

    /// Time between refreshes in milliseconds
    pub fn refresh_period_ms(&self) -> u64 {
        u64::from(self.systick_reload) * u64::from(self.refresh_ticks) * 1000
            / u64::from(self.core_clock_hz.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = BoardConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.accel_init.len(), 2);
        assert_eq!(config.accel_init[0], RegisterWrite::new(0x2D, 0x02));
    }

    #[test]
    fn test_default_timing() {
        let config = BoardConfig::default();
        // 50 MHz / 500k = 100 Hz ticks, 40 ticks per refresh
        assert_eq!(config.tick_rate_mhz(), 100_000);
        assert_eq!(config.refresh_period_ms(), 400);
    }

    #[test]
    fn test_rejects_small_rx_capacity() {
        let config = BoardConfig {
            rx_capacity: 1,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::RxCapacityTooSmall));
    }

    #[test]
    fn test_rejects_reload_out_of_range() {
        for reload in [0, SYSTICK_MAX_RELOAD + 1] {
            let config = BoardConfig {
                systick_reload: reload,
                ..Default::default()
            };
            assert_eq!(config.validate(), Err(ConfigError::SysTickReloadOutOfRange));
        }

        let max = BoardConfig {
            systick_reload: SYSTICK_MAX_RELOAD,
            ..Default::default()
        };
        assert_eq!(max.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_zero_fields() {
        let clock = BoardConfig {
            core_clock_hz: 0,
            ..Default::default()
        };
        assert_eq!(clock.validate(), Err(ConfigError::ZeroClock));

        let half_bit = BoardConfig {
            spi_half_bit_ns: 0,
            ..Default::default()
        };
        assert_eq!(half_bit.validate(), Err(ConfigError::ZeroHalfBit));

        let refresh = BoardConfig {
            refresh_ticks: 0,
            ..Default::default()
        };
        assert_eq!(refresh.validate(), Err(ConfigError::ZeroRefreshInterval));
    }

    #[test]
    fn test_rejects_long_half_bit() {
        let config = BoardConfig {
            spi_half_bit_ns: MAX_HALF_BIT_NS + 1,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::HalfBitTooLong));

        let max = BoardConfig {
            spi_half_bit_ns: MAX_HALF_BIT_NS,
            ..Default::default()
        };
        assert_eq!(max.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_bad_register() {
        let mut config = BoardConfig::default();
        config.accel_init.push(RegisterWrite::new(0x40, 0)).unwrap();
        assert_eq!(config.validate(), Err(ConfigError::RegisterOutOfRange(0x40)));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            format!("{}", ConfigError::RegisterOutOfRange(0x41)),
            "accelerometer register 0x41 out of range"
        );
        assert_eq!(
            format!("{}", ConfigError::HalfBitTooLong),
            "spi_half_bit_ns must be at most 1000000"
        );
    }
}
