//! Bit-banged SPI master
//!
//! Mode 0 (clock idles low, data sampled on the rising edge), MSB first.
//! Each bit cell is two equal half-bit waits:
//!
//! ```text
//!  MOSI  ==X=========X=========X==
//!  SCLK  __|    ‾‾‾‾|____    ‾‾‾‾|__
//!          drive  wait  rise/sample  wait  fall
//! ```
//!
//! The half-bit wait goes through [`DelayNs`] so it can be tuned per board
//! and replaced by a no-op in tests.

use desm0_hal::{SpiLines, SpiMaster, SpiTarget};
use embedded_hal::delay::DelayNs;

/// SPI master driving raw lines
pub struct BitBangSpi<L, D> {
    lines: L,
    delay: D,
    half_bit_ns: u32,
    selected: SpiTarget,
}

impl<L: SpiLines, D: DelayNs> BitBangSpi<L, D> {
    /// Take over the lines: clock low, every select released
    pub fn new(mut lines: L, delay: D, half_bit_ns: u32) -> Self {
        lines.set_sclk(false);
        lines.set_select(SpiTarget::None);
        Self {
            lines,
            delay,
            half_bit_ns,
            selected: SpiTarget::None,
        }
    }

    /// Currently selected target
    pub fn selected(&self) -> SpiTarget {
        self.selected
    }

    /// Half-bit wait in nanoseconds
    pub fn half_bit_ns(&self) -> u32 {
        self.half_bit_ns
    }

    /// Access the lines
    pub fn lines_mut(&mut self) -> &mut L {
        &mut self.lines
    }

    /// Give back lines and delay
    pub fn free(self) -> (L, D) {
        (self.lines, self.delay)
    }
}

impl<L: SpiLines, D: DelayNs> SpiMaster for BitBangSpi<L, D> {
    fn select(&mut self, target: SpiTarget) {
        if self.selected != SpiTarget::None && self.selected != target {
            self.lines.set_select(SpiTarget::None);
        }
        self.lines.set_select(target);
        self.selected = target;
    }

    fn transfer_byte(&mut self, tx: u8) -> u8 {
        let mut rx = 0u8;
        for bit in (0..8).rev() {
            self.lines.set_mosi(tx & (1 << bit) != 0);
            self.delay.delay_ns(self.half_bit_ns);
            self.lines.set_sclk(true);
            rx = (rx << 1) | u8::from(self.lines.miso());
            self.delay.delay_ns(self.half_bit_ns);
            self.lines.set_sclk(false);
        }
        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Peer that echoes MOSI back on MISO, optionally one bit late
    #[derive(Default)]
    struct LoopbackLines {
        one_bit_late: bool,
        mosi: bool,
        sclk: bool,
        latched: bool,
        miso: bool,
        selects: Vec<SpiTarget>,
        rising_edges: usize,
    }

    impl LoopbackLines {
        fn late() -> Self {
            Self {
                one_bit_late: true,
                ..Default::default()
            }
        }
    }

    impl SpiLines for LoopbackLines {
        fn set_mosi(&mut self, high: bool) {
            self.mosi = high;
        }

        fn set_sclk(&mut self, high: bool) {
            if high && !self.sclk {
                self.rising_edges += 1;
                self.latched = self.mosi;
            } else if !high && self.sclk {
                self.miso = self.latched;
            }
            self.sclk = high;
        }

        fn miso(&mut self) -> bool {
            if self.one_bit_late {
                self.miso
            } else {
                self.mosi
            }
        }

        fn set_select(&mut self, target: SpiTarget) {
            self.selects.push(target);
        }
    }

    #[derive(Default)]
    struct RecordingDelay {
        waits: Vec<u32>,
    }

    impl DelayNs for RecordingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.waits.push(ns);
        }
    }

    #[test]
    fn test_one_bit_latency_peer() {
        for tx in [0x00u8, 0xFF, 0xA5, 0x5A] {
            let mut spi = BitBangSpi::new(LoopbackLines::late(), RecordingDelay::default(), 2_000);
            assert_eq!(spi.transfer_byte(tx), tx >> 1, "tx {:#04X}", tx);
        }
    }

    #[test]
    fn test_zero_latency_echo() {
        let mut spi = BitBangSpi::new(LoopbackLines::default(), RecordingDelay::default(), 2_000);
        assert_eq!(spi.transfer_byte(0xA5), 0xA5);
        assert_eq!(spi.transfer_byte(0x3C), 0x3C);
    }

    #[test]
    fn test_equal_half_bit_waits() {
        let mut spi = BitBangSpi::new(LoopbackLines::default(), RecordingDelay::default(), 1_500);
        spi.transfer_byte(0x42);

        let (lines, delay) = spi.free();
        assert_eq!(delay.waits, vec![1_500; 16]);
        assert_eq!(lines.rising_edges, 8);
    }

    #[test]
    fn test_lines_idle_after_transfer() {
        let mut spi = BitBangSpi::new(LoopbackLines::default(), RecordingDelay::default(), 0);
        spi.transfer_byte(0b1000_0001);
        assert!(!spi.lines_mut().sclk);
        assert!(spi.lines_mut().mosi);

        spi.transfer_byte(0b0111_1110);
        assert!(!spi.lines_mut().sclk);
        assert!(!spi.lines_mut().mosi);
    }

    #[test]
    fn test_new_releases_selects() {
        let spi = BitBangSpi::new(LoopbackLines::default(), RecordingDelay::default(), 0);
        assert_eq!(spi.selected(), SpiTarget::None);
        let (lines, _) = spi.free();
        assert_eq!(lines.selects, [SpiTarget::None]);
        assert!(!lines.sclk);
    }

    #[test]
    fn test_switching_target_releases_first() {
        let mut spi = BitBangSpi::new(LoopbackLines::default(), RecordingDelay::default(), 0);
        spi.select(SpiTarget::Display);
        spi.select(SpiTarget::Accelerometer);
        spi.select(SpiTarget::Accelerometer);
        spi.select(SpiTarget::None);

        let (lines, _) = spi.free();
        assert_eq!(
            lines.selects,
            [
                SpiTarget::None,
                SpiTarget::Display,
                SpiTarget::None,
                SpiTarget::Accelerometer,
                SpiTarget::Accelerometer,
                SpiTarget::None,
                SpiTarget::None,
            ]
        );
    }

    proptest! {
        #[test]
        fn prop_one_bit_latency_any_byte(tx in any::<u8>()) {
            let mut spi = BitBangSpi::new(LoopbackLines::late(), RecordingDelay::default(), 0);
            prop_assert_eq!(spi.transfer_byte(tx), tx >> 1);
        }

        #[test]
        fn prop_latency_carries_across_bytes(a in any::<u8>(), b in any::<u8>()) {
            let mut spi = BitBangSpi::new(LoopbackLines::late(), RecordingDelay::default(), 0);
            spi.transfer_byte(a);
            prop_assert_eq!(spi.transfer_byte(b), (b >> 1) | ((a & 1) << 7));
        }
    }
}
