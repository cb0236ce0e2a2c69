//! LED bar graph for acceleration readings
//!
//! The 16 LEDs act as a centre-zero bar: positive readings grow from the
//! left end, zero and negative readings from the right end. Each LED stands
//! for 128 counts.

/// Raw counts represented by one lit LED
pub const COUNTS_PER_LED: u16 = 128;

/// Number of LEDs in the bank
pub const LED_COUNT: u32 = 16;

/// Map a signed reading to an LED pattern
pub fn bar_graph(value: i16) -> u16 {
    let lit = u32::from(value.unsigned_abs() / COUNTS_PER_LED).min(LED_COUNT);
    if lit == 0 {
        return 0;
    }

    if value > 0 {
        u16::MAX << (LED_COUNT - lit)
    } else {
        u16::MAX >> (LED_COUNT - lit)
    }
}
