//! Byte transforms applied while draining a message

/// Bit that distinguishes upper from lower case ASCII letters
pub const CASE_BIT: u8 = b'A' ^ b'a';

/// Swap the case of anything at or above `'A'`
///
/// This is deliberately rough: punctuation above `'Z'` (e.g. `'['`, `'_'`)
/// is flipped too.
pub fn invert_case(byte: u8) -> u8 {
    if byte >= b'A' {
        byte ^ CASE_BIT
    } else {
        byte
    }
}
