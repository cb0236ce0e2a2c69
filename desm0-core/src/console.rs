//! Text console over the UART
//!
//! Terminal emulators expect CR LF line endings, so every `\n` written is
//! preceded by a `\r`. Input is echoed back as it is read.

use core::fmt;

use desm0_hal::{UartRx, UartTx};

/// Carriage return
pub const ASCII_CR: u8 = b'\r';

/// Line feed
pub const ASCII_LF: u8 = b'\n';

/// Blocking console on top of a UART
pub struct Console<U> {
    uart: U,
}

impl<U> Console<U> {
    /// Wrap a UART
    pub fn new(uart: U) -> Self {
        Self { uart }
    }

    /// Give the UART back
    pub fn release(self) -> U {
        self.uart
    }
}

impl<U: UartTx> Console<U> {
    /// Write one byte, expanding LF to CR LF
    pub fn put_byte(&mut self, byte: u8) {
        if byte == ASCII_LF {
            self.uart.write_byte_blocking(ASCII_CR);
        }
        self.uart.write_byte_blocking(byte);
    }

    /// Write raw bytes, expanding LF to CR LF
    pub fn put_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.put_byte(byte);
        }
    }
}

impl<U: UartTx + UartRx> Console<U> {
    /// Wait for one byte and echo it
    ///
    /// Enter arrives as CR; it is echoed as CR LF and returned as LF so
    /// callers see ordinary line endings. Backspace and delete are passed
    /// through untouched.
    pub fn read_byte_echo(&mut self) -> u8 {
        let byte = self.uart.read_byte_blocking();
        self.uart.write_byte_blocking(byte);
        if byte == ASCII_CR {
            self.uart.write_byte_blocking(ASCII_LF);
            ASCII_LF
        } else {
            byte
        }
    }
}

impl<U: UartTx> fmt::Write for Console<U> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.put_bytes(s.as_bytes());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;
    use std::collections::VecDeque;

    /// Mock UART with a TX FIFO that reports full for a few polls
    #[derive(Default)]
    struct MockUart {
        sent: Vec<u8>,
        full_polls: u8,
        incoming: VecDeque<u8>,
    }

    impl UartTx for MockUart {
        fn write_byte(&mut self, byte: u8) {
            self.sent.push(byte);
        }

        fn is_tx_full(&self) -> bool {
            self.full_polls > 0
        }

        fn write_byte_blocking(&mut self, byte: u8) {
            while self.is_tx_full() {
                self.full_polls -= 1;
            }
            self.write_byte(byte);
        }
    }

    impl UartRx for MockUart {
        fn read_byte(&mut self) -> u8 {
            self.incoming.pop_front().unwrap_or(0)
        }

        fn has_data(&self) -> bool {
            !self.incoming.is_empty()
        }
    }

    #[test]
    fn test_newline_becomes_crlf() {
        let mut console = Console::new(MockUart::default());
        writeln!(console, "X-Axis: {}", 3).unwrap();
        assert_eq!(console.release().sent, b"X-Axis: 3\r\n");
    }

    #[test]
    fn test_waits_for_fifo_space() {
        let mut console = Console::new(MockUart {
            full_polls: 3,
            ..Default::default()
        });
        console.put_byte(b'a');
        let uart = console.release();
        assert_eq!(uart.sent, b"a");
        assert_eq!(uart.full_polls, 0);
    }

    #[test]
    fn test_read_echoes_and_maps_enter() {
        let mut console = Console::new(MockUart {
            incoming: VecDeque::from(vec![b'k', b'\r']),
            ..Default::default()
        });

        assert_eq!(console.read_byte_echo(), b'k');
        assert_eq!(console.read_byte_echo(), b'\n');
        assert_eq!(console.release().sent, b"k\r\n");
    }
}
