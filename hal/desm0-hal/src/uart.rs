//! UART serial communication abstractions
//!
//! The SoC UART is a fixed-format byte FIFO with status flags. Baud rate and
//! framing are set by the hardware and are not configurable.

/// UART transmitter
pub trait UartTx {
    /// Push one byte into the transmit FIFO
    ///
    /// Does not check for space. A byte written while the FIFO is full is
    /// lost; callers that care should check [`UartTx::is_tx_full`] first.
    fn write_byte(&mut self, byte: u8);

    /// Check whether the transmit FIFO is full
    fn is_tx_full(&self) -> bool;

    /// Write one byte, waiting for space in the FIFO first
    fn write_byte_blocking(&mut self, byte: u8) {
        while self.is_tx_full() {}
        self.write_byte(byte);
    }
}

/// UART receiver
pub trait UartRx {
    /// Pop one byte from the receive FIFO
    ///
    /// Only meaningful when [`UartRx::has_data`] is true; an empty FIFO
    /// returns whatever the data register holds.
    fn read_byte(&mut self) -> u8;

    /// Check whether at least one byte is waiting
    fn has_data(&self) -> bool;

    /// Wait for a byte and return it
    fn read_byte_blocking(&mut self) -> u8 {
        while !self.has_data() {}
        self.read_byte()
    }
}
