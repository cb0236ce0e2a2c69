//! UART
//!
//! Fixed baud rate and framing. Byte-wide data, status and control
//! registers, each in its own word.

use desm0_hal::{UartRx, UartTx};

use crate::regs::{uart_status, Reg, UART_CONTROL, UART_RXD, UART_STATUS, UART_TXD};

const RXD: Reg = Reg::at(UART_RXD);
const TXD: Reg = Reg::at(UART_TXD);
const STATUS: Reg = Reg::at(UART_STATUS);
const CONTROL: Reg = Reg::at(UART_CONTROL);

/// Handle to the UART
///
/// The receive interrupt handler and the main loop each hold one; they
/// touch disjoint registers except for the transmit FIFO, where bytes
/// from both simply interleave.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Uart {
    _private: (),
}

impl Uart {
    /// Handle to the single UART block
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Raise the interrupt while the receive FIFO is not empty, and only then
    pub fn enable_rx_interrupt(&mut self) {
        CONTROL.write8(uart_status::RX_NOT_EMPTY);
    }

    /// Raw status flags
    pub fn status(&self) -> u8 {
        STATUS.read8()
    }
}

impl UartTx for Uart {
    fn write_byte(&mut self, byte: u8) {
        TXD.write8(byte);
    }

    fn is_tx_full(&self) -> bool {
        self.status() & uart_status::TX_FULL != 0
    }
}

impl UartRx for Uart {
    fn read_byte(&mut self) -> u8 {
        RXD.read8()
    }

    fn has_data(&self) -> bool {
        self.status() & uart_status::RX_NOT_EMPTY != 0
    }
}
