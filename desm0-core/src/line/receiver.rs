//! Single-producer/single-consumer line buffer
//!
//! The producer is the UART receive interrupt and the consumer is the main
//! loop. The producer never locks anything. The consumer masks the UART
//! receive interrupt for the few cycles it needs to copy the message out
//! and reset the buffer. On a single core that is sufficient: while the
//! source is masked the producer cannot run, and bytes arriving meanwhile
//! wait in the UART FIFO until the mask is lifted.
//!
//! All shared state lives in atomics, so one `LineReceiver` can sit in a
//! `static` and be reached from both contexts through `&self`. Only plain
//! loads and stores are used, which Cortex-M0 supports natively.

use desm0_hal::{Interrupt, InterruptControl, IrqDisabled, UartTx};
use heapless::Vec;
use portable_atomic::{AtomicBool, AtomicU8, AtomicUsize, Ordering};

/// Byte that closes a message (carriage return)
pub const TERMINATOR: u8 = b'\r';

/// A drained message, without its terminator
pub type Line<const C: usize> = Vec<u8, C>;

#[allow(clippy::declare_interior_mutable_const)]
const EMPTY_SLOT: AtomicU8 = AtomicU8::new(0);

/// Fixed-capacity receive buffer shared between the UART interrupt and the
/// main loop
///
/// `C` is the storage size including the slot reserved for the NUL
/// terminator, so a message holds at most `C - 2` bytes when closed by a
/// full buffer.
pub struct LineReceiver<const C: usize> {
    storage: [AtomicU8; C],
    /// Number of valid bytes; only the producer advances it
    length: AtomicUsize,
    /// Set by the producer when a message closes, cleared by `drain`
    ready: AtomicBool,
    /// Echoes written while the TX FIFO reported full
    echo_overruns: AtomicUsize,
}

impl<const C: usize> Default for LineReceiver<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const C: usize> LineReceiver<C> {
    const CAPACITY_OK: () = assert!(C >= 2, "line receiver needs a data slot and a terminator slot");

    /// Create an empty receiver
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::CAPACITY_OK;

        Self {
            storage: [EMPTY_SLOT; C],
            length: AtomicUsize::new(0),
            ready: AtomicBool::new(false),
            echo_overruns: AtomicUsize::new(0),
        }
    }

    /// Handle one received byte (interrupt context)
    ///
    /// Stores the byte, echoes it on `echo`, and closes the message when the
    /// byte is [`TERMINATOR`] or the buffer has reached `C - 1` bytes. A
    /// closed message has its last stored byte (the CR, or the final data
    /// byte when full) overwritten by a NUL.
    ///
    /// Must not be called re-entrantly. The UART interrupt is the only
    /// caller and it does not preempt itself.
    pub fn on_byte_received<T: UartTx>(&self, byte: u8, echo: &mut T) {
        let mut length = self.length.load(Ordering::Relaxed);
        self.store(length, byte);
        length += 1;

        // Echo is written unconditionally; a full FIFO drops it in hardware.
        if echo.is_tx_full() {
            let overruns = self.echo_overruns.load(Ordering::Relaxed);
            self.echo_overruns
                .store(overruns.wrapping_add(1), Ordering::Relaxed);
            #[cfg(feature = "defmt")]
            defmt::warn!("echo of {=u8:#x} pushed into a full TX FIFO", byte);
        }
        echo.write_byte(byte);

        if byte == TERMINATOR || length >= C - 1 {
            length -= 1;
            self.store(length, 0);
            self.length.store(length, Ordering::Release);
            self.ready.store(true, Ordering::Release);
        } else {
            self.length.store(length, Ordering::Release);
        }
    }

    /// Take the closed message (main loop)
    ///
    /// Returns `None` without touching the interrupt controller if no
    /// message is ready.
    pub fn drain<I: InterruptControl>(&self, irq: &mut I) -> Option<Line<C>> {
        self.drain_map(irq, |byte| byte)
    }

    /// Take the closed message, passing every byte through `transform`
    ///
    /// The copy and the reset run with [`Interrupt::UartRx`] masked; the
    /// mask is lifted on return. Keep `transform` cheap, it runs inside the
    /// critical section.
    pub fn drain_map<I, F>(&self, irq: &mut I, mut transform: F) -> Option<Line<C>>
    where
        I: InterruptControl,
        F: FnMut(u8) -> u8,
    {
        if !self.ready.load(Ordering::Acquire) {
            return None;
        }

        let _masked = IrqDisabled::new(irq, Interrupt::UartRx);

        let length = self.length.load(Ordering::Acquire);
        let mut line = Line::new();
        for slot in self.storage.iter().take(length) {
            // Cannot fail: length < C
            let _ = line.push(transform(slot.load(Ordering::Relaxed)));
        }

        self.length.store(0, Ordering::Release);
        self.ready.store(false, Ordering::Release);

        Some(line)
    }

    /// Check whether a closed message is waiting
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Number of bytes currently held
    pub fn len(&self) -> usize {
        self.length.load(Ordering::Acquire)
    }

    /// Check whether the buffer holds no bytes
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Most recently stored data byte, if any
    pub fn last_byte(&self) -> Option<u8> {
        let length = self.len();
        if length == 0 {
            return None;
        }
        self.storage
            .get(length - 1)
            .map(|slot| slot.load(Ordering::Relaxed))
    }

    /// Storage capacity, including the terminator slot
    pub const fn capacity(&self) -> usize {
        C
    }

    /// Number of echoes written while the TX FIFO was full
    pub fn echo_overruns(&self) -> usize {
        self.echo_overruns.load(Ordering::Relaxed)
    }

    fn store(&self, index: usize, byte: u8) {
        if let Some(slot) = self.storage.get(index) {
            slot.store(byte, Ordering::Relaxed);
        }
    }
}
