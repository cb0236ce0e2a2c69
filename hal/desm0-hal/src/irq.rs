//! Interrupt controller abstractions
//!
//! Only per-source enable/disable is needed: the line receiver's critical
//! section masks its own interrupt source instead of all interrupts.

/// Interrupt sources the firmware cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Interrupt {
    /// UART receive FIFO not empty
    UartRx,
}

/// Per-source interrupt enable/disable
///
/// Calls are not nested: one `disable` is undone by one `enable`.
pub trait InterruptControl {
    /// Unmask an interrupt source
    fn enable(&mut self, irq: Interrupt);

    /// Mask an interrupt source
    ///
    /// Once this returns, the handler for `irq` will not start until the
    /// source is enabled again. Events raised meanwhile stay pending.
    fn disable(&mut self, irq: Interrupt);
}

impl<T: InterruptControl + ?Sized> InterruptControl for &mut T {
    fn enable(&mut self, irq: Interrupt) {
        (**self).enable(irq)
    }

    fn disable(&mut self, irq: Interrupt) {
        (**self).disable(irq)
    }
}

/// Scoped mask of one interrupt source
///
/// Disables the source on creation and enables it again when dropped, so the
/// source cannot be left masked on any return path.
pub struct IrqDisabled<'a, C: InterruptControl> {
    ctrl: &'a mut C,
    irq: Interrupt,
}

impl<'a, C: InterruptControl> IrqDisabled<'a, C> {
    /// Mask `irq` until the returned guard is dropped
    pub fn new(ctrl: &'a mut C, irq: Interrupt) -> Self {
        ctrl.disable(irq);
        Self { ctrl, irq }
    }
}

impl<C: InterruptControl> Drop for IrqDisabled<'_, C> {
    fn drop(&mut self) {
        self.ctrl.enable(self.irq);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockNvic {
        enabled: bool,
        disables: u8,
        enables: u8,
    }

    impl InterruptControl for MockNvic {
        fn enable(&mut self, _irq: Interrupt) {
            self.enabled = true;
            self.enables += 1;
        }

        fn disable(&mut self, _irq: Interrupt) {
            self.enabled = false;
            self.disables += 1;
        }
    }

    #[test]
    fn test_guard_masks_for_scope() {
        let mut nvic = MockNvic {
            enabled: true,
            disables: 0,
            enables: 0,
        };

        {
            let guard = IrqDisabled::new(&mut nvic, Interrupt::UartRx);
            assert!(!guard.ctrl.enabled);
        }

        assert!(nvic.enabled);
        assert_eq!(nvic.disables, 1);
        assert_eq!(nvic.enables, 1);
    }
}
