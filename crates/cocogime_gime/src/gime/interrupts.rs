use bitflags::bitflags;

use super::registers::{Init0, FIRQ_ENABLE, IRQ_ENABLE};
use super::{Gime, GimeEvent};

bitflags! {
    /// GIME interrupt sources, in $FF92/$FF93 bit order.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct InterruptSource: u8 {
        /// Programmable timer expired.
        const TMR = 0x20;
        /// Horizontal border (hsync).
        const HBORD = 0x10;
        /// Vertical border (start of bottom border).
        const VBORD = 0x08;
        /// Serial data input.
        const EI2 = 0x04;
        /// Keyboard.
        const EI1 = 0x02;
        /// Cartridge.
        const EI0 = 0x01;
    }
}

/// Pending masks and the last seen level of each interrupt input.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(super) struct InterruptState {
    pub(super) levels: u8,
    pub(super) irq: u8,
    pub(super) firq: u8,
}

impl Gime {
    /// Drive an interrupt input to `level`. A low-to-high transition is
    /// treated as an edge on every source in `source`.
    pub fn set_interrupt_line(&mut self, source: InterruptSource, level: bool) {
        let bits = source.bits();
        let old = self.interrupts.levels;
        if level {
            self.interrupts.levels |= bits;
        } else {
            self.interrupts.levels &= !bits;
        }
        let rising = !old & self.interrupts.levels;
        if rising != 0 {
            self.interrupt_rising_edge(InterruptSource::from_bits_retain(rising));
        }
    }

    /// Latch `source` into the IRQ and FIRQ pending masks if the
    /// respective output and source are enabled.
    pub fn interrupt_rising_edge(&mut self, source: InterruptSource) {
        let bits = source.bits();
        let init0 = self.init0();
        if init0.contains(Init0::IRQ_ENABLE) && self.registers[IRQ_ENABLE] & bits != 0 {
            self.change_irq(self.interrupts.irq | (self.registers[IRQ_ENABLE] & bits));
        }
        if init0.contains(Init0::FIRQ_ENABLE) && self.registers[FIRQ_ENABLE] & bits != 0 {
            self.change_firq(self.interrupts.firq | (self.registers[FIRQ_ENABLE] & bits));
        }
    }

    /// Pulse a source: rising then falling edge.
    pub(super) fn pulse_interrupt(&mut self, source: InterruptSource) {
        self.set_interrupt_line(source, true);
        self.set_interrupt_line(source, false);
    }

    pub(super) fn change_irq(&mut self, mask: u8) {
        let was_asserted = self.interrupts.irq != 0;
        self.interrupts.irq = mask;
        let asserted = mask != 0;
        if asserted != was_asserted {
            self.push_event(GimeEvent::IrqChanged(asserted));
        }
    }

    pub(super) fn change_firq(&mut self, mask: u8) {
        let was_asserted = self.interrupts.firq != 0;
        self.interrupts.firq = mask;
        let asserted = mask != 0;
        if asserted != was_asserted {
            self.push_event(GimeEvent::FirqChanged(asserted));
        }
    }

    /// Pending IRQ sources without acknowledging them.
    pub fn pending_irq(&self) -> InterruptSource {
        InterruptSource::from_bits_retain(self.interrupts.irq)
    }

    /// Pending FIRQ sources without acknowledging them.
    pub fn pending_firq(&self) -> InterruptSource {
        InterruptSource::from_bits_retain(self.interrupts.firq)
    }
}
