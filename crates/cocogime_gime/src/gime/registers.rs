use bitflags::bitflags;

use super::{FloatingBus, Gime, GimeEvent, MmuEntry};

/// Chip-relative offsets of the $FF9x registers.
pub(super) const INIT0: usize = 0x00;
pub(super) const INIT1: usize = 0x01;
pub(super) const IRQ_ENABLE: usize = 0x02;
pub(super) const FIRQ_ENABLE: usize = 0x03;
pub(super) const TIMER_MSB: usize = 0x04;
pub(super) const TIMER_LSB: usize = 0x05;
pub(super) const VIDEO_MODE: usize = 0x08;
pub(super) const VIDEO_RESOLUTION: usize = 0x09;
pub(super) const BORDER: usize = 0x0A;
pub(super) const MEMORY_EXTENSION: usize = 0x0B;
pub(super) const VERTICAL_SCROLL: usize = 0x0C;
pub(super) const VERTICAL_OFFSET_MSB: usize = 0x0D;
pub(super) const VERTICAL_OFFSET_LSB: usize = 0x0E;
pub(super) const HORIZONTAL_OFFSET: usize = 0x0F;

bitflags! {
    /// $FF90 initialisation register 0.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub(super) struct Init0: u8 {
        /// CoCo 1/2 compatible video.
        const COCO = 0x80;
        const MMU_ENABLE = 0x40;
        const IRQ_ENABLE = 0x20;
        const FIRQ_ENABLE = 0x10;
        /// $FE00-$FEFF comes from the MMU rather than being forced to RAM.
        const MC3 = 0x08;
        const MC2 = 0x04;
        const MC1 = 0x02;
        const MC0 = 0x01;
    }
}

bitflags! {
    /// Bits latched from the SAM set/clear window ($FFC0-$FFDF).
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub(super) struct SamState: u16 {
        const V0 = 0x0001;
        const V1 = 0x0002;
        const V2 = 0x0004;
        const F0 = 0x0008;
        const F1 = 0x0010;
        const F2 = 0x0020;
        const F3 = 0x0040;
        const F4 = 0x0080;
        const F5 = 0x0100;
        const F6 = 0x0200;
        const P1 = 0x0400;
        const R0 = 0x0800;
        const R1 = 0x1000;
        const M0 = 0x2000;
        const M1 = 0x4000;
        /// All-RAM mode.
        const TY = 0x8000;
    }
}

impl Gime {
    /// Register write over the $FF90-$FFDF window.
    ///
    /// `offset` is relative to $FF90. Offsets past the SAM window are
    /// ignored.
    pub fn write(&mut self, offset: u8, value: u8) {
        match offset {
            0x00..=0x0F => self.write_gime_register(offset as usize, value),
            0x10..=0x1F => self.write_mmu_register(offset as usize & 0x0F, value),
            0x20..=0x2F => self.write_palette_register(offset as usize & 0x0F, value),
            0x30..=0x4F => self.write_sam_register(offset),
            _ => log::trace!("GIME write to unmapped offset {offset:#04x} ignored"),
        }
    }

    /// Register read over the $FF90-$FFDF window.
    ///
    /// Unreadable positions and unused bits come from `bus`.
    pub fn read(&mut self, offset: u8, bus: &mut impl FloatingBus) -> u8 {
        match offset {
            0x00..=0x0F => self.read_gime_register(offset as usize, bus),
            0x10..=0x1F => {
                let entry = self.mmu[offset as usize & 0x0F];
                (entry.selector & 0x3F) | (bus.read_floating_bus() & 0xC0)
            }
            0x20..=0x2F => {
                let value = self.palette.current()[offset as usize & 0x0F];
                (value & 0x3F) | (bus.read_floating_bus() & 0xC0)
            }
            _ => bus.read_floating_bus(),
        }
    }

    pub(super) fn init0(&self) -> Init0 {
        Init0::from_bits_retain(self.registers[INIT0])
    }

    pub(super) fn sam(&self) -> SamState {
        SamState::from_bits_retain(self.sam_state)
    }

    fn read_gime_register(&mut self, offset: usize, bus: &mut impl FloatingBus) -> u8 {
        match offset {
            IRQ_ENABLE => {
                let pending = self.interrupts.irq;
                self.change_irq(0);
                pending
            }
            FIRQ_ENABLE => {
                let pending = self.interrupts.firq;
                self.change_firq(0);
                pending
            }
            _ => bus.read_floating_bus(),
        }
    }

    fn write_gime_register(&mut self, offset: usize, value: u8) {
        let old = self.registers[offset];
        self.registers[offset] = value;
        let xorval = old ^ value;
        log::trace!("$FF{:02X} <== ${value:02X}", 0x90 + offset);

        match offset {
            INIT0 => {
                // MMU enable, overlay and ROM map select.
                if xorval & 0x4B != 0 {
                    self.update_all_memory();
                }
            }
            INIT1 => {
                if xorval & 0x01 != 0 {
                    self.update_all_memory();
                }
                if xorval & 0x20 != 0 {
                    self.reset_timer();
                }
            }
            IRQ_ENABLE => {
                if xorval != 0 {
                    log::debug!("IRQ {} enabled", describe_sources(value));
                }
                self.change_irq(self.interrupts.irq & value);
            }
            FIRQ_ENABLE => {
                if xorval != 0 {
                    log::debug!("FIRQ {} enabled", describe_sources(value));
                }
                self.change_firq(self.interrupts.firq & value);
            }
            TIMER_MSB => self.reset_timer(),
            TIMER_LSB => {
                // Only the write that starts a stopped timer reloads it.
                if old == 0 && self.registers[TIMER_MSB] == 0 && value != 0 {
                    self.reset_timer();
                }
            }
            VIDEO_MODE => {
                if xorval & 0x20 != 0 {
                    self.composite_phase_invert = value & 0x20 != 0;
                    self.tables.rebuild_composite(self.composite_phase_invert);
                    self.video_changed = true;
                }
            }
            VIDEO_RESOLUTION => {
                if xorval & 0x60 != 0 {
                    self.update_geometry();
                }
            }
            _ => {}
        }
    }

    fn write_mmu_register(&mut self, index: usize, value: u8) {
        self.mmu[index] = MmuEntry::new(value);
        log::trace!("$FFA{index:X} <== ${value:02X}");
        let page = index & 0x07;
        self.update_memory(page);
        if page == 7 {
            // $FE00-$FEFF sits inside page 7.
            self.update_memory(8);
        }
    }

    fn write_palette_register(&mut self, index: usize, value: u8) {
        if self.palette.write(index, value & 0x3F) {
            self.video_changed = true;
        }
    }

    fn write_sam_register(&mut self, offset: u8) {
        self.push_event(GimeEvent::SamRegisterWrite { offset });

        let bit = 1u16 << ((offset - 0x30) >> 1);
        let old = self.sam_state;
        if offset & 0x01 != 0 {
            self.sam_state |= bit;
        } else {
            self.sam_state &= !bit;
        }

        let xorval = SamState::from_bits_retain(old ^ self.sam_state);
        if xorval.contains(SamState::TY) {
            self.update_all_memory();
        }
        if xorval.intersects(SamState::R1 | SamState::R0) {
            let sam = self.sam();
            let rate =
                (u8::from(sam.contains(SamState::R1)) << 1) | u8::from(sam.contains(SamState::R0));
            log::debug!("SAM CPU rate now {rate}");
            self.push_event(GimeEvent::CpuRateChanged { rate });
        }
    }

    /// Legacy video offset from the SAM F bits, in bytes.
    pub(super) fn sam_display_offset(&self) -> u32 {
        let f = (self.sam_state & 0x03F8) >> 3;
        u32::from(f) * 512
    }
}

fn describe_sources(mask: u8) -> String {
    const NAMES: [(u8, &str); 6] = [
        (0x20, "TMR"),
        (0x10, "HBORD"),
        (0x08, "VBORD"),
        (0x04, "EI2"),
        (0x02, "EI1"),
        (0x01, "EI0"),
    ];
    let names: Vec<&str> = NAMES
        .iter()
        .filter(|(bit, _)| mask & bit != 0)
        .map(|&(_, name)| name)
        .collect();
    format!("{{ {} }}", names.join(" "))
}
