use serde::{Deserialize, Serialize};

use super::interrupts::InterruptState;
use super::registers::VIDEO_MODE;
use super::timer::TimerState;
use super::{Gime, MmuEntry};

/// Serialisable chip state.
///
/// Only the active palette is kept; the rotation history of the frame
/// in progress is not.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GimeSnapshot {
    pub registers: [u8; 16],
    pub mmu: [MmuEntry; 16],
    pub sam_state: u16,
    pub ff22: u8,
    /// Last seen level of each interrupt input.
    pub interrupt_levels: u8,
    pub irq: u8,
    pub firq: u8,
    pub timer_value: u16,
    /// Ticks left until the clock-mode timer expires.
    pub timer_remaining: Option<u64>,
    pub is_blinking: bool,
    /// $FF90 bit 7 as latched by the last `new_frame`.
    pub legacy_video: bool,
    pub palette: [u8; 16],
    pub clock: u64,
}

impl Gime {
    pub fn snapshot(&self) -> GimeSnapshot {
        GimeSnapshot {
            registers: self.registers,
            mmu: self.mmu,
            sam_state: self.sam_state,
            ff22: self.ff22,
            interrupt_levels: self.interrupts.levels,
            irq: self.interrupts.irq,
            firq: self.interrupts.firq,
            timer_value: self.timer.value,
            timer_remaining: self.timer.deadline.map(|deadline| deadline - self.clock),
            is_blinking: self.is_blinking,
            legacy_video: self.legacy_video,
            palette: *self.palette.current(),
            clock: self.clock,
        }
    }

    /// Load a snapshot. The output lines take the restored levels
    /// without queueing notifications; the host restores its own CPU
    /// line state.
    pub fn restore(&mut self, snapshot: &GimeSnapshot) {
        self.registers = snapshot.registers;
        self.mmu = snapshot.mmu;
        self.sam_state = snapshot.sam_state;
        self.ff22 = snapshot.ff22;
        self.interrupts = InterruptState {
            levels: snapshot.interrupt_levels,
            irq: snapshot.irq,
            firq: snapshot.firq,
        };
        self.clock = snapshot.clock;
        self.timer = TimerState {
            value: snapshot.timer_value,
            deadline: snapshot.timer_remaining.map(|remaining| snapshot.clock + remaining),
        };
        self.is_blinking = snapshot.is_blinking;
        self.palette.restore(snapshot.palette);

        self.composite_phase_invert = self.registers[VIDEO_MODE] & 0x20 != 0;
        self.tables.rebuild_composite(self.composite_phase_invert);
        self.legacy_video = snapshot.legacy_video;
        self.update_geometry();
        self.update_all_memory();
        self.video_changed = true;
        log::debug!("GIME state restored at tick {}", self.clock);
    }
}
