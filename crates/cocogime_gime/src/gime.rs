use std::collections::VecDeque;

use crate::config::{Artifacting, GimeConfig};
use crate::{BLOCK_SIZE, SCREEN_HEIGHT};

mod font;
mod interrupts;
mod legacy;
mod mmu;
mod palette;
mod recorder;
mod registers;
mod render;
mod snapshot;
mod timer;

#[cfg(test)]
mod tests;

pub use interrupts::InterruptSource;
pub use mmu::{MmuEntry, PageMapping, PageTarget};
pub use palette::VideoOutput;
pub use recorder::FrameGeometry;
pub use snapshot::GimeSnapshot;

use interrupts::InterruptState;
use palette::{PaletteRotation, PaletteTables};
use recorder::ScanlineRecord;
use timer::TimerState;

/// Maximum number of undrained host notifications. When the host falls
/// behind, the oldest notification is dropped.
const EVENT_QUEUE_CAPACITY: usize = 64;

/// Source of the value left on the data bus by the previous cycle.
///
/// Unreadable register bits mirror this value.
pub trait FloatingBus {
    fn read_floating_bus(&mut self) -> u8;
}

impl<F: FnMut() -> u8> FloatingBus for F {
    fn read_floating_bus(&mut self) -> u8 {
        self()
    }
}

/// Notifications the host collects with [`Gime::take_events`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GimeEvent {
    /// The IRQ output changed level.
    IrqChanged(bool),
    /// The FIRQ output changed level.
    FirqChanged(bool),
    /// A write landed in the SAM window ($FFC0-$FFDF). `offset` is the
    /// chip-relative offset (0x30..=0x4F).
    SamRegisterWrite { offset: u8 },
    /// SAM R1/R0 changed; `rate` is the new two-bit CPU rate selector.
    CpuRateChanged { rate: u8 },
}

/// The GIME chip state.
pub struct Gime {
    config: GimeConfig,
    /// $FF90-$FF9F.
    registers: [u8; 16],
    /// $FFA0-$FFAF; entries 0-7 are task 0, 8-15 task 1.
    mmu: [MmuEntry; 16],
    /// Resolved mapping of pages 0-7 plus the $FE00 overlay page.
    pages: [PageMapping; 9],
    sam_state: u16,
    ff22: u8,
    ram: Vec<u8>,
    cart_rom: Option<Vec<u8>>,
    interrupts: InterruptState,
    timer: TimerState,
    /// Shared tick counter advanced by the host.
    clock: u64,
    is_blinking: bool,
    palette: PaletteRotation,
    tables: PaletteTables,
    composite_phase_invert: bool,
    legacy_video: bool,
    video_position: u32,
    line_in_row: u8,
    geometry: FrameGeometry,
    scanlines: Vec<ScanlineRecord>,
    video_changed: bool,
    displayed_output: Option<VideoOutput>,
    artifacting: Artifacting,
    events: VecDeque<GimeEvent>,
}

impl Gime {
    /// Build a chip in its power-on state.
    ///
    /// Panics if the configured RAM size is not a non-zero multiple of
    /// 8 KiB or the palette rotation has no slots.
    pub fn new(config: GimeConfig) -> Self {
        assert!(
            config.ram_size > 0 && config.ram_size % BLOCK_SIZE == 0,
            "RAM size must be a non-zero multiple of 8 KiB, got {:#x}",
            config.ram_size
        );
        assert!(config.palette_rotation_slots > 0);

        let mut gime = Self {
            ram: vec![0; config.ram_size],
            palette: PaletteRotation::new(config.palette_rotation_slots),
            artifacting: config.artifacting,
            config,
            registers: [0; 16],
            mmu: [MmuEntry::default(); 16],
            pages: [PageMapping::default(); 9],
            sam_state: 0,
            ff22: 0,
            cart_rom: None,
            interrupts: InterruptState::default(),
            timer: TimerState::default(),
            clock: 0,
            is_blinking: false,
            tables: PaletteTables::new(false),
            composite_phase_invert: false,
            legacy_video: false,
            video_position: 0,
            line_in_row: 0,
            geometry: FrameGeometry::default(),
            scanlines: vec![ScanlineRecord::default(); SCREEN_HEIGHT],
            video_changed: true,
            displayed_output: None,
            events: VecDeque::with_capacity(EVENT_QUEUE_CAPACITY),
        };
        gime.reset();
        gime
    }

    /// Chip reset: registers cleared, MMU entries restored to blocks
    /// $38-$3F in both tasks, palette and interrupts cleared.
    ///
    /// RAM contents, the cartridge ROM and the clock survive.
    pub fn reset(&mut self) {
        self.registers = [0; 16];
        for i in 0..8 {
            let entry = MmuEntry::new(0x38 + i as u8);
            self.mmu[i] = entry;
            self.mmu[i + 8] = entry;
        }
        self.palette.reset();
        self.sam_state = 0;
        self.interrupts = InterruptState::default();
        self.is_blinking = false;
        self.legacy_video = false;
        self.composite_phase_invert = false;
        self.tables = PaletteTables::new(false);
        self.displayed_output = None;
        self.video_changed = true;
        self.update_geometry();
        self.update_all_memory();
        self.reset_timer();
        log::debug!("GIME reset");
    }

    /// Drain the notifications queued since the previous call.
    pub fn take_events(&mut self) -> Vec<GimeEvent> {
        self.events.drain(..).collect()
    }

    pub fn irq_line(&self) -> bool {
        self.interrupts.irq != 0
    }

    pub fn firq_line(&self) -> bool {
        self.interrupts.firq != 0
    }

    /// Current frame geometry derived from $FF99 and the latched video
    /// mode.
    pub fn geometry(&self) -> FrameGeometry {
        self.geometry
    }

    /// PIA $FF22 output bits that select MC6847-compatible video modes.
    pub fn set_ff22(&mut self, value: u8) {
        self.ff22 = value;
    }

    pub fn ram(&self) -> &[u8] {
        &self.ram
    }

    pub fn ram_mut(&mut self) -> &mut [u8] {
        &mut self.ram
    }

    /// Chip clock in ticks.
    pub fn clock(&self) -> u64 {
        self.clock
    }

    pub fn is_blinking(&self) -> bool {
        self.is_blinking
    }

    fn push_event(&mut self, event: GimeEvent) {
        if self.events.len() == EVENT_QUEUE_CAPACITY {
            log::warn!("GIME event queue full, dropping {:?}", self.events.front());
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}
