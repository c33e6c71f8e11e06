use cocogime_gime::{FloatingBus, Gime, GimeEvent, SCREEN_HEIGHT};

/// NTSC field length including vertical blanking.
pub const LINES_PER_FRAME: usize = 263;
/// Chip clock ticks per scanline (3.58 MHz / 15.7 kHz).
pub const TICKS_PER_LINE: u64 = 228;

/// Notifications seen while driving frames.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// IRQs taken by the simulated CPU.
    pub irqs: u32,
    /// FIRQs taken by the simulated CPU.
    pub firqs: u32,
    pub sam_writes: u32,
    pub rate_changes: u32,
}

impl FrameStats {
    pub fn accumulate(&mut self, other: FrameStats) {
        self.irqs += other.irqs;
        self.firqs += other.firqs;
        self.sam_writes += other.sam_writes;
        self.rate_changes += other.rate_changes;
    }
}

/// Value the simulated CPU leaves on the data bus.
struct IdleBus;

impl FloatingBus for IdleBus {
    fn read_floating_bus(&mut self) -> u8 {
        0xFF
    }
}

/// Drives the raster hooks of a [`Gime`] the way the CoCo 3 video
/// timing does, one scanline at a time, and stands in for the CPU
/// side of the interrupt handshake.
pub struct Raster {
    gime: Gime,
    irq: bool,
    firq: bool,
    frames: u64,
}

impl Raster {
    pub fn new(gime: Gime) -> Self {
        Self {
            gime,
            irq: false,
            firq: false,
            frames: 0,
        }
    }

    pub fn gime(&self) -> &Gime {
        &self.gime
    }

    pub fn gime_mut(&mut self) -> &mut Gime {
        &mut self.gime
    }

    pub fn into_gime(self) -> Gime {
        self.gime
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one field. `on_line` is called before each scanline with the
    /// line number, so callers can reprogram the chip mid-frame.
    pub fn run_frame(&mut self, mut on_line: impl FnMut(&mut Gime, usize)) -> FrameStats {
        let mut stats = FrameStats::default();
        self.gime.new_frame();
        let geometry = self.gime.geometry();
        let top = geometry.top_border.map_or(0, usize::from);
        let body_end = match geometry.body {
            Some(body) => top + usize::from(body),
            // Unbounded LPF: the body runs to the end of the recorded area.
            None => SCREEN_HEIGHT,
        };
        log::trace!("frame {} body {top}..{body_end}", self.frames);

        for line in 0..LINES_PER_FRAME {
            on_line(&mut self.gime, line);
            if line == body_end {
                self.gime.enter_bottom_border();
            }

            self.gime.horizontal_sync_changed(false);
            if line < SCREEN_HEIGHT {
                if (top..body_end).contains(&line) {
                    self.gime.record_body_scanline(line);
                } else {
                    self.gime.record_border_scanline(line);
                }
            }
            self.gime.horizontal_sync_changed(true);
            self.gime.advance_clock(TICKS_PER_LINE);

            self.drain_events(&mut stats);
            self.service_interrupts(&mut stats);
        }

        self.frames += 1;
        stats
    }

    fn drain_events(&mut self, stats: &mut FrameStats) {
        for event in self.gime.take_events() {
            match event {
                GimeEvent::IrqChanged(level) => self.irq = level,
                GimeEvent::FirqChanged(level) => self.firq = level,
                GimeEvent::SamRegisterWrite { .. } => stats.sam_writes += 1,
                GimeEvent::CpuRateChanged { rate } => {
                    log::debug!("CPU rate {rate} at frame {}", self.frames);
                    stats.rate_changes += 1;
                }
            }
        }
    }

    /// Take any asserted interrupt the way a handler would: read the
    /// pending register, which also acknowledges it.
    fn service_interrupts(&mut self, stats: &mut FrameStats) {
        if self.firq {
            let sources = self.gime.read(0x03, &mut IdleBus);
            log::trace!("FIRQ sources {sources:#04x}");
            stats.firqs += 1;
        }
        if self.irq {
            let sources = self.gime.read(0x02, &mut IdleBus);
            log::trace!("IRQ sources {sources:#04x}");
            stats.irqs += 1;
        }
        self.drain_events(stats);
    }
}
