use cocogime_common::Color;
use serde::{Deserialize, Serialize};

/// Which monitor the frame is rendered for.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VideoOutput {
    /// Analog RGB monitor (CM-8).
    #[default]
    Rgb,
    /// Composite video; $FF98 bit 4 selects monochrome.
    Composite,
}

/// Composite colours by 6-bit palette value, measured at the normal
/// colour burst phase.
const COMPOSITE_PALETTE: [u32; 64] = [
    0x000000, 0x004C00, 0x004300, 0x0A3100, 0x2F1B00, 0x550100, 0x6C0000, 0x770006,
    0x71004B, 0x5C008B, 0x3B00B8, 0x1100CA, 0x001499, 0x002C62, 0x004011, 0x004B00,
    0x2D2D2D, 0x069800, 0x288F00, 0x537D00, 0x786700, 0xA04C00, 0xB63402, 0xC3224C,
    0xBD1693, 0xA814D5, 0x881CFE, 0x5E2CFF, 0x105EE9, 0x0076B2, 0x008B60, 0x009618,
    0x747474, 0x41D714, 0x62CF00, 0x8EBD00, 0xB4A700, 0xDD8C01, 0xF5733A, 0xFE6085,
    0xFD53CE, 0xE950FF, 0xC958FF, 0x9E67FF, 0x4E9AFF, 0x36B3F7, 0x26C9A3, 0x2BD558,
    0xFDFDFE, 0x88E85A, 0xA1E03F, 0xBED238, 0xD8C342, 0xF1B161, 0xFEA08D, 0xFE95BF,
    0xFD8EF1, 0xEF8EFF, 0xD895FF, 0xB9A1FF, 0x86C4FF, 0x78D4F2, 0x71E2B6, 0xFFFFFF,
];

/// Composite colours with the colour burst phase inverted ($FF98 bit 5).
const COMPOSITE_PALETTE_180: [u32; 64] = [
    0x000000, 0x5A0E5A, 0x4F0C4F, 0x360F40, 0x0D213C, 0x003334, 0x004141, 0x004943,
    0x005409, 0x005600, 0x114C00, 0x263700, 0x392500, 0x491D00, 0x4F0F3E, 0x590E59,
    0x2D2D2D, 0xB11FB7, 0x9932C1, 0x7248C5, 0x4A5BC2, 0x1A6EBA, 0x0077A9, 0x008C62,
    0x009619, 0x039700, 0x238F00, 0x467800, 0x9C4E00, 0xB23C00, 0xB92E59, 0xB6209E,
    0x747474, 0xE852FF, 0xCD60FF, 0xA677FF, 0x7D8AFF, 0x4D9EFF, 0x32B4ED, 0x29C7A2,
    0x2AD459, 0x39D223, 0x50C11A, 0x72A911, 0xCF831E, 0xF47733, 0xFF5F85, 0xFE54D1,
    0xFDFDFC, 0xEF8FFF, 0xD697FF, 0xB8A4FF, 0x9EB3FF, 0x86C6FF, 0x76D4E7, 0x74DDB3,
    0x77E683, 0x80E170, 0x92D56B, 0xACC466, 0xEAAC71, 0xFFA385, 0xFF95C1, 0xFFFFFF,
];

/// RGB monitor colour for a 6-bit palette value (`R1 G1 B1 R0 G0 B0`).
pub(super) fn rgb_color(color: u8) -> u32 {
    let color = u32::from(color);
    ((((color >> 4) & 2) | ((color >> 2) & 1)) * 0x55_0000)
        | ((((color >> 3) & 2) | ((color >> 1) & 1)) * 0x00_5500)
        | ((((color >> 2) & 2) | (color & 1)) * 0x00_0055)
}

/// The three 64-entry colour tables a palette value can be resolved
/// through.
pub(super) struct PaletteTables {
    rgb: [u32; 64],
    composite: [u32; 64],
    composite_mono: [u32; 64],
}

impl PaletteTables {
    pub(super) fn new(phase_invert: bool) -> Self {
        let mut tables = Self {
            rgb: std::array::from_fn(|color| rgb_color(color as u8)),
            composite: [0; 64],
            composite_mono: [0; 64],
        };
        tables.rebuild_composite(phase_invert);
        tables
    }

    pub(super) fn rebuild_composite(&mut self, phase_invert: bool) {
        self.composite = if phase_invert {
            COMPOSITE_PALETTE_180
        } else {
            COMPOSITE_PALETTE
        };
        for (mono, &color) in self.composite_mono.iter_mut().zip(self.composite.iter()) {
            *mono = Color::from_rgb24(color).to_monochrome().to_rgb24();
        }
    }

    pub(super) fn select(&self, output: VideoOutput, monochrome: bool) -> &[u32; 64] {
        match output {
            VideoOutput::Rgb => &self.rgb,
            VideoOutput::Composite if monochrome => &self.composite_mono,
            VideoOutput::Composite => &self.composite,
        }
    }
}

/// Ring of palette snapshots for one frame.
///
/// A palette write that follows a read of the current slot by the
/// scanline recorder moves to a fresh slot first, so lines already
/// recorded keep their colours until they are rendered.
pub(super) struct PaletteRotation {
    slots: Vec<[u8; 16]>,
    position: usize,
    used: bool,
}

impl PaletteRotation {
    pub(super) fn new(slots: usize) -> Self {
        Self {
            slots: vec![[0; 16]; slots],
            position: 0,
            used: false,
        }
    }

    pub(super) fn reset(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = [0; 16]);
        self.position = 0;
        self.used = false;
    }

    pub(super) fn current(&self) -> &[u8; 16] {
        &self.slots[self.position]
    }

    pub(super) fn position(&self) -> usize {
        self.position
    }

    pub(super) fn slot(&self, position: usize) -> &[u8; 16] {
        &self.slots[position]
    }

    /// Called by the recorder; returns the slot it should reference.
    pub(super) fn mark_used(&mut self) -> usize {
        self.used = true;
        self.position
    }

    /// Store `value` at `index`. Returns whether anything changed.
    pub(super) fn write(&mut self, index: usize, value: u8) -> bool {
        if self.slots[self.position][index] == value {
            return false;
        }
        if self.used {
            let next = (self.position + 1) % self.slots.len();
            self.slots[next] = self.slots[self.position];
            self.position = next;
            self.used = false;
        }
        self.slots[self.position][index] = value;
        true
    }

    /// Collapse the ring onto a single palette in slot 0.
    pub(super) fn restore(&mut self, palette: [u8; 16]) {
        self.slots[0] = palette;
        self.position = 0;
        self.used = false;
    }
}

/// Resolves palette slots to output pixels for one render pass,
/// memoising the last slot.
pub(super) struct PaletteResolver<'a> {
    table: &'a [u32; 64],
    rotation: &'a PaletteRotation,
    resolved: [u32; 16],
    current: Option<usize>,
}

impl<'a> PaletteResolver<'a> {
    pub(super) fn new(table: &'a [u32; 64], rotation: &'a PaletteRotation) -> Self {
        Self {
            table,
            rotation,
            resolved: [0; 16],
            current: None,
        }
    }

    #[inline]
    pub(super) fn lookup(&self, color: u8) -> u32 {
        self.table[usize::from(color & 0x3F)]
    }

    pub(super) fn palette(&mut self, slot: usize) -> &[u32; 16] {
        if self.current != Some(slot) {
            let palette = self.rotation.slot(slot);
            for (resolved, &color) in self.resolved.iter_mut().zip(palette.iter()) {
                *resolved = self.table[usize::from(color & 0x3F)];
            }
            self.current = Some(slot);
        }
        &self.resolved
    }
}
