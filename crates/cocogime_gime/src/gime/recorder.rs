use serde::{Deserialize, Serialize};

use super::legacy;
use super::registers::{
    Init0, BORDER, HORIZONTAL_OFFSET, MEMORY_EXTENSION, VERTICAL_OFFSET_LSB, VERTICAL_OFFSET_MSB,
    VERTICAL_SCROLL, VIDEO_MODE, VIDEO_RESOLUTION,
};
use super::Gime;

/// Widest fetch: 160 bytes per line.
pub(super) const MAX_SAMPLES: usize = 160;
/// Bytes per line for each $FF99 HRES setting.
const GRAPHICS_SAMPLES: [usize; 8] = [16, 20, 32, 40, 64, 80, 128, 160];
/// Row counter value marking a border-only record.
pub(super) const BORDER_LINE: u8 = 0xFF;
/// Mode byte recorded for samples without an attribute byte.
pub(super) const NO_ATTRIBUTE: u8 = 0x80;

/// Vertical layout of the frame as programmed through $FF99.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameGeometry {
    /// Top border lines; `None` when LPF selects the unbounded mode.
    pub top_border: Option<u16>,
    /// Body lines; `None` when LPF selects the unbounded mode.
    pub body: Option<u16>,
    /// $FF99 bit 3 outside of legacy video.
    pub wide: bool,
}

impl Default for FrameGeometry {
    fn default() -> Self {
        Self {
            top_border: Some(25),
            body: Some(192),
            wide: false,
        }
    }
}

/// How a body line is fetched and later expanded.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(super) enum VideoMode {
    /// MC6847 compatible modes selected by $FF22.
    Legacy,
    /// GIME bitmap graphics.
    Graphics,
    /// GIME text, one byte per character.
    #[default]
    Text,
    /// GIME text with an attribute byte per character.
    TextAttr,
}

struct FetchContext<'a> {
    ram: &'a [u8],
    ff22: u8,
    blinking: bool,
}

impl FetchContext<'_> {
    fn byte(&self, address: u32) -> u8 {
        self.ram[address as usize % self.ram.len()]
    }
}

struct Sample {
    data: u8,
    mode: u8,
    /// Bytes consumed.
    stride: u32,
}

type FetchFn = fn(&FetchContext<'_>, u32) -> Sample;

fn fetch_mc6847(ctx: &FetchContext<'_>, address: u32) -> Sample {
    let data = ctx.byte(address);
    Sample {
        data,
        mode: legacy::sample_mode(ctx.ff22, data),
        stride: 1,
    }
}

fn fetch_without_attributes(ctx: &FetchContext<'_>, address: u32) -> Sample {
    Sample {
        data: ctx.byte(address),
        mode: NO_ATTRIBUTE,
        stride: 1,
    }
}

fn fetch_with_attributes(ctx: &FetchContext<'_>, address: u32) -> Sample {
    let mut data = ctx.byte(address);
    let mut attribute = ctx.byte(address.wrapping_add(1));
    if attribute & 0x80 != 0 {
        // Blinking characters turn into blank cells while the flip-flop is set.
        if ctx.blinking {
            data = 0x20;
            attribute &= !0x40;
        }
        attribute &= !0x80;
    }
    Sample {
        data,
        mode: attribute,
        stride: 2,
    }
}

impl VideoMode {
    fn select(legacy_video: bool, ff98: u8, ff99: u8) -> Self {
        if legacy_video {
            VideoMode::Legacy
        } else if ff98 & 0x80 != 0 {
            VideoMode::Graphics
        } else if ff99 & 0x01 != 0 {
            VideoMode::TextAttr
        } else {
            VideoMode::Text
        }
    }

    fn fetch_strategy(self) -> FetchFn {
        match self {
            VideoMode::Legacy => fetch_mc6847,
            VideoMode::Graphics | VideoMode::Text => fetch_without_attributes,
            VideoMode::TextAttr => fetch_with_attributes,
        }
    }

    /// Samples per line for this mode.
    pub(super) fn sample_count(self, ff22: u8, ff99: u8) -> usize {
        match self {
            VideoMode::Legacy => legacy::samples_per_line(ff22),
            VideoMode::Graphics => GRAPHICS_SAMPLES[usize::from((ff99 >> 2) & 0x07)],
            VideoMode::Text | VideoMode::TextAttr => match ff99 & 0x14 {
                0x00 => 32,
                0x04 => 40,
                0x10 => 64,
                0x14 => 80,
                _ => unreachable!(),
            },
        }
    }
}

/// Everything the renderer needs to redraw one scanline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct ScanlineRecord {
    /// 6-bit border colour.
    pub(super) border: u8,
    /// Row within the character cell, or [`BORDER_LINE`].
    pub(super) line_in_row: u8,
    pub(super) video_mode: VideoMode,
    pub(super) ff22: u8,
    pub(super) ff98: u8,
    pub(super) ff99: u8,
    /// Palette rotation slot in effect when the line was fetched.
    pub(super) palette_slot: usize,
    pub(super) mode: [u8; MAX_SAMPLES],
    pub(super) data: [u8; MAX_SAMPLES],
}

impl Default for ScanlineRecord {
    fn default() -> Self {
        Self {
            border: 0,
            line_in_row: BORDER_LINE,
            video_mode: VideoMode::default(),
            ff22: 0,
            ff98: 0,
            ff99: 0,
            palette_slot: 0,
            mode: [0; MAX_SAMPLES],
            data: [0; MAX_SAMPLES],
        }
    }
}

/// Store `value` and flag the frame as changed if it differs.
fn update_value<T: PartialEq>(changed: &mut bool, slot: &mut T, value: T) {
    if *slot != value {
        *slot = value;
        *changed = true;
    }
}

fn update_slice(changed: &mut bool, slot: &mut [u8], values: &[u8]) {
    if slot != values {
        slot.copy_from_slice(values);
        *changed = true;
    }
}

impl Gime {
    /// Start of a new field: latch the video mode, the video base
    /// address and the vertical scroll.
    pub fn new_frame(&mut self) {
        let legacy_video = self.init0().contains(Init0::COCO);
        let legacy_changed = legacy_video != self.legacy_video;
        if legacy_changed {
            self.legacy_video = legacy_video;
            self.video_changed = true;
        }

        self.video_position = self.video_base();
        self.line_in_row = self.registers[VERTICAL_SCROLL] & 0x0F;

        if legacy_changed {
            self.update_geometry();
        }
    }

    /// Physical address of the first body byte.
    fn video_base(&self) -> u32 {
        let (start, ff9d_mask, ff9e_mask) = if self.legacy_video {
            (self.sam_display_offset(), 0xE0, 0x3F)
        } else {
            (0, 0xFF, 0xFF)
        };
        start
            + ((u32::from(self.registers[VERTICAL_OFFSET_LSB] & ff9e_mask) * 0x0_0008)
                | (u32::from(self.registers[VERTICAL_OFFSET_MSB] & ff9d_mask) * 0x0_0800)
                | (u32::from(self.registers[MEMORY_EXTENSION] & 0x0F) * 0x8_0000))
    }

    pub(super) fn update_geometry(&mut self) {
        let ff99 = self.registers[VIDEO_RESOLUTION];
        let (top_border, body) = match ff99 & 0x60 {
            0x00 => (Some(25), Some(192)),
            0x20 => (Some(23), Some(200)),
            0x40 => (None, None),
            0x60 => (Some(8), Some(225)),
            _ => unreachable!(),
        };
        let geometry = FrameGeometry {
            top_border,
            body,
            wide: !self.legacy_video && ff99 & 0x08 != 0,
        };
        if geometry != self.geometry {
            log::debug!("GIME geometry {geometry:?}");
        }
        self.geometry = geometry;
    }

    fn border_color(&self) -> u8 {
        if self.legacy_video {
            legacy::border_color(self.ff22)
        } else {
            self.registers[BORDER] & 0x3F
        }
    }

    /// Rows per character cell; `None` never advances to the next row.
    fn lines_per_row(&self) -> Option<u16> {
        if self.legacy_video {
            return Some(legacy::lines_per_row(self.ff22, self.registers[VERTICAL_SCROLL]));
        }
        match self.registers[VIDEO_MODE] & 0x07 {
            0x00 | 0x01 => Some(1),
            0x02 => Some(2),
            0x03 => Some(8),
            0x04 => Some(9),
            0x05 => Some(10),
            0x06 => Some(11),
            _ => None,
        }
    }

    fn assert_scanline(&self, line: usize) {
        assert!(
            line < self.scanlines.len(),
            "scanline {line} outside of the {} recorded lines",
            self.scanlines.len()
        );
    }

    /// Record a line of the top or bottom border.
    pub fn record_border_scanline(&mut self, line: usize) {
        self.assert_scanline(line);
        self.line_in_row = 0;
        let border = self.border_color();

        let changed = &mut self.video_changed;
        let record = &mut self.scanlines[line];
        update_value(changed, &mut record.border, border);
        update_value(changed, &mut record.line_in_row, BORDER_LINE);
    }

    /// Fetch one body line from video memory.
    pub fn record_body_scanline(&mut self, line: usize) {
        self.assert_scanline(line);
        let border = self.border_color();
        let palette_slot = self.palette.mark_used();

        let ff22 = self.ff22;
        let ff98 = self.registers[VIDEO_MODE];
        let ff99 = self.registers[VIDEO_RESOLUTION];
        let ff9f = self.registers[HORIZONTAL_OFFSET];
        let video_mode = VideoMode::select(self.legacy_video, ff98, ff99);
        let count = video_mode.sample_count(ff22, ff99);
        let fetch = video_mode.fetch_strategy();
        let base_offset = if self.legacy_video {
            0
        } else {
            u32::from(ff9f & 0x7F) * 2
        };

        let mut mode = [0u8; MAX_SAMPLES];
        let mut data = [0u8; MAX_SAMPLES];
        let ctx = FetchContext {
            ram: &self.ram,
            ff22,
            blinking: self.is_blinking,
        };
        let mut offset = 0u32;
        for column in 0..count {
            let address = self.video_position.wrapping_add((base_offset + offset) & 0xFF);
            let sample = fetch(&ctx, address);
            mode[column] = sample.mode;
            data[column] = sample.data;
            offset += sample.stride;
        }
        let pitch = if !self.legacy_video && ff9f & 0x80 != 0 {
            256
        } else {
            offset
        };

        let changed = &mut self.video_changed;
        let record = &mut self.scanlines[line];
        update_value(changed, &mut record.border, border);
        update_value(changed, &mut record.line_in_row, self.line_in_row);
        update_value(changed, &mut record.video_mode, video_mode);
        update_value(changed, &mut record.ff22, ff22);
        update_value(changed, &mut record.ff98, ff98);
        update_value(changed, &mut record.ff99, ff99);
        update_value(changed, &mut record.palette_slot, palette_slot);
        update_slice(changed, &mut record.mode[..count], &mode[..count]);
        update_slice(changed, &mut record.data[..count], &data[..count]);

        self.line_in_row += 1;
        match self.lines_per_row() {
            Some(lines) if u16::from(self.line_in_row) >= lines => {
                self.line_in_row = 0;
                self.video_position = self.video_position.wrapping_add(pitch);
            }
            Some(_) => {}
            // The single row repeats every 16 lines.
            None => self.line_in_row &= 0x0F,
        }
    }
}
