use super::font::HIRES_FONT;
use super::legacy;
use super::palette::{PaletteResolver, VideoOutput};
use super::recorder::{ScanlineRecord, VideoMode, BORDER_LINE, NO_ATTRIBUTE};
use super::registers::VIDEO_MODE;
use super::Gime;
use crate::{Artifacting, SCREEN_WIDTH};

/// Left border width of a non-wide body.
const BODY_LEFT: usize = 64;
/// Width of a non-wide body.
const BODY_WIDTH: usize = 512;

/// How one graphics sample expands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct GraphicsLayout {
    samples: usize,
    xscale: usize,
    bits_per_pixel: usize,
}

const fn layout(samples: usize, xscale: usize, bits_per_pixel: usize) -> GraphicsLayout {
    GraphicsLayout {
        samples,
        xscale,
        bits_per_pixel,
    }
}

/// Graphics layouts by $FF99 & 0x1F (HRES and CRES).
const GRAPHICS_LAYOUTS: [GraphicsLayout; 32] = [
    layout(16, 4, 1),
    layout(16, 8, 2),
    layout(16, 16, 4),
    layout(16, 16, 4),
    layout(20, 4, 1),
    layout(20, 8, 2),
    layout(20, 16, 4),
    layout(20, 16, 4),
    layout(32, 2, 1),
    layout(32, 4, 2),
    layout(32, 8, 4),
    layout(32, 8, 4),
    layout(40, 2, 1),
    layout(40, 4, 2),
    layout(40, 8, 4),
    layout(40, 8, 4),
    layout(64, 1, 1),
    layout(64, 2, 2),
    layout(64, 4, 4),
    layout(64, 4, 4),
    layout(80, 1, 1),
    layout(80, 2, 2),
    layout(80, 4, 4),
    layout(80, 4, 4),
    layout(128, 1, 2),
    layout(128, 1, 2),
    layout(128, 2, 4),
    layout(128, 2, 4),
    layout(160, 1, 2),
    layout(160, 1, 2),
    layout(160, 2, 4),
    layout(160, 2, 4),
];

/// Sample expansion selected per record.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Emitter {
    Legacy,
    Graphics(GraphicsLayout),
    Text { xscale: usize },
}

impl Emitter {
    fn for_record(record: &ScanlineRecord) -> (usize, Emitter) {
        match record.video_mode {
            VideoMode::Legacy => (legacy::samples_per_line(record.ff22), Emitter::Legacy),
            VideoMode::Graphics => {
                let layout = GRAPHICS_LAYOUTS[usize::from(record.ff99 & 0x1F)];
                (layout.samples, Emitter::Graphics(layout))
            }
            VideoMode::Text | VideoMode::TextAttr => {
                let samples = record.video_mode.sample_count(record.ff22, record.ff99);
                let xscale = if record.ff99 & 0x10 != 0 { 1 } else { 2 };
                (samples, Emitter::Text { xscale })
            }
        }
    }

    /// Expand `count` samples starting at `start`, all sharing one mode
    /// byte. Returns the number of pixels written.
    fn emit(
        self,
        record: &ScanlineRecord,
        start: usize,
        count: usize,
        pixels: &mut [u32],
        palette: &[u32; 16],
        black: u32,
    ) -> usize {
        let data = &record.data[start..start + count];
        match self {
            Emitter::Legacy => legacy::emit_samples(
                record.mode[start],
                data,
                record.line_in_row,
                pixels,
                palette,
                black,
            ),
            Emitter::Graphics(layout) => emit_graphics(data, layout, pixels, palette),
            Emitter::Text { xscale } => emit_text(record, start, data, xscale, pixels, palette),
        }
    }
}

fn emit_graphics(
    data: &[u8],
    layout: GraphicsLayout,
    pixels: &mut [u32],
    palette: &[u32; 16],
) -> usize {
    let bits = layout.bits_per_pixel;
    let mask = (1u8 << bits) - 1;
    let mut position = 0;
    for &byte in data {
        for p in 0..8 / bits {
            let color = palette[usize::from((byte >> (8 - bits * (p + 1))) & mask)];
            pixels[position..position + layout.xscale].fill(color);
            position += layout.xscale;
        }
    }
    position
}

/// Row of the cell that is drawn solid for underlined characters, by
/// $FF98 lines-per-row.
fn underline_row(ff98: u8) -> Option<u8> {
    match ff98 & 0x07 {
        0x03 => Some(7),
        0x04 | 0x05 => Some(8),
        0x06 => Some(9),
        _ => None,
    }
}

fn emit_text(
    record: &ScanlineRecord,
    start: usize,
    data: &[u8],
    xscale: usize,
    pixels: &mut [u32],
    palette: &[u32; 16],
) -> usize {
    let attribute = record.mode[start];
    let (bg, fg) = if attribute == NO_ATTRIBUTE {
        (palette[0], palette[1])
    } else {
        (
            palette[usize::from(attribute & 0x07)],
            palette[usize::from((attribute >> 3) & 0x07) + 8],
        )
    };
    let underline = attribute != NO_ATTRIBUTE
        && attribute & 0x40 != 0
        && underline_row(record.ff98) == Some(record.line_in_row);

    let mut position = 0;
    for &code in data {
        let rows = &HIRES_FONT[usize::from(code & 0x7F)];
        let glyph = match rows.get(usize::from(record.line_in_row)) {
            _ if underline => 0xFF,
            Some(&row) => row,
            // Rows 8-11 of the cell are blank.
            None => 0x00,
        };
        for bit in 0..8 {
            let color = if (glyph >> (7 - bit)) & 0x01 != 0 { fg } else { bg };
            pixels[position..position + xscale].fill(color);
            position += xscale;
        }
    }
    position
}

/// Expand one record into a full output row.
fn render_scanline(
    record: &ScanlineRecord,
    row: &mut [u32],
    resolver: &mut PaletteResolver<'_>,
    artifacting: Artifacting,
) {
    let border = resolver.lookup(record.border);
    if record.line_in_row == BORDER_LINE {
        row.fill(border);
        return;
    }

    let wide = record.video_mode != VideoMode::Legacy && record.ff99 & 0x04 != 0;
    let (left, right) = if wide {
        (0, SCREEN_WIDTH)
    } else {
        (BODY_LEFT, BODY_LEFT + BODY_WIDTH)
    };
    row[..left].fill(border);
    row[right..].fill(border);

    let (samples, emitter) = Emitter::for_record(record);
    let black = resolver.lookup(0x00);
    let palette = *resolver.palette(record.palette_slot);
    let body = &mut row[left..right];

    let mut x = 0;
    let mut position = 0;
    while x < samples {
        let mut x2 = x + 1;
        while x2 < samples && record.mode[x2] == record.mode[x] {
            x2 += 1;
        }
        position += emitter.emit(record, x, x2 - x, &mut body[position..], &palette, black);
        x = x2;
    }
    debug_assert_eq!(position, right - left, "{emitter:?} filled {position} pixels");

    if emitter == Emitter::Legacy {
        legacy::artifact(record.mode[0], body, &palette, artifacting);
    }
}

impl Gime {
    /// Switch composite artifacting; takes effect on the next render.
    pub fn set_artifacting(&mut self, artifacting: Artifacting) {
        if self.artifacting != artifacting {
            self.artifacting = artifacting;
            self.video_changed = true;
        }
    }

    pub fn artifacting(&self) -> Artifacting {
        self.artifacting
    }

    /// Render every recorded scanline into `buffer`, 640 pixels per row
    /// as `0x00RRGGBB`. Rows past the buffer are skipped.
    ///
    /// Returns whether the picture differs from the previous render.
    pub fn render_frame(&mut self, buffer: &mut [u32], output: VideoOutput) -> bool {
        if self.displayed_output != Some(output) {
            self.displayed_output = Some(output);
            self.video_changed = true;
        }

        let monochrome = self.registers[VIDEO_MODE] & 0x10 != 0;
        let artifacting = if output == VideoOutput::Composite && !monochrome {
            self.artifacting
        } else {
            Artifacting::Off
        };
        let table = self.tables.select(output, monochrome);
        let mut resolver = PaletteResolver::new(table, &self.palette);
        for (record, row) in self.scanlines.iter().zip(buffer.chunks_exact_mut(SCREEN_WIDTH)) {
            render_scanline(record, row, &mut resolver, artifacting);
        }

        std::mem::take(&mut self.video_changed)
    }
}
