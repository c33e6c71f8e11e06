//! CoCo 1/2 compatible (MC6847) video on the GIME.
//!
//! Legacy modes are selected by the PIA $FF22 bits plus, for text, the
//! top bits of each character byte. The recorder folds both into one
//! mode byte per column using the flags below.

use super::font::MC6847_FONT;
use crate::Artifacting;

pub(super) const MODE_AG: u8 = 0x80;
pub(super) const MODE_GM2: u8 = 0x40;
pub(super) const MODE_GM1: u8 = 0x20;
pub(super) const MODE_GM0: u8 = 0x10;
pub(super) const MODE_CSS: u8 = 0x08;
/// Semigraphics character (data bit 7).
pub(super) const MODE_AS: u8 = 0x04;
/// Inverse video character (data bits 7-6 = 01).
pub(super) const MODE_INV: u8 = 0x02;

const MODE_GM: u8 = MODE_GM2 | MODE_GM1 | MODE_GM0;

const ARTIFACT_ORANGE: u32 = 0xFF8000;
const ARTIFACT_BLUE: u32 = 0x0080FF;

/// 6-bit colours of the MC6847 border.
const BORDER_BLACK: u8 = 0x00;
const BORDER_GREEN: u8 = 0x12;
const BORDER_WHITE: u8 = 0x3F;
const BORDER_ORANGE: u8 = 0x26;

/// Text background palette entry for CSS=0; foreground is the next one.
const TEXT_PALETTE: usize = 12;
/// Resolution graphics palette base.
const RG_PALETTE: usize = 8;

/// Rows per character cell in text modes, indexed by $FF9C & 0x0F.
const FF9C_LINES_PER_ROW: [u16; 16] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 4, 3, 2, 1, 12];

/// Border colour the MC6847 would produce for these $FF22 bits.
pub(super) fn border_color(ff22: u8) -> u8 {
    let css = ff22 & MODE_CSS != 0;
    if ff22 & MODE_AG != 0 {
        if css {
            BORDER_WHITE
        } else {
            BORDER_GREEN
        }
    } else if ff22 & MODE_GM2 != 0 {
        if css {
            BORDER_ORANGE
        } else {
            BORDER_GREEN
        }
    } else {
        BORDER_BLACK
    }
}

pub(super) fn lines_per_row(ff22: u8, ff9c: u8) -> u16 {
    match ff22 & (MODE_AG | MODE_GM) {
        mode if mode & MODE_AG == 0 => FF9C_LINES_PER_ROW[usize::from(ff9c & 0x0F)],
        0x80 | 0x90 | 0xA0 => 3,
        0xB0 | 0xC0 => 2,
        0xD0 | 0xE0 | 0xF0 => 1,
        mode => unreachable!("graphics mode {mode:#04x}"),
    }
}

/// Bytes fetched per line.
pub(super) fn samples_per_line(ff22: u8) -> usize {
    match ff22 & (MODE_AG | MODE_GM) {
        // CG1, RG1, RG2, RG3.
        0x80 | 0x90 | 0xB0 | 0xD0 => 16,
        _ => 32,
    }
}

/// Mode byte for one fetched character or graphics byte, with the
/// flags that do not affect its rendering removed.
pub(super) fn sample_mode(ff22: u8, data: u8) -> u8 {
    let mut mode = ff22 & (MODE_AG | MODE_GM | MODE_CSS);
    if mode & MODE_AG != 0 {
        return mode;
    }
    if data & 0x80 != 0 {
        mode |= MODE_AS;
        mode &= MODE_AS | MODE_GM0 | MODE_CSS;
        if mode & MODE_GM0 == 0 {
            // SG4 colour comes from the data byte alone.
            mode &= !MODE_CSS;
        }
    } else {
        if data & 0xC0 == 0x40 {
            mode |= MODE_INV;
        }
        mode &= MODE_INV | MODE_CSS;
    }
    mode
}

/// Expand a run of samples that share `mode` into 512-pixel body
/// coordinates. Returns the number of pixels written.
pub(super) fn emit_samples(
    mode: u8,
    data: &[u8],
    line_in_row: u8,
    pixels: &mut [u32],
    palette: &[u32; 16],
    black: u32,
) -> usize {
    let css = usize::from(mode & MODE_CSS != 0);
    let mut position = 0;

    if mode & MODE_AG != 0 {
        let samples = samples_per_line(mode);
        let resolution = mode & MODE_GM0 != 0;
        let bits_per_pixel = if resolution { 1 } else { 2 };
        let pixels_per_byte = 8 / bits_per_pixel;
        let xscale = 512 / (samples * pixels_per_byte);
        let base = if resolution { RG_PALETTE + css * 2 } else { css * 4 };
        let mask = (1u8 << bits_per_pixel) - 1;

        for &byte in data {
            for p in 0..pixels_per_byte {
                let shift = 8 - bits_per_pixel * (p + 1);
                let color = palette[base + usize::from((byte >> shift) & mask)];
                pixels[position..position + xscale].fill(color);
                position += xscale;
            }
        }
        return position;
    }

    for &byte in data {
        let cell = &mut pixels[position..position + 16];
        if mode & MODE_AS != 0 {
            emit_semigraphics(mode, byte, line_in_row, cell, palette, black);
        } else {
            let bg_index = TEXT_PALETTE + css * 2;
            let (mut bg, mut fg) = (palette[bg_index], palette[bg_index + 1]);
            if mode & MODE_INV != 0 {
                std::mem::swap(&mut bg, &mut fg);
            }
            let glyph = glyph_row(byte & 0x3F, line_in_row);
            for bit in 0..8 {
                let color = if (glyph >> (7 - bit)) & 0x01 != 0 { fg } else { bg };
                cell[bit * 2..bit * 2 + 2].fill(color);
            }
        }
        position += 16;
    }
    position
}

/// Blend the 256-column two-colour mode (RG6) the way an NTSC set
/// smears it: each pair of columns with exactly one lit pixel turns
/// into a solid colour. `body` is the 512-pixel body of one line.
pub(super) fn artifact(
    mode: u8,
    body: &mut [u32],
    palette: &[u32; 16],
    artifacting: Artifacting,
) {
    let (lit_first, unlit_first) = match artifacting {
        Artifacting::Off => return,
        Artifacting::Standard => (ARTIFACT_ORANGE, ARTIFACT_BLUE),
        Artifacting::Reverse => (ARTIFACT_BLUE, ARTIFACT_ORANGE),
    };
    if mode & (MODE_AS | MODE_AG | MODE_GM) != MODE_AG | MODE_GM {
        return;
    }
    let css = usize::from(mode & MODE_CSS != 0);
    let lit = palette[RG_PALETTE + css * 2 + 1];
    for pair in body.chunks_exact_mut(4) {
        let color = match (pair[0] == lit, pair[2] == lit) {
            (true, false) => lit_first,
            (false, true) => unlit_first,
            _ => continue,
        };
        pair.fill(color);
    }
}

/// Internal character generator row; rows past the 12-line cell are
/// blank.
fn glyph_row(code: u8, line_in_row: u8) -> u8 {
    MC6847_FONT[usize::from(code & 0x3F)]
        .get(usize::from(line_in_row))
        .copied()
        .unwrap_or(0)
}

fn emit_semigraphics(
    mode: u8,
    byte: u8,
    line_in_row: u8,
    cell: &mut [u32],
    palette: &[u32; 16],
    black: u32,
) {
    let (color, left_bit, right_bit) = if mode & MODE_GM0 != 0 {
        // SG6: 2x3 blocks, colour from bits 7-6 and CSS.
        let css = usize::from(mode & MODE_CSS != 0);
        let color = palette[css * 4 + usize::from((byte >> 6) & 0x03)];
        let shift = match line_in_row {
            0..=3 => 4,
            4..=7 => 2,
            _ => 0,
        };
        (color, 1 << (shift + 1), 1 << shift)
    } else {
        // SG4: 2x2 blocks, colour from bits 6-4.
        let color = palette[usize::from((byte >> 4) & 0x07)];
        let (left, right) = if line_in_row < 6 { (0x08, 0x04) } else { (0x02, 0x01) };
        (color, left, right)
    };

    let left = if byte & left_bit != 0 { color } else { black };
    let right = if byte & right_bit != 0 { color } else { black };
    cell[..8].fill(left);
    cell[8..].fill(right);
}
