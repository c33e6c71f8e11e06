//! Synthetic workload: a 4 bpp bitmap of vertical colour bars, a
//! clock-mode timer on FIRQ, VBORD on IRQ, and a palette change halfway
//! down the body that has to survive until the frame is rendered.

use cocogime_gime::Gime;

/// Physical address of the bitmap ($FF9D = $C0).
pub const VIDEO_BASE: usize = 0x6_0000;
/// 160 bytes per line: 320 pixels at 4 bpp.
pub const BYTES_PER_LINE: usize = 160;
pub const BODY_LINES: usize = 192;
/// Body line at which palette entry 0 changes.
pub const SPLIT_LINE: usize = BODY_LINES / 2;

const PALETTE: [u8; 16] = [
    0x00, 0x09, 0x12, 0x1B, 0x24, 0x2D, 0x36, 0x3F, 0x07, 0x38, 0x15, 0x2A, 0x0E, 0x31, 0x23, 0x1C,
];
/// Colour entry 0 takes for the lower half of the body.
pub const SPLIT_COLOR: u8 = 0x3F;
pub const BORDER_COLOR: u8 = 0x01;
/// Timer reload for a FIRQ about every millisecond.
const TIMER_RELOAD: u16 = 0x0E00;

/// Program the chip and fill video memory.
pub fn setup(gime: &mut Gime) {
    // MMU, IRQ and FIRQ outputs on.
    gime.write(0x00, 0x70);
    // Clock-mode timer.
    gime.write(0x01, 0x20);
    // VBORD on IRQ, TMR on FIRQ.
    gime.write(0x02, 0x08);
    gime.write(0x03, 0x20);
    // Graphics, one line per row; 160 bytes, 16 colours, 192 lines.
    gime.write(0x08, 0x80);
    gime.write(0x09, 0x1E);
    gime.write(0x0A, BORDER_COLOR);
    gime.write(0x0D, 0xC0);
    gime.write(0x0E, 0x00);
    for (index, &color) in PALETTE.iter().enumerate() {
        gime.write(0x20 + index as u8, color);
    }
    // SAM double speed poke.
    gime.write(0x47, 0);

    let frame = &mut gime.ram_mut()[VIDEO_BASE..VIDEO_BASE + BYTES_PER_LINE * BODY_LINES];
    for line in frame.chunks_exact_mut(BYTES_PER_LINE) {
        for (column, byte) in line.iter_mut().enumerate() {
            let bar = (column / 10) as u8 & 0x0F;
            *byte = (bar << 4) | bar;
        }
    }

    gime.write(0x04, (TIMER_RELOAD >> 8) as u8);
    gime.write(0x05, TIMER_RELOAD as u8);
}

/// Per-line reprogramming: restore entry 0 at the top of the frame and
/// change it at the split line.
pub fn on_line(gime: &mut Gime, line: usize) {
    let top = gime.geometry().top_border.map_or(0, usize::from);
    if line == 0 {
        gime.write(0x20, PALETTE[0]);
    } else if line == top + SPLIT_LINE {
        gime.write(0x20, SPLIT_COLOR);
    }
}
