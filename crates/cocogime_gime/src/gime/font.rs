/// 8x8 glyphs of the GIME hi-res text character generator, indexed by the
/// low seven bits of the character code. Rows 8-11 of a cell are blank.
pub(super) const HIRES_FONT: [[u8; 8]; 128] = [
    [0x38, 0x44, 0x40, 0x40, 0x40, 0x44, 0x38, 0x10], [0x44, 0x00, 0x44, 0x44, 0x44, 0x4C, 0x34, 0x00],
    [0x08, 0x10, 0x38, 0x44, 0x7C, 0x40, 0x38, 0x00], [0x10, 0x28, 0x38, 0x04, 0x3C, 0x44, 0x3C, 0x00],
    [0x28, 0x00, 0x38, 0x04, 0x3C, 0x44, 0x3C, 0x00], [0x20, 0x10, 0x38, 0x04, 0x3C, 0x44, 0x3C, 0x00],
    [0x10, 0x00, 0x38, 0x04, 0x3C, 0x44, 0x3C, 0x00], [0x00, 0x00, 0x38, 0x44, 0x40, 0x44, 0x38, 0x10],
    [0x10, 0x28, 0x38, 0x44, 0x7C, 0x40, 0x38, 0x00], [0x28, 0x00, 0x38, 0x44, 0x7C, 0x40, 0x38, 0x00],
    [0x20, 0x10, 0x38, 0x44, 0x7C, 0x40, 0x38, 0x00], [0x28, 0x00, 0x30, 0x10, 0x10, 0x10, 0x38, 0x00],
    [0x10, 0x28, 0x00, 0x30, 0x10, 0x10, 0x38, 0x00], [0x00, 0x18, 0x24, 0x38, 0x24, 0x24, 0x38, 0x40],
    [0x44, 0x10, 0x28, 0x44, 0x7C, 0x44, 0x44, 0x00], [0x10, 0x10, 0x28, 0x44, 0x7C, 0x44, 0x44, 0x00],
    [0x08, 0x10, 0x38, 0x44, 0x44, 0x44, 0x38, 0x00], [0x00, 0x00, 0x68, 0x14, 0x3C, 0x50, 0x3C, 0x00],
    [0x3C, 0x50, 0x50, 0x78, 0x50, 0x50, 0x5C, 0x00], [0x10, 0x28, 0x38, 0x44, 0x44, 0x44, 0x38, 0x00],
    [0x28, 0x00, 0x38, 0x44, 0x44, 0x44, 0x38, 0x00], [0x00, 0x00, 0x38, 0x4C, 0x54, 0x64, 0x38, 0x00],
    [0x10, 0x28, 0x00, 0x44, 0x44, 0x4C, 0x34, 0x00], [0x20, 0x10, 0x44, 0x44, 0x44, 0x4C, 0x34, 0x00],
    [0x38, 0x4C, 0x54, 0x54, 0x54, 0x64, 0x38, 0x00], [0x44, 0x38, 0x44, 0x44, 0x44, 0x44, 0x38, 0x00],
    [0x28, 0x44, 0x44, 0x44, 0x44, 0x44, 0x38, 0x00], [0x38, 0x40, 0x38, 0x44, 0x38, 0x04, 0x38, 0x00],
    [0x08, 0x14, 0x10, 0x38, 0x10, 0x50, 0x3C, 0x00], [0x10, 0x10, 0x7C, 0x10, 0x10, 0x00, 0x7C, 0x00],
    [0x10, 0x28, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00], [0x08, 0x14, 0x10, 0x38, 0x10, 0x10, 0x20, 0x40],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], [0x10, 0x10, 0x10, 0x10, 0x10, 0x00, 0x10, 0x00],
    [0x28, 0x28, 0x28, 0x00, 0x00, 0x00, 0x00, 0x00], [0x28, 0x28, 0x7C, 0x28, 0x7C, 0x28, 0x28, 0x00],
    [0x10, 0x3C, 0x50, 0x38, 0x14, 0x78, 0x10, 0x00], [0x60, 0x64, 0x08, 0x10, 0x20, 0x4C, 0x0C, 0x00],
    [0x20, 0x50, 0x50, 0x20, 0x54, 0x48, 0x34, 0x00], [0x10, 0x10, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x08, 0x10, 0x20, 0x20, 0x20, 0x10, 0x08, 0x00], [0x20, 0x10, 0x08, 0x08, 0x08, 0x10, 0x20, 0x00],
    [0x00, 0x10, 0x54, 0x38, 0x38, 0x54, 0x10, 0x00], [0x00, 0x10, 0x10, 0x7C, 0x10, 0x10, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x10, 0x20], [0x00, 0x00, 0x00, 0x7C, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00], [0x00, 0x04, 0x08, 0x10, 0x20, 0x40, 0x00, 0x00],
    [0x38, 0x44, 0x4C, 0x54, 0x64, 0x44, 0x38, 0x00], [0x10, 0x30, 0x10, 0x10, 0x10, 0x10, 0x38, 0x00],
    [0x38, 0x44, 0x04, 0x38, 0x40, 0x40, 0x7C, 0x00], [0x38, 0x44, 0x04, 0x08, 0x04, 0x44, 0x38, 0x00],
    [0x08, 0x18, 0x28, 0x48, 0x7C, 0x08, 0x08, 0x00], [0x7C, 0x40, 0x78, 0x04, 0x04, 0x44, 0x38, 0x00],
    [0x38, 0x40, 0x40, 0x78, 0x44, 0x44, 0x38, 0x00], [0x7C, 0x04, 0x08, 0x10, 0x20, 0x40, 0x40, 0x00],
    [0x38, 0x44, 0x44, 0x38, 0x44, 0x44, 0x38, 0x00], [0x38, 0x44, 0x44, 0x38, 0x04, 0x04, 0x38, 0x00],
    [0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x00, 0x00], [0x00, 0x00, 0x10, 0x00, 0x00, 0x10, 0x10, 0x20],
    [0x08, 0x10, 0x20, 0x40, 0x20, 0x10, 0x08, 0x00], [0x00, 0x00, 0x7C, 0x00, 0x7C, 0x00, 0x00, 0x00],
    [0x20, 0x10, 0x08, 0x04, 0x08, 0x10, 0x20, 0x00], [0x38, 0x44, 0x04, 0x08, 0x10, 0x00, 0x10, 0x00],
    [0x38, 0x44, 0x04, 0x34, 0x4C, 0x4C, 0x38, 0x00], [0x10, 0x28, 0x44, 0x44, 0x7C, 0x44, 0x44, 0x00],
    [0x78, 0x24, 0x24, 0x38, 0x24, 0x24, 0x78, 0x00], [0x38, 0x44, 0x40, 0x40, 0x40, 0x44, 0x38, 0x00],
    [0x78, 0x24, 0x24, 0x24, 0x24, 0x24, 0x78, 0x00], [0x7C, 0x40, 0x40, 0x70, 0x40, 0x40, 0x7C, 0x00],
    [0x7C, 0x40, 0x40, 0x70, 0x40, 0x40, 0x40, 0x00], [0x38, 0x44, 0x40, 0x40, 0x4C, 0x44, 0x38, 0x00],
    [0x44, 0x44, 0x44, 0x7C, 0x44, 0x44, 0x44, 0x00], [0x38, 0x10, 0x10, 0x10, 0x10, 0x10, 0x38, 0x00],
    [0x04, 0x04, 0x04, 0x04, 0x04, 0x44, 0x38, 0x00], [0x44, 0x48, 0x50, 0x60, 0x50, 0x48, 0x44, 0x00],
    [0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x7C, 0x00], [0x44, 0x6C, 0x54, 0x54, 0x44, 0x44, 0x44, 0x00],
    [0x44, 0x44, 0x64, 0x54, 0x4C, 0x44, 0x44, 0x00], [0x38, 0x44, 0x44, 0x44, 0x44, 0x44, 0x38, 0x00],
    [0x78, 0x44, 0x44, 0x78, 0x40, 0x40, 0x40, 0x00], [0x38, 0x44, 0x44, 0x44, 0x54, 0x48, 0x34, 0x00],
    [0x78, 0x44, 0x44, 0x78, 0x50, 0x48, 0x44, 0x00], [0x38, 0x44, 0x40, 0x38, 0x04, 0x44, 0x38, 0x00],
    [0x7C, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00], [0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x38, 0x00],
    [0x44, 0x44, 0x44, 0x28, 0x28, 0x10, 0x10, 0x00], [0x44, 0x44, 0x44, 0x44, 0x54, 0x6C, 0x44, 0x00],
    [0x44, 0x44, 0x28, 0x10, 0x28, 0x44, 0x44, 0x00], [0x44, 0x44, 0x28, 0x10, 0x10, 0x10, 0x10, 0x00],
    [0x7C, 0x04, 0x08, 0x10, 0x20, 0x40, 0x7C, 0x00], [0x38, 0x20, 0x20, 0x20, 0x20, 0x20, 0x38, 0x00],
    [0x00, 0x40, 0x20, 0x10, 0x08, 0x04, 0x00, 0x00], [0x38, 0x08, 0x08, 0x08, 0x08, 0x08, 0x38, 0x00],
    [0x10, 0x38, 0x54, 0x10, 0x10, 0x10, 0x10, 0x00], [0x00, 0x10, 0x20, 0x7C, 0x20, 0x10, 0x00, 0x00],
    [0x10, 0x28, 0x44, 0x00, 0x00, 0x00, 0x00, 0x00], [0x00, 0x00, 0x38, 0x04, 0x3C, 0x44, 0x3C, 0x00],
    [0x40, 0x40, 0x58, 0x64, 0x44, 0x64, 0x58, 0x00], [0x00, 0x00, 0x38, 0x44, 0x40, 0x44, 0x38, 0x00],
    [0x04, 0x04, 0x34, 0x4C, 0x44, 0x4C, 0x34, 0x00], [0x00, 0x00, 0x38, 0x44, 0x7C, 0x40, 0x38, 0x00],
    [0x08, 0x14, 0x10, 0x38, 0x10, 0x10, 0x10, 0x00], [0x00, 0x00, 0x34, 0x4C, 0x4C, 0x34, 0x04, 0x38],
    [0x40, 0x40, 0x58, 0x64, 0x44, 0x44, 0x44, 0x00], [0x00, 0x10, 0x00, 0x30, 0x10, 0x10, 0x38, 0x00],
    [0x00, 0x04, 0x00, 0x04, 0x04, 0x04, 0x44, 0x38], [0x40, 0x40, 0x48, 0x50, 0x60, 0x50, 0x48, 0x00],
    [0x30, 0x10, 0x10, 0x10, 0x10, 0x10, 0x38, 0x00], [0x00, 0x00, 0x68, 0x54, 0x54, 0x54, 0x54, 0x00],
    [0x00, 0x00, 0x58, 0x64, 0x44, 0x44, 0x44, 0x00], [0x00, 0x00, 0x38, 0x44, 0x44, 0x44, 0x38, 0x00],
    [0x00, 0x00, 0x78, 0x44, 0x44, 0x78, 0x40, 0x40], [0x00, 0x00, 0x3C, 0x44, 0x44, 0x3C, 0x04, 0x04],
    [0x00, 0x00, 0x58, 0x64, 0x40, 0x40, 0x40, 0x00], [0x00, 0x00, 0x3C, 0x40, 0x38, 0x04, 0x78, 0x00],
    [0x20, 0x20, 0x70, 0x20, 0x20, 0x24, 0x18, 0x00], [0x00, 0x00, 0x44, 0x44, 0x44, 0x4C, 0x34, 0x00],
    [0x00, 0x00, 0x44, 0x44, 0x44, 0x28, 0x10, 0x00], [0x00, 0x00, 0x44, 0x54, 0x54, 0x28, 0x28, 0x00],
    [0x00, 0x00, 0x44, 0x28, 0x10, 0x28, 0x44, 0x00], [0x00, 0x00, 0x44, 0x44, 0x44, 0x3C, 0x04, 0x38],
    [0x00, 0x00, 0x7C, 0x08, 0x10, 0x20, 0x7C, 0x00], [0x08, 0x10, 0x10, 0x20, 0x10, 0x10, 0x08, 0x00],
    [0x10, 0x10, 0x10, 0x00, 0x10, 0x10, 0x10, 0x00], [0x20, 0x10, 0x10, 0x08, 0x10, 0x10, 0x20, 0x00],
    [0x20, 0x54, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00], [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7C, 0x00],
];

/// MC6847 internal character generator: 64 characters of 12 rows, 5x7
/// glyphs starting on row 3. Codes $1E/$1F are the up and left arrows.
pub(super) const MC6847_FONT: [[u8; 12]; 64] = [
    [0x00, 0x00, 0x00, 0x1C, 0x22, 0x02, 0x1A, 0x2A, 0x2A, 0x1C, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x08, 0x14, 0x22, 0x22, 0x3E, 0x22, 0x22, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x3C, 0x12, 0x12, 0x1C, 0x12, 0x12, 0x3C, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1C, 0x22, 0x20, 0x20, 0x20, 0x22, 0x1C, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x3C, 0x12, 0x12, 0x12, 0x12, 0x12, 0x3C, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x3E, 0x20, 0x20, 0x38, 0x20, 0x20, 0x3E, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x3E, 0x20, 0x20, 0x38, 0x20, 0x20, 0x20, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1E, 0x20, 0x20, 0x26, 0x22, 0x22, 0x1E, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x22, 0x22, 0x22, 0x3E, 0x22, 0x22, 0x22, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1C, 0x08, 0x08, 0x08, 0x08, 0x08, 0x1C, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x02, 0x02, 0x02, 0x02, 0x22, 0x22, 0x1C, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x22, 0x24, 0x28, 0x30, 0x28, 0x24, 0x22, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x3E, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x22, 0x36, 0x2A, 0x2A, 0x22, 0x22, 0x22, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x22, 0x32, 0x2A, 0x26, 0x22, 0x22, 0x22, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x3E, 0x22, 0x22, 0x22, 0x22, 0x22, 0x3E, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x3C, 0x22, 0x22, 0x3C, 0x20, 0x20, 0x20, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1C, 0x22, 0x22, 0x22, 0x2A, 0x24, 0x1A, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x3C, 0x22, 0x22, 0x3C, 0x28, 0x24, 0x22, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1C, 0x22, 0x10, 0x08, 0x04, 0x22, 0x1C, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x3E, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x22, 0x22, 0x22, 0x22, 0x22, 0x22, 0x1C, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x22, 0x22, 0x22, 0x14, 0x14, 0x08, 0x08, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x22, 0x22, 0x22, 0x2A, 0x2A, 0x36, 0x22, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x22, 0x22, 0x14, 0x08, 0x14, 0x22, 0x22, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x22, 0x22, 0x14, 0x08, 0x08, 0x08, 0x08, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x3E, 0x02, 0x04, 0x08, 0x10, 0x20, 0x3E, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1C, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1C, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x20, 0x10, 0x08, 0x04, 0x02, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1C, 0x04, 0x04, 0x04, 0x04, 0x04, 0x1C, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x08, 0x1C, 0x2A, 0x08, 0x08, 0x08, 0x08, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x08, 0x10, 0x3E, 0x10, 0x08, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x08, 0x08, 0x08, 0x08, 0x08, 0x00, 0x08, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x14, 0x14, 0x14, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x14, 0x14, 0x3E, 0x14, 0x3E, 0x14, 0x14, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x08, 0x1E, 0x28, 0x1C, 0x0A, 0x3C, 0x08, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x32, 0x32, 0x04, 0x08, 0x10, 0x26, 0x26, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x10, 0x28, 0x28, 0x10, 0x2A, 0x24, 0x1A, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x18, 0x18, 0x08, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x04, 0x08, 0x10, 0x10, 0x10, 0x08, 0x04, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x10, 0x08, 0x04, 0x04, 0x04, 0x08, 0x10, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x08, 0x2A, 0x1C, 0x2A, 0x08, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x08, 0x08, 0x3E, 0x08, 0x08, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x08, 0x10, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3E, 0x00, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x02, 0x04, 0x08, 0x10, 0x20, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1C, 0x26, 0x2A, 0x2A, 0x2A, 0x32, 0x1C, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x08, 0x18, 0x08, 0x08, 0x08, 0x08, 0x1C, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1C, 0x22, 0x02, 0x1C, 0x20, 0x20, 0x3E, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1C, 0x22, 0x02, 0x0C, 0x02, 0x22, 0x1C, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x04, 0x0C, 0x14, 0x3E, 0x04, 0x04, 0x04, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x3E, 0x20, 0x3C, 0x02, 0x02, 0x22, 0x1C, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1C, 0x20, 0x20, 0x3C, 0x22, 0x22, 0x1C, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x3E, 0x02, 0x04, 0x08, 0x10, 0x20, 0x20, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1C, 0x22, 0x22, 0x1C, 0x22, 0x22, 0x1C, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1C, 0x22, 0x22, 0x1E, 0x02, 0x02, 0x1C, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x08, 0x00, 0x00, 0x00, 0x08, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x08, 0x00, 0x00, 0x08, 0x08, 0x10, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x04, 0x08, 0x10, 0x20, 0x10, 0x08, 0x04, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x3E, 0x00, 0x3E, 0x00, 0x00, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x10, 0x08, 0x04, 0x02, 0x04, 0x08, 0x10, 0x00, 0x00],
    [0x00, 0x00, 0x00, 0x1C, 0x22, 0x02, 0x04, 0x08, 0x00, 0x08, 0x00, 0x00],
];
