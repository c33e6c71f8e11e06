/// An 8-bit-per-channel colour as produced by the video output stage.
///
/// The chip model itself works on packed `0x00RRGGBB` pixels (see
/// [`Color::to_rgb24`]); this type is the unpacked form used when a frame is
/// written out or when a palette entry has to be post-processed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new_rgb(0, 0, 0);
    pub const WHITE: Color = Color::new_rgb(255, 255, 255);

    #[inline]
    pub const fn new_rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    /// Unpack a `0x00RRGGBB` pixel. The top byte is ignored.
    #[inline]
    pub const fn from_rgb24(pixel: u32) -> Color {
        Color {
            r: (pixel >> 16) as u8,
            g: (pixel >> 8) as u8,
            b: pixel as u8,
        }
    }

    #[inline]
    pub const fn to_rgb24(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    #[inline]
    pub const fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Rec. 601 luma in fixed point (weights sum to 256).
    pub fn luma(&self) -> u8 {
        let y = 77 * self.r as u32 + 150 * self.g as u32 + 29 * self.b as u32;
        (y >> 8) as u8
    }

    /// The grey with the same luma, as seen on a monochrome composite monitor.
    pub fn to_monochrome(self) -> Color {
        let y = self.luma();
        Color::new_rgb(y, y, y)
    }
}

/// Write a row of packed pixels as RGB24 bytes.
pub fn write_rgb24(pixels: &[u32], out: &mut Vec<u8>) {
    out.reserve(pixels.len() * 3);
    for &pixel in pixels {
        let (r, g, b) = Color::from_rgb24(pixel).rgb();
        out.extend_from_slice(&[r, g, b]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb24_packing_round_trips() {
        let c = Color::new_rgb(0x12, 0x34, 0x56);
        assert_eq!(c.to_rgb24(), 0x123456);
        assert_eq!(Color::from_rgb24(0xFF12_3456), c);
    }

    #[test]
    fn monochrome_keeps_extremes() {
        assert_eq!(Color::WHITE.to_monochrome(), Color::WHITE);
        assert_eq!(Color::BLACK.to_monochrome(), Color::BLACK);
    }

    #[test]
    fn rgb24_rows_are_three_bytes_per_pixel() {
        let mut out = Vec::new();
        write_rgb24(&[0x00FF_0000, 0x0000_00FF], &mut out);
        assert_eq!(out, vec![0xFF, 0, 0, 0, 0, 0xFF]);
    }
}
