//! Built-in bitmap face for tile labels.
//!
//! Labels are plain indices, so the face only carries the ten digits. Glyphs
//! are 5×7 and drawn 1:1; the sheet scale does not enlarge them.

use image::{Rgb, RgbImage};

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;

/// Horizontal distance between the left edges of consecutive glyphs.
pub const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

// One byte per row, top to bottom; bit 4 is the leftmost column.
const DIGITS: [[u8; GLYPH_HEIGHT as usize]; 10] = [
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E], // 0
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E], // 1
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F], // 2
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E], // 3
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02], // 4
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E], // 5
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E], // 6
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08], // 7
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E], // 8
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C], // 9
];

fn glyph(c: char) -> Option<&'static [u8; GLYPH_HEIGHT as usize]> {
    let digit = c.to_digit(10)?;
    DIGITS.get(digit as usize)
}

/// Width in pixels covered by `text` when drawn with [`draw_text`].
pub fn text_width(text: &str) -> u32 {
    match text.chars().count() as u32 {
        0 => 0,
        n => (n - 1) * GLYPH_ADVANCE + GLYPH_WIDTH,
    }
}

/// Draw `text` with its top-left corner at (`x`, `y`).
///
/// Pixels falling outside the image are clipped. Characters without a glyph
/// still advance the pen but draw nothing.
pub fn draw_text(img: &mut RgbImage, x: u32, y: u32, text: &str, color: Rgb<u8>) {
    let (width, height) = img.dimensions();
    let mut pen_x = x;
    for c in text.chars() {
        if let Some(rows) = glyph(c) {
            for (dy, bits) in rows.iter().enumerate() {
                let py = y.saturating_add(dy as u32);
                if py >= height {
                    break;
                }
                for dx in 0..GLYPH_WIDTH {
                    let px = pen_x.saturating_add(dx);
                    if px < width && bits & (0x10 >> dx) != 0 {
                        img.put_pixel(px, py, color);
                    }
                }
            }
        }
        pen_x = pen_x.saturating_add(GLYPH_ADVANCE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INK: Rgb<u8> = Rgb([255, 255, 255]);

    fn ink_count(img: &RgbImage) -> usize {
        img.pixels().filter(|p| **p == INK).count()
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width(""), 0);
        assert_eq!(text_width("7"), 5);
        assert_eq!(text_width("15"), 11);
    }

    #[test]
    fn test_draw_one() {
        let mut img = RgbImage::new(8, 8);
        draw_text(&mut img, 1, 1, "1", INK);
        // stem of the "1"
        for y in 1..8 {
            assert_eq!(*img.get_pixel(3, y), INK, "row {y}");
        }
        assert_eq!(*img.get_pixel(0, 0), Rgb([0, 0, 0]));
        assert_eq!(ink_count(&img), 10);
    }

    #[test]
    fn test_draw_is_clipped() {
        let mut img = RgbImage::new(3, 3);
        draw_text(&mut img, 1, 1, "88", INK);
        assert!(ink_count(&img) > 0);

        let mut img = RgbImage::new(3, 3);
        draw_text(&mut img, 10, 10, "0", INK);
        assert_eq!(ink_count(&img), 0);
    }

    #[test]
    fn test_unknown_chars_draw_nothing() {
        let mut img = RgbImage::new(20, 10);
        draw_text(&mut img, 0, 0, "-x ", INK);
        assert_eq!(ink_count(&img), 0);
    }
}
