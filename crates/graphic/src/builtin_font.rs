//! Built-in 5x7 bitmap font covering printable ASCII.
//!
//! Each glyph is five column bytes; bit 0 is the top row.

use crate::Canvas;
use image::Rgb;

pub(crate) const GLYPH_COLUMNS: u32 = 5;
pub(crate) const GLYPH_ROWS: u32 = 7;
/// Columns per character cell, including one blank spacing column
pub(crate) const CELL_COLUMNS: u32 = GLYPH_COLUMNS + 1;
/// Nominal pixel size of one unscaled cell
const NATIVE_SIZE: f32 = 8.0;

#[rustfmt::skip]
const GLYPHS: [[u8; 5]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x00, 0x5F, 0x00, 0x00], // !
    [0x00, 0x07, 0x00, 0x07, 0x00], // "
    [0x14, 0x7F, 0x14, 0x7F, 0x14], // #
    [0x24, 0x2A, 0x7F, 0x2A, 0x12], // $
    [0x23, 0x13, 0x08, 0x64, 0x62], // %
    [0x36, 0x49, 0x55, 0x22, 0x50], // &
    [0x00, 0x05, 0x03, 0x00, 0x00], // '
    [0x00, 0x1C, 0x22, 0x41, 0x00], // (
    [0x00, 0x41, 0x22, 0x1C, 0x00], // )
    [0x08, 0x2A, 0x1C, 0x2A, 0x08], // *
    [0x08, 0x08, 0x3E, 0x08, 0x08], // +
    [0x00, 0x50, 0x30, 0x00, 0x00], // ,
    [0x08, 0x08, 0x08, 0x08, 0x08], // -
    [0x00, 0x60, 0x60, 0x00, 0x00], // .
    [0x20, 0x10, 0x08, 0x04, 0x02], // /
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // 0
    [0x00, 0x42, 0x7F, 0x40, 0x00], // 1
    [0x42, 0x61, 0x51, 0x49, 0x46], // 2
    [0x21, 0x41, 0x45, 0x4B, 0x31], // 3
    [0x18, 0x14, 0x12, 0x7F, 0x10], // 4
    [0x27, 0x45, 0x45, 0x45, 0x39], // 5
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // 6
    [0x01, 0x71, 0x09, 0x05, 0x03], // 7
    [0x36, 0x49, 0x49, 0x49, 0x36], // 8
    [0x06, 0x49, 0x49, 0x29, 0x1E], // 9
    [0x00, 0x36, 0x36, 0x00, 0x00], // :
    [0x00, 0x56, 0x36, 0x00, 0x00], // ;
    [0x08, 0x14, 0x22, 0x41, 0x00], // <
    [0x14, 0x14, 0x14, 0x14, 0x14], // =
    [0x00, 0x41, 0x22, 0x14, 0x08], // >
    [0x02, 0x01, 0x51, 0x09, 0x06], // ?
    [0x32, 0x49, 0x79, 0x41, 0x3E], // @
    [0x7E, 0x11, 0x11, 0x11, 0x7E], // A
    [0x7F, 0x49, 0x49, 0x49, 0x36], // B
    [0x3E, 0x41, 0x41, 0x41, 0x22], // C
    [0x7F, 0x41, 0x41, 0x22, 0x1C], // D
    [0x7F, 0x49, 0x49, 0x49, 0x41], // E
    [0x7F, 0x09, 0x09, 0x09, 0x01], // F
    [0x3E, 0x41, 0x49, 0x49, 0x7A], // G
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // H
    [0x00, 0x41, 0x7F, 0x41, 0x00], // I
    [0x20, 0x40, 0x41, 0x3F, 0x01], // J
    [0x7F, 0x08, 0x14, 0x22, 0x41], // K
    [0x7F, 0x40, 0x40, 0x40, 0x40], // L
    [0x7F, 0x02, 0x0C, 0x02, 0x7F], // M
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // N
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // O
    [0x7F, 0x09, 0x09, 0x09, 0x06], // P
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // Q
    [0x7F, 0x09, 0x19, 0x29, 0x46], // R
    [0x46, 0x49, 0x49, 0x49, 0x31], // S
    [0x01, 0x01, 0x7F, 0x01, 0x01], // T
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // U
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // V
    [0x3F, 0x40, 0x38, 0x40, 0x3F], // W
    [0x63, 0x14, 0x08, 0x14, 0x63], // X
    [0x07, 0x08, 0x70, 0x08, 0x07], // Y
    [0x61, 0x51, 0x49, 0x45, 0x43], // Z
    [0x00, 0x7F, 0x41, 0x41, 0x00], // [
    [0x02, 0x04, 0x08, 0x10, 0x20], // backslash
    [0x00, 0x41, 0x41, 0x7F, 0x00], // ]
    [0x04, 0x02, 0x01, 0x02, 0x04], // ^
    [0x40, 0x40, 0x40, 0x40, 0x40], // _
    [0x00, 0x01, 0x02, 0x04, 0x00], // `
    [0x20, 0x54, 0x54, 0x54, 0x78], // a
    [0x7F, 0x48, 0x44, 0x44, 0x38], // b
    [0x38, 0x44, 0x44, 0x44, 0x20], // c
    [0x38, 0x44, 0x44, 0x48, 0x7F], // d
    [0x38, 0x54, 0x54, 0x54, 0x18], // e
    [0x08, 0x7E, 0x09, 0x01, 0x02], // f
    [0x0C, 0x52, 0x52, 0x52, 0x3E], // g
    [0x7F, 0x08, 0x04, 0x04, 0x78], // h
    [0x00, 0x44, 0x7D, 0x40, 0x00], // i
    [0x20, 0x40, 0x44, 0x3D, 0x00], // j
    [0x7F, 0x10, 0x28, 0x44, 0x00], // k
    [0x00, 0x41, 0x7F, 0x40, 0x00], // l
    [0x7C, 0x04, 0x18, 0x04, 0x78], // m
    [0x7C, 0x08, 0x04, 0x04, 0x78], // n
    [0x38, 0x44, 0x44, 0x44, 0x38], // o
    [0x7C, 0x14, 0x14, 0x14, 0x08], // p
    [0x08, 0x14, 0x14, 0x18, 0x7C], // q
    [0x7C, 0x08, 0x04, 0x04, 0x08], // r
    [0x48, 0x54, 0x54, 0x54, 0x20], // s
    [0x04, 0x3F, 0x44, 0x40, 0x20], // t
    [0x3C, 0x40, 0x40, 0x20, 0x7C], // u
    [0x1C, 0x20, 0x40, 0x20, 0x1C], // v
    [0x3C, 0x40, 0x30, 0x40, 0x3C], // w
    [0x44, 0x28, 0x10, 0x28, 0x44], // x
    [0x0C, 0x50, 0x50, 0x50, 0x3C], // y
    [0x44, 0x64, 0x54, 0x4C, 0x44], // z
    [0x00, 0x08, 0x36, 0x41, 0x00], // {
    [0x00, 0x00, 0x7F, 0x00, 0x00], // |
    [0x00, 0x41, 0x36, 0x08, 0x00], // }
    [0x08, 0x04, 0x08, 0x10, 0x08], // ~
];

/// Glyph columns for `ch`, substituting `?` outside printable ASCII
fn glyph(ch: char) -> &'static [u8; 5] {
    let code = ch as u32;
    let index = if (0x20..=0x7E).contains(&code) { code - 0x20 } else { u32::from(b'?') - 0x20 };
    &GLYPHS[index as usize]
}

/// Integer scale factor for a requested pixel size
pub(crate) fn scale_for(size: f32) -> u32 {
    if size.is_finite() && size > NATIVE_SIZE {
        (size / NATIVE_SIZE).round() as u32
    } else {
        1
    }
}

/// Width and height of `text` rendered at `size`
pub(crate) fn measure(text: &str, size: f32) -> (u32, u32) {
    let scale = scale_for(size);
    let count = text.chars().count() as u32;
    if count == 0 {
        return (0, 0);
    }
    // no spacing column after the last character
    let width = count
        .checked_mul(CELL_COLUMNS)
        .and_then(|columns| (columns - 1).checked_mul(scale))
        .unwrap_or(u32::MAX);
    (width, GLYPH_ROWS.saturating_mul(scale))
}

/// Draw `text` with its top-left corner at `(x, y)`
pub(crate) fn draw(canvas: &mut Canvas, text: &str, x: i32, y: i32, size: f32, color: Rgb<u8>) {
    let scale = scale_for(size);
    let step = i32::try_from(scale).unwrap_or(i32::MAX);
    let mut cursor = x;

    for ch in text.chars() {
        for (col, bits) in (0i32..).zip(glyph(ch)) {
            for row in 0..GLYPH_ROWS as i32 {
                if bits & (1 << row) != 0 {
                    let px = cursor.saturating_add(col.saturating_mul(step));
                    let py = y.saturating_add(row.saturating_mul(step));
                    canvas.fill_rect(px, py, scale, scale, color);
                }
            }
        }
        cursor = cursor.saturating_add((CELL_COLUMNS as i32).saturating_mul(step));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_for_sizes() {
        assert_eq!(scale_for(8.0), 1);
        assert_eq!(scale_for(40.0), 5);
        assert_eq!(scale_for(80.0), 10);
        assert_eq!(scale_for(f32::NAN), 1);
        assert_eq!(scale_for(-3.0), 1);
    }

    #[test]
    fn test_measure() {
        assert_eq!(measure("", 80.0), (0, 0));
        assert_eq!(measure("A", 8.0), (5, 7));
        assert_eq!(measure("PocketPilot", 80.0), (650, 70));
    }

    #[test]
    fn test_measure_saturates_for_huge_sizes() {
        assert_eq!(measure("PocketPilot", 1.0e9), (u32::MAX, 7 * 125_000_000));
        assert_eq!(measure("A", f32::MAX), (u32::MAX, u32::MAX));
    }

    #[test]
    fn test_non_ascii_falls_back_to_question_mark() {
        assert_eq!(glyph('é'), glyph('?'));
        assert_eq!(glyph('A'), &[0x7E, 0x11, 0x11, 0x11, 0x7E]);
    }

    #[test]
    fn test_draw_sets_pixels_inside_measured_box() {
        let bg = Rgb([0, 0, 0]);
        let fg = Rgb([255, 255, 255]);
        let mut canvas = Canvas::new(40, 20, bg);
        draw(&mut canvas, "Hi", 2, 3, 16.0, fg);

        let (w, h) = measure("Hi", 16.0);
        let lit: Vec<(u32, u32)> = canvas
            .image()
            .enumerate_pixels()
            .filter(|(_, _, p)| **p == fg)
            .map(|(x, y, _)| (x, y))
            .collect();

        assert!(!lit.is_empty());
        assert!(lit.iter().all(|&(x, y)| (2..2 + w).contains(&x) && (3..3 + h).contains(&y)));
    }
}
