//! Drawing surface with clipped primitives.

use image::{Rgb, RgbImage};

/// RGB drawing surface
///
/// Every primitive takes signed coordinates and silently clips whatever
/// falls outside the image.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Create a canvas filled with `background`
    pub fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, background),
        }
    }

    /// Canvas width
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Canvas height
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Borrow the underlying image
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Consume the canvas
    pub fn into_image(self) -> RgbImage {
        self.image
    }

    fn coords(&self, x: i32, y: i32) -> Option<(u32, u32)> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        (x < self.image.width() && y < self.image.height()).then_some((x, y))
    }

    /// Set one pixel
    pub fn put(&mut self, x: i32, y: i32, color: Rgb<u8>) {
        if let Some((x, y)) = self.coords(x, y) {
            self.image.put_pixel(x, y, color);
        }
    }

    /// Mix `color` into one pixel with `coverage` in `0.0..=1.0`
    pub fn blend(&mut self, x: i32, y: i32, color: Rgb<u8>, coverage: f32) {
        let Some((x, y)) = self.coords(x, y) else {
            return;
        };
        let alpha = coverage.clamp(0.0, 1.0);
        let pixel = self.image.get_pixel_mut(x, y);
        for (dst, src) in pixel.0.iter_mut().zip(color.0) {
            let mixed = f32::from(*dst) * (1.0 - alpha) + f32::from(src) * alpha;
            *dst = mixed.round() as u8;
        }
    }

    /// Fill an axis-aligned rectangle with its top-left corner at `(x, y)`
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb<u8>) {
        let clip = |start: i32, len: u32, limit: u32| {
            let end = i64::from(start) + i64::from(len);
            let end = end.min(i64::from(limit));
            (i64::from(start.max(0)), end)
        };
        let (x0, x1) = clip(x, width, self.image.width());
        let (y0, y1) = clip(y, height, self.image.height());

        for py in y0..y1 {
            for px in x0..x1 {
                // both bounds are inside the image here
                self.image.put_pixel(px as u32, py as u32, color);
            }
        }
    }

    /// Draw a straight line with a square brush `stroke` pixels wide
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, stroke: u32, color: Rgb<u8>) {
        let stroke = stroke.max(1);
        let offset = (stroke as i32 - 1) / 2;

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.fill_rect(x - offset, y - offset, stroke, stroke, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Draw a circle outline whose ring lies inside `radius`
    pub fn draw_circle_outline(&mut self, cx: i32, cy: i32, radius: u32, stroke: u32, color: Rgb<u8>) {
        let r = i64::from(radius);
        let inner = (r - i64::from(stroke.max(1))).max(0);
        let (outer_sq, inner_sq) = (r * r, inner * inner);

        for dy in -r..=r {
            for dx in -r..=r {
                let d2 = dx * dx + dy * dy;
                if d2 <= outer_sq && (inner == 0 || d2 > inner_sq) {
                    self.put(cx + dx as i32, cy + dy as i32, color);
                }
            }
        }
    }
}
