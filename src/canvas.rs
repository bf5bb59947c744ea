//! A small RGBA raster to draw frames into: clipped lines and 8x8
//! bitmap text, nothing more.  Frames are composed here and then
//! copied wholesale into the window's pixel buffer.

use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{Rgba, RgbaImage};

/// Width and height, in pixels, of one character cell.
pub const GLYPH: i64 = 8;

/// An RGB color.
pub type Color = [u8; 3];

/// The frame being drawn.
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// A black canvas of the given size.
    pub fn new(width: u32, height: u32) -> Canvas {
        Canvas {
            image: RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0xff])),
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Paints every pixel.
    pub fn clear(&mut self, color: Color) {
        let fill = Rgba([color[0], color[1], color[2], 0xff]);
        for pixel in self.image.pixels_mut() {
            *pixel = fill;
        }
    }

    /// Sets one pixel; anything off the raster is dropped.
    pub fn put(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= i64::from(self.width()) || y >= i64::from(self.height()) {
            return;
        }
        self.image
            .put_pixel(x as u32, y as u32, Rgba([color[0], color[1], color[2], 0xff]));
    }

    /// The color at a pixel, if it is on the raster.
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let p = self.image.get_pixel(x, y);
        Some([p[0], p[1], p[2]])
    }

    /// Bresenham between two screen positions.  Lines entirely to one
    /// side of the raster are skipped without being walked.
    pub fn line(&mut self, from: (f64, f64), to: (f64, f64), color: Color) {
        if !(from.0.is_finite() && from.1.is_finite() && to.0.is_finite() && to.1.is_finite()) {
            return;
        }
        let (w, h) = (f64::from(self.width()), f64::from(self.height()));
        if (from.0 < 0.0 && to.0 < 0.0)
            || (from.1 < 0.0 && to.1 < 0.0)
            || (from.0 >= w && to.0 >= w)
            || (from.1 >= h && to.1 >= h)
        {
            return;
        }

        let (mut x0, mut y0) = (from.0.round() as i64, from.1.round() as i64);
        let (x1, y1) = (to.0.round() as i64, to.1.round() as i64);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.put(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Writes `text` with its top-left corner at `(x, y)`.  Characters
    /// without a glyph leave a blank cell.
    pub fn text(&mut self, x: i64, y: i64, text: &str, color: Color) {
        for (i, ch) in text.chars().enumerate() {
            let glyph = match BASIC_FONTS.get(ch) {
                Some(glyph) => glyph,
                None => continue,
            };
            let left = x + (i as i64) * GLYPH;
            for (row, bits) in glyph.iter().enumerate() {
                for col in 0..8u8 {
                    if bits & (1u8 << col) != 0 {
                        self.put(left + i64::from(col), y + row as i64, color);
                    }
                }
            }
        }
    }

    /// Writes `text` centered on `(x, y)`.
    pub fn text_centered(&mut self, x: f64, y: f64, text: &str, color: Color) {
        let left = x.round() as i64 - text_width(text) / 2;
        let top = y.round() as i64 - GLYPH / 2;
        self.text(left, top, text, color);
    }

    /// Copies the raster into an RGBA8 buffer of the same dimensions.
    pub fn copy_to(&self, frame: &mut [u8]) {
        let raw = self.image.as_raw();
        let n = raw.len().min(frame.len());
        frame[..n].copy_from_slice(&raw[..n]);
    }
}

/// Pixel width of a line of text.
pub fn text_width(text: &str) -> i64 {
    (text.chars().count() as i64) * GLYPH
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Color = [255, 255, 255];
    const RED: Color = [255, 0, 0];

    #[test]
    fn clear_paints_everything() {
        let mut canvas = Canvas::new(4, 3);
        canvas.clear(WHITE);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(canvas.get(x, y), Some(WHITE));
            }
        }
        assert_eq!(canvas.get(4, 0), None);
    }

    #[test]
    fn line_covers_both_ends() {
        let mut canvas = Canvas::new(10, 10);
        canvas.line((1.0, 1.0), (8.0, 5.0), RED);
        assert_eq!(canvas.get(1, 1), Some(RED));
        assert_eq!(canvas.get(8, 5), Some(RED));
        canvas.line((0.0, 9.0), (0.0, 0.0), RED);
        for y in 0..10 {
            assert_eq!(canvas.get(0, y), Some(RED));
        }
    }

    #[test]
    fn lines_off_the_raster_are_clipped() {
        let mut canvas = Canvas::new(10, 10);
        canvas.line((-5.0, 5.0), (15.0, 5.0), RED);
        for x in 0..10 {
            assert_eq!(canvas.get(x, 5), Some(RED));
        }
        canvas.line((-1e12, 1.0), (-1e12 + 3.0, 2.0), RED);
        canvas.line((std::f64::NAN, 1.0), (3.0, 2.0), RED);
        assert_eq!(canvas.get(3, 2), Some([0, 0, 0]));
    }

    #[test]
    fn text_lands_in_its_cell() {
        let mut canvas = Canvas::new(32, 16);
        canvas.text(8, 4, "I", WHITE);
        let mut lit = 0;
        for y in 0..16 {
            for x in 0..32 {
                if canvas.get(x, y) == Some(WHITE) {
                    lit += 1;
                    assert!(x >= 8 && x < 16 && y >= 4 && y < 12);
                }
            }
        }
        assert!(lit > 0);
        assert_eq!(text_width("Frame 1/60"), 80);
    }

    #[test]
    fn copy_to_fills_an_rgba_frame() {
        let mut canvas = Canvas::new(2, 2);
        canvas.clear(RED);
        let mut frame = vec![0u8; 16];
        canvas.copy_to(&mut frame);
        assert_eq!(&frame[..4], &[255, 0, 0, 255]);
        assert_eq!(&frame[12..], &[255, 0, 0, 255]);
    }
}
