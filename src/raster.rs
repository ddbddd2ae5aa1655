//! Offscreen software canvas.
//!
//! A plain RGBA pixel buffer implementing [`Canvas`], for running the
//! simulation without any windowing stack: headless demos, golden-frame
//! debugging, CI smoke runs. Circles are scanline-filled (with an additive
//! halo in [`RenderMode::Glow`]), lines are alpha-blended DDA strokes, and
//! HUD text uses a built-in 5x7 bitmap font. Frames export as PNG.
//!
//! The core never requires this type; it exists alongside
//! [`RecordingCanvas`](crate::surface::RecordingCanvas) as one of the two
//! surfaces the crate can stand up on its own.

use crate::error::ExportError;
use crate::surface::Canvas;
use crate::visuals::{Hsl, RenderMode};
use glam::Vec2;
use image::{codecs::png::PngEncoder, ExtendedColorType, ImageEncoder};
use std::io::BufWriter;
use std::path::Path;

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;
const GLYPH_SCALE: u32 = 2;
/// Horizontal advance per character, in pixels.
const CHAR_ADVANCE: f32 = (GLYPH_WIDTH + 1) as f32 * GLYPH_SCALE as f32;

/// RGBA frame buffer with software rasterization.
#[derive(Debug)]
pub struct RasterCanvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterCanvas {
    /// Create an opaque black frame buffer.
    pub fn new(width: u32, height: u32) -> Self {
        let mut canvas = Self {
            width,
            height,
            pixels: vec![0; (width * height * 4) as usize],
        };
        canvas.clear();
        canvas
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA pixel data, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA value at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.width + x) * 4) as usize;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    /// Encode the current frame as a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let file = std::fs::File::create(path)?;
        let encoder = PngEncoder::new(BufWriter::new(file));
        encoder.write_image(&self.pixels, self.width, self.height, ExtendedColorType::Rgba8)?;
        Ok(())
    }

    /// Blend `color` over the pixel at `(x, y)` with the given opacity.
    fn blend(&mut self, x: i32, y: i32, color: [u8; 4], alpha: f32) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let alpha = alpha.clamp(0.0, 1.0);
        let i = ((y as u32 * self.width + x as u32) * 4) as usize;
        for channel in 0..3 {
            let old = self.pixels[i + channel] as f32;
            let new = color[channel] as f32;
            self.pixels[i + channel] = (old + (new - old) * alpha).round() as u8;
        }
        self.pixels[i + 3] = 255;
    }

    /// Additively brighten the pixel at `(x, y)`.
    fn glow(&mut self, x: i32, y: i32, color: [u8; 4], strength: f32) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let i = ((y as u32 * self.width + x as u32) * 4) as usize;
        for channel in 0..3 {
            let old = self.pixels[i + channel] as f32;
            let add = color[channel] as f32 * strength;
            self.pixels[i + channel] = (old + add).min(255.0) as u8;
        }
        self.pixels[i + 3] = 255;
    }

    fn fill_disc(&mut self, center: Vec2, radius: f32, color: [u8; 4]) {
        let r2 = radius * radius;
        let min_y = (center.y - radius).floor() as i32;
        let max_y = (center.y + radius).ceil() as i32;
        let min_x = (center.x - radius).floor() as i32;
        let max_x = (center.x + radius).ceil() as i32;

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                if dx * dx + dy * dy <= r2 {
                    self.blend(x, y, color, 1.0);
                }
            }
        }
    }

    fn halo(&mut self, center: Vec2, radius: f32, color: [u8; 4]) {
        let outer = radius * 2.5;
        let outer2 = outer * outer;
        let min_y = (center.y - outer).floor() as i32;
        let max_y = (center.y + outer).ceil() as i32;
        let min_x = (center.x - outer).floor() as i32;
        let max_x = (center.x + outer).ceil() as i32;

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                let d2 = dx * dx + dy * dy;
                if d2 <= outer2 {
                    let falloff = 1.0 - (d2.sqrt() / outer);
                    self.glow(x, y, color, falloff * falloff * 0.5);
                }
            }
        }
    }

    fn draw_glyph(&mut self, c: char, origin: Vec2, color: [u8; 4]) {
        let Some(rows) = glyph(c) else { return };
        for (row, &bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                    continue;
                }
                for sy in 0..GLYPH_SCALE {
                    for sx in 0..GLYPH_SCALE {
                        self.blend(
                            origin.x as i32 + (col * GLYPH_SCALE + sx) as i32,
                            origin.y as i32 + (row as u32 * GLYPH_SCALE + sy) as i32,
                            color,
                            1.0,
                        );
                    }
                }
            }
        }
    }
}

impl Canvas for RasterCanvas {
    fn clear(&mut self) {
        for (i, byte) in self.pixels.iter_mut().enumerate() {
            *byte = if i % 4 == 3 { 255 } else { 0 };
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Hsl, mode: RenderMode) {
        let rgba = color.to_rgba();
        if mode == RenderMode::Glow {
            self.halo(center, radius, rgba);
        }
        self.fill_disc(center, radius, rgba);
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Hsl, width: f32) {
        let rgba = color.to_rgba();
        let alpha = width.clamp(0.0, 1.0);
        let delta = to - from;
        let steps = delta.length().ceil().max(1.0) as i32;
        for i in 0..=steps {
            let p = from + delta * (i as f32 / steps as f32);
            self.blend(p.x as i32, p.y as i32, rgba, alpha);
        }
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, fill: Hsl, outline: Hsl) {
        let top = Vec2::new(pos.x, pos.y - (GLYPH_HEIGHT * GLYPH_SCALE) as f32);
        let fill = fill.to_rgba();
        let outline = outline.to_rgba();

        for (i, c) in text.chars().enumerate() {
            let origin = top + Vec2::new(i as f32 * CHAR_ADVANCE, 0.0);
            for (ox, oy) in [(-1.0, 0.0), (1.0, 0.0), (0.0, -1.0), (0.0, 1.0)] {
                self.draw_glyph(c, origin + Vec2::new(ox, oy), outline);
            }
            self.draw_glyph(c, origin, fill);
        }
    }

    fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * CHAR_ADVANCE
    }
}

/// 5x7 bitmap for a character, one byte per row, low 5 bits used.
///
/// Covers the HUD's glyph set: digits, basic Latin letters (lowercase maps
/// to uppercase), and light punctuation. Unknown characters render blank
/// but still advance.
fn glyph(c: char) -> Option<[u8; 7]> {
    let rows = match c.to_ascii_uppercase() {
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x1B, 0x11],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        ':' => [0x00, 0x04, 0x00, 0x00, 0x04, 0x00, 0x00],
        ';' => [0x00, 0x04, 0x00, 0x00, 0x04, 0x04, 0x08],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        ',' => [0x00, 0x00, 0x00, 0x00, 0x04, 0x04, 0x08],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        '!' => [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04],
        _ => return None,
    };
    Some(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_opaque_black() {
        let canvas = RasterCanvas::new(4, 4);
        assert_eq!(canvas.pixel(0, 0), [0, 0, 0, 255]);
        assert_eq!(canvas.pixel(3, 3), [0, 0, 0, 255]);
    }

    #[test]
    fn test_circle_fills_center() {
        let mut canvas = RasterCanvas::new(20, 20);
        canvas.fill_circle(Vec2::new(10.0, 10.0), 3.0, Hsl::vivid(0.0), RenderMode::Basic);
        assert_eq!(canvas.pixel(10, 10), [255, 0, 0, 255]);
        // Well outside the radius stays black.
        assert_eq!(canvas.pixel(1, 1), [0, 0, 0, 255]);
    }

    #[test]
    fn test_glow_brightens_beyond_core() {
        let mut canvas = RasterCanvas::new(40, 40);
        canvas.fill_circle(Vec2::new(20.0, 20.0), 3.0, Hsl::vivid(0.0), RenderMode::Glow);
        // A pixel outside the disc but inside the halo picks up light.
        let halo = canvas.pixel(25, 20);
        assert!(halo[0] > 0);
    }

    #[test]
    fn test_line_touches_endpoints() {
        let mut canvas = RasterCanvas::new(20, 20);
        canvas.line(Vec2::new(2.0, 2.0), Vec2::new(17.0, 2.0), Hsl::WHITE, 1.0);
        assert_eq!(canvas.pixel(2, 2), [255, 255, 255, 255]);
        assert_eq!(canvas.pixel(17, 2), [255, 255, 255, 255]);
        assert_eq!(canvas.pixel(10, 10), [0, 0, 0, 255]);
    }

    #[test]
    fn test_offscreen_draws_are_clipped() {
        let mut canvas = RasterCanvas::new(10, 10);
        canvas.fill_circle(Vec2::new(-50.0, -50.0), 5.0, Hsl::WHITE, RenderMode::Basic);
        canvas.line(Vec2::new(-5.0, 5.0), Vec2::new(15.0, 5.0), Hsl::WHITE, 1.0);
        // No panic, and the in-bounds part of the line landed.
        assert_eq!(canvas.pixel(5, 5), [255, 255, 255, 255]);
    }

    #[test]
    fn test_text_marks_pixels() {
        let mut canvas = RasterCanvas::new(200, 40);
        canvas.fill_text("FPS: 60", Vec2::new(10.0, 30.0), Hsl::WHITE, Hsl::BLACK);
        let lit = canvas
            .pixels()
            .chunks(4)
            .filter(|px| px[0] > 0 || px[1] > 0 || px[2] > 0)
            .count();
        assert!(lit > 0);
    }

    #[test]
    fn test_text_width_scales_with_length() {
        let canvas = RasterCanvas::new(10, 10);
        assert_eq!(canvas.text_width(""), 0.0);
        assert!(canvas.text_width("Eaten: 3") > canvas.text_width("FPS"));
    }

    #[test]
    fn test_hud_glyphs_are_covered() {
        for c in "Eaten: 0; Lost: 9Click to create fireworkFPS:Particles".chars() {
            if c != ' ' {
                assert!(glyph(c).is_some(), "missing glyph for {:?}", c);
            }
        }
    }

    #[test]
    fn test_save_png_writes_file() {
        let mut canvas = RasterCanvas::new(16, 16);
        canvas.fill_circle(Vec2::new(8.0, 8.0), 4.0, Hsl::vivid(120.0), RenderMode::Basic);

        let path = std::env::temp_dir().join("sparkfield_raster_test.png");
        canvas.save_png(&path).unwrap();
        assert!(path.metadata().unwrap().len() > 0);
        std::fs::remove_file(path).ok();
    }
}
