//! Software raster target: packed RGBA8 pixels, row-major.

use super::traits::DrawTarget;
use crate::api::types::Rgb;

pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Reallocate for a new viewport. Contents are zeroed.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels = vec![0; (width as usize) * (height as usize)];
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Pixels as RGBA bytes, e.g. for `ImageData`.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let [r, g, b, _] = self.pixels[y as usize * self.width as usize + x as usize].to_le_bytes();
        Some(Rgb::new(r, g, b))
    }

    /// Fill pixel rows `[y0, y1)` over columns `[x0, x1)`, already clipped.
    fn fill_span(&mut self, x0: u32, x1: u32, y0: u32, y1: u32, packed: u32) {
        for y in y0..y1 {
            let row = y as usize * self.width as usize;
            self.pixels[row + x0 as usize..row + x1 as usize].fill(packed);
        }
    }

    /// Clip a continuous interval to pixel indices whose centers fall inside it.
    fn clip(lo: f32, hi: f32, limit: u32) -> (u32, u32) {
        let start = (lo - 0.5).ceil().max(0.0);
        let end = (hi - 0.5).ceil().max(0.0);
        let start = (start as u32).min(limit);
        let end = (end as u32).min(limit);
        (start, end.max(start))
    }
}

impl DrawTarget for Framebuffer {
    fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color.to_rgba_u32());
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgb) {
        if radius <= 0.0 {
            return;
        }
        let packed = color.to_rgba_u32();
        let (y0, y1) = Self::clip(y - radius, y + radius, self.height);
        let r2 = radius * radius;
        for py in y0..y1 {
            let dy = py as f32 + 0.5 - y;
            let half = (r2 - dy * dy).max(0.0).sqrt();
            let (x0, x1) = Self::clip(x - half, x + half, self.width);
            self.fill_span(x0, x1, py, py + 1, packed);
        }
    }

    fn fill_column_rect(&mut self, x0: f32, x1: f32, y_top: f32, y_bottom: f32, color: Rgb) {
        let (cx0, cx1) = Self::clip(x0, x1, self.width);
        let (cy0, cy1) = Self::clip(y_top, y_bottom, self.height);
        self.fill_span(cx0, cx1, cy0, cy1, color.to_rgba_u32());
    }
}
