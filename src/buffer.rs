// src/buffer.rs

//! The fixed-size pixel buffer every rasterizer writes into.
//!
//! Reads and writes outside the buffer are silently ignored. Rasterizers rely
//! on this: they stream candidate pixels without clipping geometry first.

use crate::color::Rgb;

/// A row-major grid of packed colors with a background color used by `clear`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    clear_color: Rgb,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    /// Creates a buffer already cleared to `clear_color`.
    pub fn new(width: usize, height: usize, clear_color: Rgb) -> Self {
        Self {
            width,
            height,
            clear_color,
            pixels: vec![clear_color; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear_color(&self) -> Rgb {
        self.clear_color
    }

    /// Changes the background color. Takes effect on the next `clear`.
    pub fn set_clear_color(&mut self, color: Rgb) {
        self.clear_color = color;
    }

    /// Resets every pixel to the background color.
    pub fn clear(&mut self) {
        self.pixels.fill(self.clear_color);
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    /// Returns `None` for coordinates outside the buffer.
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Writes one pixel. Out-of-range writes are dropped.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Read view of all pixels, row-major.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Packed `[r, g, b]` bytes, row-major, for blitting or PPM output.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for pixel in &self.pixels {
            bytes.extend_from_slice(&pixel.to_bytes());
        }
        bytes
    }
}
