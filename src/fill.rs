// src/fill.rs

//! Bounded flood fill and the fill log replayed on every render.

use crate::buffer::PixelBuffer;
use crate::color::Rgb;
use crate::geometry::Point;
use log::{debug, warn};
use std::collections::{HashSet, VecDeque};

/// Default cap on the number of pixels a single fill may write.
pub const MAX_FILL_SIZE: usize = 1_000_000;

/// Four-connected breadth-first region fill.
#[derive(Debug, Clone, Copy)]
pub struct FloodFill {
    max_fill_size: usize,
}

impl Default for FloodFill {
    fn default() -> Self {
        Self {
            max_fill_size: MAX_FILL_SIZE,
        }
    }
}

impl FloodFill {
    pub fn new(max_fill_size: usize) -> Self {
        Self { max_fill_size }
    }

    /// Fills the region of pixels sharing the seed's color with `color`.
    ///
    /// Returns the written points in the order they were filled. The result
    /// is empty when the seed is outside the buffer or already has `color`.
    /// When the region is larger than the cap the fill stops early, logs a
    /// warning and returns what it has written so far; that partial result
    /// is still a valid fill.
    pub fn fill(&self, buffer: &mut PixelBuffer, seed: Point, color: Rgb) -> Vec<Point> {
        let base = match buffer.get_pixel(seed.x, seed.y) {
            Some(base) if base != color => base,
            _ => return Vec::new(),
        };

        let mut pending = VecDeque::from([seed]);
        let mut processed = HashSet::from([seed]);
        let mut filled = Vec::new();

        while let Some(p) = pending.pop_front() {
            if buffer.get_pixel(p.x, p.y) != Some(base) {
                continue;
            }
            if filled.len() >= self.max_fill_size {
                warn!(
                    "fill from {:?} aborted after {} pixels: region exceeds the fill cap",
                    seed,
                    filled.len()
                );
                break;
            }

            buffer.set_pixel(p.x, p.y, color);
            filled.push(p);

            let neighbours = [
                Point::new(p.x + 1, p.y),
                Point::new(p.x - 1, p.y),
                Point::new(p.x, p.y + 1),
                Point::new(p.x, p.y - 1),
            ];
            for n in neighbours {
                if buffer.get_pixel(n.x, n.y) == Some(base) && processed.insert(n) {
                    pending.push_back(n);
                }
            }
        }

        debug!("fill from {:?} wrote {} pixels", seed, filled.len());
        filled
    }
}

/// One committed fill: the points it wrote and the color it wrote them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillOperation {
    points: Vec<Point>,
    color: Rgb,
}

impl FillOperation {
    pub fn new(points: Vec<Point>, color: Rgb) -> Self {
        Self { points, color }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Writes the recorded points again. Points outside the buffer are skipped.
    pub fn replay(&self, buffer: &mut PixelBuffer) {
        for p in &self.points {
            buffer.set_pixel(p.x, p.y, self.color);
        }
    }
}
