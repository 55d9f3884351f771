//! Scan conversion of vector primitives into `PixelBuffer` writes.
//!
//! ```text
//! Segment / center+edge / corner+drag  →  [Rasterizer]  →  PixelBuffer
//!   LineRasterizer        every sample on the dominant axis
//!   DottedLineRasterizer  every (thickness + 5)th sample
//!   CircleRasterizer      concentric midpoint rings
//!   SquareRasterizer      four LineRasterizer edges
//! ```
//!
//! Nothing here clips geometry. Stamps may fall partly or wholly outside the
//! buffer and are dropped pixel by pixel by `PixelBuffer::set_pixel`.

pub mod circle;
pub mod line;
pub mod square;

pub use circle::CircleRasterizer;
pub use line::{DottedLineRasterizer, LineRasterizer};
pub use square::{square_corners, SquareRasterizer};

use crate::buffer::PixelBuffer;
use crate::canvas::{LineStyle, VectorCanvas};
use crate::color::Rgb;
use crate::geometry::Segment;
use log::trace;

/// The single line-rasterizer contract: draw one segment, or many.
///
/// The color travels with the segment, so there is no separate color state.
pub trait Rasterizer {
    fn rasterize(&self, buffer: &mut PixelBuffer, segment: &Segment);

    fn rasterize_all<I>(&self, buffer: &mut PixelBuffer, segments: I)
    where
        I: IntoIterator<Item = Segment>,
        Self: Sized,
    {
        for segment in segments {
            self.rasterize(buffer, &segment);
        }
    }
}

/// Writes a `(2 * half + 1)`-sided square centred on `(x, y)`.
pub fn stamp(buffer: &mut PixelBuffer, x: i32, y: i32, half: i32, color: Rgb) {
    for dx in -half..=half {
        for dy in -half..=half {
            buffer.set_pixel(x.saturating_add(dx), y.saturating_add(dy), color);
        }
    }
}

/// Draws canvas lines, picking the rasterizer from the line's style.
#[derive(Debug, Default, Clone, Copy)]
pub struct CanvasRasterizer {
    solid: LineRasterizer,
    dotted: DottedLineRasterizer,
}

impl CanvasRasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rasterize_line(&self, buffer: &mut PixelBuffer, style: LineStyle, segment: &Segment) {
        match style {
            LineStyle::Solid => self.solid.rasterize(buffer, segment),
            LineStyle::Dotted => self.dotted.rasterize(buffer, segment),
        }
    }

    /// All solid lines, then all dotted lines, each in insertion order.
    pub fn rasterize_canvas(&self, buffer: &mut PixelBuffer, canvas: &VectorCanvas) {
        trace!(
            "rasterizing canvas: {} solid, {} dotted",
            canvas.lines().len(),
            canvas.dotted_lines().len()
        );
        self.solid
            .rasterize_all(buffer, canvas.lines().iter().map(|l| canvas.segment(l)));
        self.dotted
            .rasterize_all(buffer, canvas.dotted_lines().iter().map(|l| canvas.segment(l)));
    }
}
