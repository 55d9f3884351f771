//! Slope-sampling line scan conversion, solid and dotted.
//!
//! One sample is taken per unit step along the dominant axis (per stride
//! step for dotted lines). The minor coordinate comes from the line equation
//! `y = k*x + q` evaluated in `f32` and rounded half up, which is the exact
//! pixel pattern the rest of the drawing relies on. This is not Bresenham.

use super::{stamp, Rasterizer};
use crate::buffer::PixelBuffer;
use crate::geometry::Segment;

/// Gap, in pixels, added to the thickness to get the dotted stride.
pub const DOTTED_GAP: u32 = 5;

/// Draws a thick-point stamp at every sample of a segment.
#[derive(Debug, Default, Clone, Copy)]
pub struct LineRasterizer;

/// Draws a thick-point stamp at every `thickness + DOTTED_GAP`th sample.
#[derive(Debug, Default, Clone, Copy)]
pub struct DottedLineRasterizer;

impl Rasterizer for LineRasterizer {
    fn rasterize(&self, buffer: &mut PixelBuffer, segment: &Segment) {
        let half = segment.half_thickness();
        let window = SampleWindow::covering(buffer, half);
        for_each_sample(segment, 1, window, |x, y| stamp(buffer, x, y, half, segment.color));
    }
}

impl Rasterizer for DottedLineRasterizer {
    fn rasterize(&self, buffer: &mut PixelBuffer, segment: &Segment) {
        let half = segment.half_thickness();
        let stride = dotted_stride(segment.thickness);
        let window = SampleWindow::covering(buffer, half);
        for_each_sample(segment, stride, window, |x, y| stamp(buffer, x, y, half, segment.color));
    }
}

pub fn dotted_stride(thickness: u32) -> usize {
    (thickness.max(1) + DOTTED_GAP) as usize
}

/// Rounds to the nearest integer, halves toward positive infinity.
///
/// The `+ 0.5` happens in `f64`, where it is exact for every `f32`.
fn round_half_up(v: f32) -> i32 {
    (f64::from(v) + 0.5).floor() as i32
}

/// Inclusive bounds on the sampled coordinates of a line.
///
/// Only the dominant-axis loop is clipped, so the samples that remain are
/// the same ones an unclipped pass would produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleWindow {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl SampleWindow {
    pub const UNBOUNDED: SampleWindow = SampleWindow {
        min_x: i32::MIN,
        max_x: i32::MAX,
        min_y: i32::MIN,
        max_y: i32::MAX,
    };

    /// Sample positions whose stamp of `half` can still reach `buffer`.
    pub fn covering(buffer: &PixelBuffer, half: i32) -> Self {
        let width = i32::try_from(buffer.width()).unwrap_or(i32::MAX);
        let height = i32::try_from(buffer.height()).unwrap_or(i32::MAX);
        SampleWindow {
            min_x: half.saturating_neg(),
            max_x: (width - 1).saturating_add(half),
            min_y: half.saturating_neg(),
            max_y: (height - 1).saturating_add(half),
        }
    }
}

/// Positions `min(a, b) + n * stride` up to `max(a, b)`, restricted to
/// `lo..=hi`.
fn clipped_steps(a: i32, b: i32, lo: i32, hi: i32, stride: usize) -> impl Iterator<Item = i32> {
    let stride = stride.max(1);
    let step = stride as i64;
    let from = i64::from(a.min(b));
    let skipped = (i64::from(lo) - from).max(0);
    let first = from + (skipped + step - 1) / step * step;
    let last = i64::from(a.max(b)).min(i64::from(hi));
    // Every value in `first..=last` lies inside `lo..=hi`.
    (first..=last).step_by(stride).map(|v| v as i32)
}

/// Visits the sampled pixel positions of `segment`, stepping `stride` along
/// the dominant axis from the smaller coordinate.
///
/// Branches, in order: vertical, horizontal, then slope-based with x as the
/// loop variable when `|k| < 1` and y otherwise. Samples outside `window`
/// on the dominant axis are skipped without being computed.
pub fn for_each_sample(
    segment: &Segment,
    stride: usize,
    window: SampleWindow,
    mut visit: impl FnMut(i32, i32),
) {
    let (x1, y1) = (segment.start.x, segment.start.y);
    let (x2, y2) = (segment.end.x, segment.end.y);
    let SampleWindow {
        min_x,
        max_x,
        min_y,
        max_y,
    } = window;

    if x1 == x2 {
        for y in clipped_steps(y1, y2, min_y, max_y, stride) {
            visit(x1, y);
        }
        return;
    }

    if y1 == y2 {
        for x in clipped_steps(x1, x2, min_x, max_x, stride) {
            visit(x, y1);
        }
        return;
    }

    let k = (i64::from(y2) - i64::from(y1)) as f32 / (i64::from(x2) - i64::from(x1)) as f32;
    let q = y1 as f32 - k * x1 as f32;

    if k.abs() < 1.0 {
        for x in clipped_steps(x1, x2, min_x, max_x, stride) {
            visit(x, round_half_up(k * x as f32 + q));
        }
    } else {
        for y in clipped_steps(y1, y2, min_y, max_y, stride) {
            visit(round_half_up((y as f32 - q) / k), y);
        }
    }
}
