// src/geometry.rs

//! Integer points, resolved segments, and the interactive geometry used while
//! editing: projection onto segments, erasing gaps into lines, axis/diagonal
//! snapping and vertex picking.

use crate::canvas::{Line, VectorCanvas, VertexId};
use crate::color::Rgb;
use log::debug;
use serde::{Deserialize, Serialize};

/// Lower bound on how far the eraser reaches, whatever the brush size.
pub const MIN_ERASE_RADIUS: f64 = 3.0;

/// Default pick distance, in pixels, for grabbing a vertex to drag.
pub const VERTEX_PICK_THRESHOLD: f64 = 10.0;

/// A pixel coordinate. Equality and hashing are by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point) -> f64 {
        let dx = other.x as f64 - self.x as f64;
        let dy = other.y as f64 - self.y as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

/// A line resolved to concrete coordinates. This is what rasterizers draw,
/// whether it came from the canvas or is an uncommitted preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub color: Rgb,
    pub thickness: u32,
}

impl Segment {
    pub fn new(start: Point, end: Point, color: Rgb, thickness: u32) -> Self {
        Self {
            start,
            end,
            color,
            thickness,
        }
    }

    /// Radius of the square stamp drawn at each sample: `(thickness - 1) / 2`.
    pub fn half_thickness(&self) -> i32 {
        half_thickness(self.thickness)
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

pub fn half_thickness(thickness: u32) -> i32 {
    (thickness.max(1) as i32 - 1) / 2
}

/// Projects `p` onto the segment `a`-`b`, clamped to the segment.
///
/// Coordinates of the result are truncated toward zero. A zero-length
/// segment returns `a`.
pub fn closest_point_on_segment(p: Point, a: Point, b: Point) -> Point {
    let dx = b.x as f64 - a.x as f64;
    let dy = b.y as f64 - a.y as f64;
    if dx == 0.0 && dy == 0.0 {
        return a;
    }
    let t = projection(p, a, dx, dy).clamp(0.0, 1.0);
    Point::new((a.x as f64 + t * dx) as i32, (a.y as f64 + t * dy) as i32)
}

/// Unclamped projection parameter of `p` on the line through `a` with
/// direction `(dx, dy)`.
fn projection(p: Point, a: Point, dx: f64, dy: f64) -> f64 {
    ((p.x as f64 - a.x as f64) * dx + (p.y as f64 - a.y as f64) * dy) / (dx * dx + dy * dy)
}

/// Snaps `end` so that the line from `start` is horizontal, vertical or at 45°.
///
/// When neither axis dominates by more than a factor of two the result is on
/// a diagonal whose length is the larger delta. Otherwise the smaller delta
/// is dropped.
pub fn snap(start: Point, end: Point) -> Point {
    let dx = end.x.saturating_sub(start.x);
    let dy = end.y.saturating_sub(start.y);
    let adx = dx.saturating_abs();
    let ady = dy.saturating_abs();

    if adx.max(ady) <= adx.min(ady).saturating_mul(2) {
        let magnitude = adx.max(ady);
        Point::new(
            start.x.saturating_add(magnitude * dx.signum()),
            start.y.saturating_add(magnitude * dy.signum()),
        )
    } else if adx > ady {
        Point::new(end.x, start.y)
    } else {
        Point::new(start.x, end.y)
    }
}

/// Cuts a gap of width `2 * eraser_size` into every line near `click`.
///
/// A line qualifies when the click lies within `max(eraser_size, 3)` of it
/// and the line is longer than the gap. The gap is centred on the click's
/// projection; if it would run past either endpoint the line is left alone.
/// Each split line is replaced in place by two lines that keep the original
/// endpoint handles, color and thickness. Returns the number of lines split.
pub fn split_near(canvas: &mut VectorCanvas, click: Point, eraser_size: u32) -> usize {
    let eraser = eraser_size as f64;
    let reach = eraser.max(MIN_ERASE_RADIUS);

    let mut cuts: Vec<(Line, Point, Point)> = Vec::new();
    for (_, line) in canvas.iter_all() {
        let seg = canvas.segment(line);
        let (p1, p2) = (seg.start, seg.end);
        let closest = closest_point_on_segment(click, p1, p2);
        let length = seg.length();
        if click.distance(closest) > reach || length <= 2.0 * eraser {
            continue;
        }

        let dx = p2.x as f64 - p1.x as f64;
        let dy = p2.y as f64 - p1.y as f64;
        let t = projection(click, p1, dx, dy).clamp(0.0, 1.0);
        let t_gap = eraser / length;
        let (t1, t2) = (t - t_gap, t + t_gap);
        if t1 < 0.0 || t2 > 1.0 {
            continue;
        }

        let at = |t: f64| Point::new((p1.x as f64 + t * dx) as i32, (p1.y as f64 + t * dy) as i32);
        cuts.push((*line, at(t1), at(t2)));
    }

    for (line, gap_start, gap_end) in &cuts {
        let a = canvas.add_vertex(*gap_start);
        let b = canvas.add_vertex(*gap_end);
        let left = canvas.new_line(line.start(), a, line.color(), line.thickness());
        let right = canvas.new_line(b, line.end(), line.color(), line.thickness());
        canvas.replace_line(line.id(), &[left, right]);
        debug!(
            "split line {:?} with a gap from {:?} to {:?}",
            line.id(),
            gap_start,
            gap_end
        );
    }
    cuts.len()
}

/// Finds the first line endpoint strictly closer than `threshold` to `p`.
///
/// Solid lines are scanned before dotted ones, each in insertion order, and
/// for each line its start is checked before its end.
pub fn closest_vertex(canvas: &VectorCanvas, p: Point, threshold: f64) -> Option<VertexId> {
    for (_, line) in canvas.iter_all() {
        for id in [line.start(), line.end()] {
            if let Some(v) = canvas.vertex(id) {
                if p.distance(v) < threshold {
                    return Some(id);
                }
            }
        }
    }
    None
}
