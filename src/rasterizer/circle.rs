//! Midpoint circle outlines, thickened by drawing concentric rings.

use crate::buffer::PixelBuffer;
use crate::color::Rgb;
use crate::geometry::Point;
use log::trace;

#[derive(Debug, Default, Clone, Copy)]
pub struct CircleRasterizer;

impl CircleRasterizer {
    /// Draws a circle around `center` passing through `edge`.
    ///
    /// The radius is the center-edge distance truncated to an integer. Thickness
    /// is simulated with one single-pixel ring per radius in
    /// `[radius - thickness/2, radius + (thickness-1)/2]`, the inner bound
    /// clamped at zero. Very thick rings can leave pinhole gaps between
    /// neighbouring radii.
    pub fn rasterize(
        &self,
        buffer: &mut PixelBuffer,
        center: Point,
        edge: Point,
        color: Rgb,
        thickness: u32,
    ) {
        let radius = center.distance(edge) as i64;
        let thickness = i64::from(thickness.max(1));
        let inner = (radius - thickness / 2).max(0);
        // Rings past the farthest buffer corner cannot land a pixel.
        let outer = (radius + (thickness - 1) / 2).min(reach(buffer, center));
        trace!(
            "circle at {:?}: radius {} rings {}..={}",
            center,
            radius,
            inner,
            outer
        );
        for r in inner..=outer {
            draw_ring(buffer, center, r, color);
        }
    }
}

/// Distance from `center` to the farthest buffer corner, rounded up, plus
/// the midpoint ring's one-pixel slack.
fn reach(buffer: &PixelBuffer, center: Point) -> i64 {
    let span = |c: i32, len: usize| {
        let c = f64::from(c);
        c.abs().max((c - (len as f64 - 1.0)).abs())
    };
    let dx = span(center.x, buffer.width());
    let dy = span(center.y, buffer.height());
    dx.hypot(dy).ceil() as i64 + 2
}

/// One-pixel midpoint circle with 8-way symmetry and an integer error term.
fn draw_ring(buffer: &mut PixelBuffer, center: Point, radius: i64, color: Rgb) {
    let (cx, cy) = (i64::from(center.x), i64::from(center.y));
    let mut plot = |x: i64, y: i64| {
        let clamp = |v: i64| v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        buffer.set_pixel(clamp(cx + x), clamp(cy + y), color);
    };

    let mut x = radius;
    let mut y = 0;
    let mut err = 0;

    while x >= y {
        plot(x, y);
        plot(y, x);
        plot(-y, x);
        plot(-x, y);
        plot(-x, -y);
        plot(-y, -x);
        plot(y, -x);
        plot(x, -y);

        if err <= 0 {
            y += 1;
            err += 2 * y + 1;
        }
        if err > 0 {
            x -= 1;
            err -= 2 * x + 1;
        }
    }
}
