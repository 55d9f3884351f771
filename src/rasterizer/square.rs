//! Axis-aligned square outlines built from four line segments.

use super::{LineRasterizer, Rasterizer};
use crate::buffer::PixelBuffer;
use crate::color::Rgb;
use crate::geometry::{Point, Segment};

/// Corners of the square anchored at `anchor` and sized by `drag`.
///
/// The side is the larger of `|dx|` and `|dy|`. The square keeps a corner on
/// `anchor` and grows toward the drag point: left when `dx < 0`, up when
/// `dy < 0`. Returned as `[top_left, top_right, bottom_right, bottom_left]`.
pub fn square_corners(anchor: Point, drag: Point) -> [Point; 4] {
    let dx = drag.x.saturating_sub(anchor.x);
    let dy = drag.y.saturating_sub(anchor.y);
    let side = dx.saturating_abs().max(dy.saturating_abs());

    let left = if dx < 0 { anchor.x.saturating_sub(side) } else { anchor.x };
    let top = if dy < 0 { anchor.y.saturating_sub(side) } else { anchor.y };
    let (right, bottom) = (left.saturating_add(side), top.saturating_add(side));

    [
        Point::new(left, top),
        Point::new(right, top),
        Point::new(right, bottom),
        Point::new(left, bottom),
    ]
}

/// The four edges of the square, in top, right, bottom, left order.
pub fn square_edges(anchor: Point, drag: Point, color: Rgb, thickness: u32) -> [Segment; 4] {
    let [tl, tr, br, bl] = square_corners(anchor, drag);
    [
        Segment::new(tl, tr, color, thickness),
        Segment::new(tr, br, color, thickness),
        Segment::new(br, bl, color, thickness),
        Segment::new(bl, tl, color, thickness),
    ]
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SquareRasterizer {
    lines: LineRasterizer,
}

impl SquareRasterizer {
    /// Draws the outline only. Committing the edges to a canvas is the
    /// caller's job.
    pub fn rasterize(
        &self,
        buffer: &mut PixelBuffer,
        anchor: Point,
        drag: Point,
        color: Rgb,
        thickness: u32,
    ) {
        self.lines
            .rasterize_all(buffer, square_edges(anchor, drag, color, thickness));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_side_is_larger_delta() {
        assert_eq!(
            square_corners(p(10, 10), p(20, 14)),
            [p(10, 10), p(20, 10), p(20, 20), p(10, 20)]
        );
    }

    #[test]
    fn test_negative_deltas_grow_left_and_up() {
        assert_eq!(
            square_corners(p(10, 10), p(4, 2)),
            [p(2, 2), p(10, 2), p(10, 10), p(2, 10)]
        );
        assert_eq!(
            square_corners(p(10, 10), p(13, 5)),
            [p(10, 5), p(15, 5), p(15, 10), p(10, 10)]
        );
    }

    #[test]
    fn test_outline_has_no_interior() {
        let bg = Rgb(0xAAAAAA);
        let mut buf = PixelBuffer::new(20, 20, bg);
        SquareRasterizer::default().rasterize(&mut buf, p(2, 2), p(8, 5), Rgb::RED, 1);

        let mut count = 0;
        for y in 0..20 {
            for x in 0..20 {
                let on_edge = (x == 2 || x == 8) && (2..=8).contains(&y)
                    || (y == 2 || y == 8) && (2..=8).contains(&x);
                let expected = if on_edge { Rgb::RED } else { bg };
                assert_eq!(buf.get_pixel(x, y), Some(expected), "at ({x},{y})");
                count += on_edge as usize;
            }
        }
        assert_eq!(count, 24);
    }

    #[test]
    fn test_corners_saturate_at_coordinate_limits() {
        assert_eq!(
            square_corners(p(i32::MAX - 1, 0), p(i32::MIN, 5)),
            [p(-1, 0), p(i32::MAX - 1, 0), p(i32::MAX - 1, i32::MAX), p(-1, i32::MAX)]
        );
    }

    #[test]
    fn test_degenerate_square_is_a_point() {
        assert_eq!(square_corners(p(3, 3), p(3, 3)), [p(3, 3); 4]);
    }
}
