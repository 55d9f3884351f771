// src/canvas.rs

//! The persistent drawing: a vertex arena plus the ordered solid and dotted
//! line collections that reference it.
//!
//! Lines never store coordinates. They hold `VertexId` handles into the arena,
//! so two edges that meet at a corner share one vertex and dragging that
//! vertex moves both edges at once.

use crate::color::Rgb;
use crate::geometry::{Point, Segment};
use log::trace;

/// Stable handle to a vertex in a `VectorCanvas`. Valid until `clear_all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

/// Identity of a committed line. Two lines with equal geometry are still
/// distinct lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(u64);

/// Which collection a line lives in, and therefore how it is rasterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineStyle {
    Solid,
    Dotted,
}

/// An immutable line primitive: two vertex handles, a color and a thickness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    id: LineId,
    start: VertexId,
    end: VertexId,
    color: Rgb,
    thickness: u32,
}

impl Line {
    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn start(&self) -> VertexId {
        self.start
    }

    pub fn end(&self) -> VertexId {
        self.end
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn thickness(&self) -> u32 {
        self.thickness
    }
}

/// Ordered collections of solid and dotted lines over a shared vertex arena.
///
/// Insertion order is rendering order. A line lives in at most one of the two
/// collections.
#[derive(Debug, Clone, Default)]
pub struct VectorCanvas {
    vertices: Vec<Point>,
    lines: Vec<Line>,
    dotted_lines: Vec<Line>,
    next_line_id: u64,
}

impl VectorCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Vertex arena ---

    /// Stores a new vertex and returns its handle.
    pub fn add_vertex(&mut self, point: Point) -> VertexId {
        self.vertices.push(point);
        VertexId(self.vertices.len() - 1)
    }

    /// Current position of a vertex, or `None` for a handle from before the
    /// last `clear_all`.
    pub fn vertex(&self, id: VertexId) -> Option<Point> {
        self.vertices.get(id.0).copied()
    }

    /// Moves a vertex. Every line referencing the handle follows it.
    pub fn move_vertex(&mut self, id: VertexId, to: Point) {
        if let Some(v) = self.vertices.get_mut(id.0) {
            *v = to;
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // --- Lines ---

    /// Creates a line with a fresh identity. The line is not part of either
    /// collection until passed to `add` or `add_dotted`.
    pub fn new_line(&mut self, start: VertexId, end: VertexId, color: Rgb, thickness: u32) -> Line {
        let id = LineId(self.next_line_id);
        self.next_line_id += 1;
        Line {
            id,
            start,
            end,
            color,
            thickness: thickness.max(1),
        }
    }

    pub fn add(&mut self, line: Line) {
        trace!("canvas: add solid line {:?}", line.id);
        self.lines.push(line);
    }

    pub fn add_dotted(&mut self, line: Line) {
        trace!("canvas: add dotted line {:?}", line.id);
        self.dotted_lines.push(line);
    }

    /// Removes a solid line by identity. Absent lines are ignored.
    pub fn remove_line(&mut self, id: LineId) {
        self.lines.retain(|l| l.id != id);
    }

    /// Removes a dotted line by identity. Absent lines are ignored.
    pub fn remove_dotted(&mut self, id: LineId) {
        self.dotted_lines.retain(|l| l.id != id);
    }

    /// Replaces a line, in whichever collection holds it, with `replacements`
    /// at the same position. Returns false if no line has that identity.
    pub fn replace_line(&mut self, id: LineId, replacements: &[Line]) -> bool {
        for collection in [&mut self.lines, &mut self.dotted_lines] {
            if let Some(pos) = collection.iter().position(|l| l.id == id) {
                collection.splice(pos..=pos, replacements.iter().copied());
                return true;
            }
        }
        false
    }

    /// Drops every line and vertex. Old handles become dangling.
    pub fn clear_all(&mut self) {
        self.lines.clear();
        self.dotted_lines.clear();
        self.vertices.clear();
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn dotted_lines(&self) -> &[Line] {
        &self.dotted_lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.dotted_lines.is_empty()
    }

    /// Solid lines followed by dotted lines, each tagged with its style.
    pub fn iter_all(&self) -> impl Iterator<Item = (LineStyle, &Line)> + '_ {
        self.lines
            .iter()
            .map(|l| (LineStyle::Solid, l))
            .chain(self.dotted_lines.iter().map(|l| (LineStyle::Dotted, l)))
    }

    pub fn contains(&self, id: LineId) -> Option<LineStyle> {
        self.iter_all().find(|(_, l)| l.id == id).map(|(style, _)| style)
    }

    /// Resolves a line's handles into coordinates. Dangling handles resolve to
    /// the origin, which only happens for lines created before a `clear_all`.
    pub fn segment(&self, line: &Line) -> Segment {
        Segment {
            start: self.vertex(line.start).unwrap_or_default(),
            end: self.vertex(line.end).unwrap_or_default(),
            color: line.color,
            thickness: line.thickness,
        }
    }

    /// Convenience for committing a standalone segment: allocates both
    /// endpoints and adds the line to the collection for `style`.
    pub fn push_segment(&mut self, segment: Segment, style: LineStyle) -> LineId {
        let a = self.add_vertex(segment.start);
        let b = self.add_vertex(segment.end);
        let line = self.new_line(a, b, segment.color, segment.thickness);
        match style {
            LineStyle::Solid => self.add(line),
            LineStyle::Dotted => self.add_dotted(line),
        }
        line.id
    }
}
