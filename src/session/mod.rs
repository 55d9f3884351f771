// src/session/mod.rs

//! This module defines the drawing session.
//! It acts as a state machine turning normalized input events into canvas
//! edits, fills and renders.
//!
//! The session exclusively owns the pixel buffer, the vector canvas and the
//! fill log. Drivers feed it `SessionInput`s one at a time and blit
//! `buffer()` whenever a `SessionAction::RequestRedraw` comes back.

pub mod tool;

pub use tool::ToolMode;

use std::f64::consts::PI;

use log::{debug, info, trace, warn};
use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::canvas::{LineId, LineStyle, VectorCanvas, VertexId};
use crate::color::{Rgb, PALETTE};
use crate::config::{BrushConfig, Config};
use crate::fill::{FillOperation, FloodFill};
use crate::geometry::{self, Point, Segment};
use crate::keys::{map_key_to_command, KeyCommand, KeySymbol, Modifiers};
use crate::rasterizer::square_corners;
use crate::renderer::{Preview, Renderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Primary,
    Secondary,
}

/// Inputs that the drawing session processes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SessionInput {
    Press { button: MouseButton, point: Point },
    Drag { point: Point },
    Release { button: MouseButton, point: Point },
    KeyDown(KeySymbol),
    KeyUp(KeySymbol),
    /// Tool buttons; same transition as the keyboard shortcuts.
    ToggleTool(ToolMode),
    /// Any bits above the low 24 are dropped.
    SetColor(Rgb),
    /// Index into the 25-entry preset `PALETTE`.
    SetPaletteColor(usize),
    /// Line thickness and eraser size, clamped to the configured range.
    SetBrushSize(u32),
    Clear,
}

/// Requests the session hands back to its driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// The buffer changed and should be presented.
    RequestRedraw,
}

/// What the pointer is currently doing between press and release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DragState {
    #[default]
    Idle,
    /// Primary press anchor for lines, squares and circles.
    Anchored(Point),
    /// A vertex grabbed with the secondary button.
    Vertex(VertexId),
}

/// Committed polygon vertices plus the provisional closing edge.
#[derive(Debug, Clone, Default)]
struct PolygonInProgress {
    vertices: Vec<VertexId>,
    closing: Option<LineId>,
}

pub struct DrawingSession {
    buffer: PixelBuffer,
    canvas: VectorCanvas,
    fills: Vec<FillOperation>,
    renderer: Renderer,
    filler: FloodFill,
    brush: BrushConfig,
    pick_threshold: f64,
    circle_segments: usize,

    tool: ToolMode,
    modifiers: Modifiers,
    color: Rgb,
    brush_size: u32,
    drag: DragState,
    polygon: PolygonInProgress,
}

impl DrawingSession {
    pub fn new(config: &Config) -> Self {
        info!(
            "DrawingSession: {}x{} canvas, fill cap {}",
            config.canvas.width, config.canvas.height, config.fill.max_fill_size
        );
        Self {
            buffer: PixelBuffer::new(
                config.canvas.width,
                config.canvas.height,
                config.canvas.clear_color,
            ),
            canvas: VectorCanvas::new(),
            fills: Vec::new(),
            renderer: Renderer::new(),
            filler: FloodFill::new(config.fill.max_fill_size),
            brush: config.brush.clone(),
            pick_threshold: config.tools.vertex_pick_threshold,
            circle_segments: config.tools.circle_segments.max(3),
            tool: ToolMode::default(),
            modifiers: Modifiers::empty(),
            color: config.brush.color,
            brush_size: config.brush.clamp_size(config.brush.size),
            drag: DragState::Idle,
            polygon: PolygonInProgress::default(),
        }
    }

    // --- Read views for drivers and tests ---

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn canvas(&self) -> &VectorCanvas {
        &self.canvas
    }

    pub fn fills(&self) -> &[FillOperation] {
        &self.fills
    }

    pub fn tool(&self) -> ToolMode {
        self.tool
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn brush_size(&self) -> u32 {
        self.brush_size
    }

    /// Vertices of the polygon being drawn, empty outside polygon mode.
    pub fn polygon_vertices(&self) -> &[VertexId] {
        &self.polygon.vertices
    }

    /// Interprets a `SessionInput`, updates state and returns a redraw request
    /// if the buffer changed.
    pub fn interpret_input(&mut self, input: SessionInput) -> Option<SessionAction> {
        trace!("DrawingSession: {:?} in {:?}", input, self.tool);
        match input {
            SessionInput::Press { button, point } => self.press(button, point),
            SessionInput::Drag { point } => self.drag_to(point),
            SessionInput::Release { button, point } => self.release(button, point),
            SessionInput::KeyDown(symbol) => self.key_down(symbol),
            SessionInput::KeyUp(symbol) => {
                if let Some(m) = symbol.modifier() {
                    self.modifiers.remove(m);
                }
                None
            }
            SessionInput::ToggleTool(tool) => self.toggle_tool(tool),
            SessionInput::SetColor(color) => {
                self.color = Rgb::from_packed(color.0);
                None
            }
            SessionInput::SetPaletteColor(index) => {
                match PALETTE.get(index) {
                    Some(&color) => self.color = color,
                    None => warn!("DrawingSession: no palette entry {}", index),
                }
                None
            }
            SessionInput::SetBrushSize(size) => {
                self.brush_size = self.brush.clamp_size(size);
                debug!("DrawingSession: brush size {}", self.brush_size);
                None
            }
            SessionInput::Clear => self.clear(),
        }
    }

    /// Rebuilds the buffer from the fill log and canvas.
    pub fn render(&mut self) {
        self.renderer.render(&mut self.buffer, &self.fills, &self.canvas);
    }

    fn render_preview(&mut self, preview: Preview) {
        self.renderer
            .render_with_preview(&mut self.buffer, &self.fills, &self.canvas, &preview);
    }

    fn redraw(&mut self) -> Option<SessionAction> {
        self.render();
        Some(SessionAction::RequestRedraw)
    }

    fn snapped(&self, from: Point, to: Point) -> Point {
        if self.modifiers.contains(Modifiers::SHIFT) {
            geometry::snap(from, to)
        } else {
            to
        }
    }

    fn stroke_style(&self) -> LineStyle {
        if self.modifiers.contains(Modifiers::CONTROL) {
            LineStyle::Dotted
        } else {
            LineStyle::Solid
        }
    }

    // --- Keyboard and tool selection ---

    fn key_down(&mut self, symbol: KeySymbol) -> Option<SessionAction> {
        if let Some(m) = symbol.modifier() {
            self.modifiers.insert(m);
            return None;
        }
        match map_key_to_command(symbol)? {
            KeyCommand::ToggleTool(tool) => self.toggle_tool(tool),
            KeyCommand::Clear => self.clear(),
        }
    }

    fn toggle_tool(&mut self, requested: ToolMode) -> Option<SessionAction> {
        let next = self.tool.toggled(requested);
        if next == self.tool {
            return None;
        }
        info!("DrawingSession: tool {:?} -> {:?}", self.tool, next);
        if self.tool == ToolMode::Polygon {
            self.finalize_polygon();
        }
        if next == ToolMode::Polygon {
            self.polygon = PolygonInProgress::default();
        }
        self.tool = next;
        self.drag = DragState::Idle;
        self.redraw()
    }

    fn clear(&mut self) -> Option<SessionAction> {
        info!(
            "DrawingSession: clearing {} lines, {} dotted lines, {} fills",
            self.canvas.lines().len(),
            self.canvas.dotted_lines().len(),
            self.fills.len()
        );
        self.canvas.clear_all();
        self.fills.clear();
        self.polygon = PolygonInProgress::default();
        self.drag = DragState::Idle;
        self.buffer.clear();
        Some(SessionAction::RequestRedraw)
    }

    // --- Mouse ---

    fn press(&mut self, button: MouseButton, point: Point) -> Option<SessionAction> {
        match (button, self.tool) {
            (MouseButton::Secondary, ToolMode::Erase) => None,
            (MouseButton::Secondary, _) => {
                self.drag = geometry::closest_vertex(&self.canvas, point, self.pick_threshold)
                    .map(DragState::Vertex)
                    .unwrap_or_default();
                None
            }
            (MouseButton::Primary, ToolMode::Erase) => self.erase_at(point),
            (MouseButton::Primary, ToolMode::Fill) => {
                self.drag = DragState::Idle;
                self.fill_at(point)
            }
            (MouseButton::Primary, ToolMode::Line | ToolMode::Square | ToolMode::Circle) => {
                self.drag = DragState::Anchored(point);
                None
            }
            (MouseButton::Primary, ToolMode::Polygon) => None,
        }
    }

    fn drag_to(&mut self, point: Point) -> Option<SessionAction> {
        if let DragState::Vertex(id) = self.drag {
            self.canvas.move_vertex(id, point);
            return self.redraw();
        }

        let preview = match (self.tool, self.drag) {
            (ToolMode::Erase, _) => return self.erase_at(point),
            (ToolMode::Polygon, _) => {
                let last = self.polygon.vertices.last().copied()?;
                let from = self.canvas.vertex(last)?;
                Preview::Line {
                    segment: Segment::new(from, self.snapped(from, point), self.color, self.brush_size),
                    style: LineStyle::Solid,
                }
            }
            (ToolMode::Square, DragState::Anchored(anchor)) => Preview::Square {
                anchor,
                drag: point,
                color: self.color,
                thickness: self.brush_size,
            },
            (ToolMode::Circle, DragState::Anchored(center)) => Preview::Circle {
                center,
                edge: point,
                color: self.color,
                thickness: self.brush_size,
            },
            (ToolMode::Line, DragState::Anchored(start)) => Preview::Line {
                segment: Segment::new(start, self.snapped(start, point), self.color, self.brush_size),
                style: self.stroke_style(),
            },
            _ => return None,
        };
        self.render_preview(preview);
        Some(SessionAction::RequestRedraw)
    }

    fn release(&mut self, button: MouseButton, point: Point) -> Option<SessionAction> {
        if let (MouseButton::Secondary, DragState::Vertex(id)) = (button, self.drag) {
            self.canvas.move_vertex(id, point);
            self.drag = DragState::Idle;
            return self.redraw();
        }

        match (self.tool, self.drag) {
            (ToolMode::Polygon, _) => {
                self.add_polygon_vertex(point);
                self.redraw()
            }
            (ToolMode::Square, DragState::Anchored(anchor)) => {
                self.commit_square(anchor, point);
                self.drag = DragState::Idle;
                self.redraw()
            }
            (ToolMode::Circle, DragState::Anchored(center)) => {
                self.commit_circle(center, point);
                self.drag = DragState::Idle;
                self.redraw()
            }
            (ToolMode::Line, DragState::Anchored(start)) => {
                let end = self.snapped(start, point);
                let segment = Segment::new(start, end, self.color, self.brush_size);
                let style = self.stroke_style();
                let id = self.canvas.push_segment(segment, style);
                debug!("DrawingSession: committed {:?} line {:?}", style, id);
                self.drag = DragState::Idle;
                self.redraw()
            }
            _ => None,
        }
    }

    // --- Tool operations ---

    fn erase_at(&mut self, point: Point) -> Option<SessionAction> {
        if geometry::split_near(&mut self.canvas, point, self.brush_size) > 0 {
            self.redraw()
        } else {
            None
        }
    }

    fn fill_at(&mut self, point: Point) -> Option<SessionAction> {
        let filled = self.filler.fill(&mut self.buffer, point, self.color);
        if !filled.is_empty() {
            self.fills.push(FillOperation::new(filled, self.color));
        }
        self.redraw()
    }

    /// Commits the four edges of a square. Adjacent edges share corner vertices.
    fn commit_square(&mut self, anchor: Point, drag: Point) {
        let corners = square_corners(anchor, drag).map(|c| self.canvas.add_vertex(c));
        self.commit_closed_path(&corners);
    }

    /// Commits a circle as a closed polygon with `circle_segments` edges.
    fn commit_circle(&mut self, center: Point, edge: Point) {
        let radius = center.distance(edge).trunc();
        let n = self.circle_segments;
        let vertices: Vec<VertexId> = (0..n)
            .map(|i| {
                let angle = 2.0 * PI * i as f64 / n as f64;
                let x = center.x.saturating_add((radius * angle.cos()) as i32);
                let y = center.y.saturating_add((radius * angle.sin()) as i32);
                self.canvas.add_vertex(Point::new(x, y))
            })
            .collect();
        self.commit_closed_path(&vertices);
    }

    fn commit_closed_path(&mut self, vertices: &[VertexId]) {
        for (i, &from) in vertices.iter().enumerate() {
            let to = vertices[(i + 1) % vertices.len()];
            let line = self.canvas.new_line(from, to, self.color, self.brush_size);
            self.canvas.add(line);
        }
    }

    fn add_polygon_vertex(&mut self, point: Point) {
        let last = self.polygon.vertices.last().copied();
        let point = match last.and_then(|id| self.canvas.vertex(id)) {
            Some(from) => self.snapped(from, point),
            None => point,
        };
        let vertex = self.canvas.add_vertex(point);

        if let Some(last) = last {
            let edge = self.canvas.new_line(last, vertex, self.color, self.brush_size);
            self.canvas.add(edge);
            if let Some(closing) = self.polygon.closing.take() {
                self.canvas.remove_line(closing);
            }
        }
        self.polygon.vertices.push(vertex);

        if self.polygon.vertices.len() >= 3 {
            let first = self.polygon.vertices[0];
            let closing = self.canvas.new_line(vertex, first, self.color, self.brush_size);
            self.canvas.add(closing);
            self.polygon.closing = Some(closing.id());
        }
    }

    /// Keeps the closing edge of a polygon with three or more vertices and
    /// drops the polygon-in-progress state.
    fn finalize_polygon(&mut self) {
        let polygon = std::mem::take(&mut self.polygon);
        match polygon.closing {
            Some(_) if polygon.vertices.len() >= 3 => {
                debug!(
                    "DrawingSession: polygon finalized with {} vertices",
                    polygon.vertices.len()
                );
            }
            Some(closing) => self.canvas.remove_line(closing),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests;
