// src/lib.rs

//! A small vector drawing engine over a raster canvas.
//!
//! Lines, squares, circles and polygons live in a `VectorCanvas` as edges
//! between shared vertices. Every render clears a `PixelBuffer`, replays the
//! recorded flood fills and rasterizes the committed lines on top. A
//! `DrawingSession` turns pointer and key input into those edits.

pub mod buffer;
pub mod canvas;
pub mod color;
pub mod config;
pub mod fill;
pub mod geometry;
pub mod keys;
pub mod rasterizer;
pub mod renderer;
pub mod session;

pub use buffer::PixelBuffer;
pub use canvas::{Line, LineId, LineStyle, VectorCanvas, VertexId};
pub use color::Rgb;
pub use config::{Config, CONFIG};
pub use geometry::{Point, Segment};
pub use session::{DrawingSession, MouseButton, SessionAction, SessionInput, ToolMode};
