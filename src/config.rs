// src/config.rs

//! Defines the configuration structures for the drawing session.
//!
//! The structs deserialize from JSON. Every field has a default, so a config
//! file only needs to name the values it changes. Defaults describe a
//! 1120x600 light-gray canvas, brush sizes 1 to 15 and a one-million-pixel
//! fill cap.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::fill::MAX_FILL_SIZE;
use crate::geometry::VERTEX_PICK_THRESHOLD;

/// Process-wide default configuration.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::default);

// --- Top-Level Configuration Structure ---

/// Represents the complete configuration for a drawing session.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)] // Missing sections fall back to their defaults.
pub struct Config {
    /// Pixel buffer dimensions and background.
    pub canvas: CanvasConfig,
    /// Stroke color and size limits.
    pub brush: BrushConfig,
    /// Tuning for the interactive tools.
    pub tools: ToolConfig,
    /// Flood fill limits.
    pub fill: FillConfig,
}

impl Config {
    /// Reads a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(text)?;
        Ok(config)
    }
}

// --- Canvas Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: usize,
    pub height: usize,
    /// Color every render starts from.
    pub clear_color: Rgb,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        CanvasConfig {
            width: 1120,
            height: 600,
            clear_color: Rgb(0xAAAAAA),
        }
    }
}

// --- Brush Configuration ---

/// The brush size doubles as line thickness and eraser size.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BrushConfig {
    pub color: Rgb,
    pub size: u32,
    pub min_size: u32,
    pub max_size: u32,
}

impl Default for BrushConfig {
    fn default() -> Self {
        BrushConfig {
            color: Rgb::BLUE,
            size: 1,
            min_size: 1,
            max_size: 15,
        }
    }
}

impl BrushConfig {
    /// Clamps a requested size into `[min_size, max_size]`.
    pub fn clamp_size(&self, size: u32) -> u32 {
        let min = self.min_size.max(1);
        size.clamp(min, self.max_size.max(min))
    }
}

// --- Tool Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ToolConfig {
    /// How close, in pixels, a right-click must be to grab a vertex.
    pub vertex_pick_threshold: f64,
    /// Number of edges in a committed circle.
    pub circle_segments: usize,
}

impl Default for ToolConfig {
    fn default() -> Self {
        ToolConfig {
            vertex_pick_threshold: VERTEX_PICK_THRESHOLD,
            circle_segments: 36,
        }
    }
}

// --- Fill Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FillConfig {
    /// Pixels a single fill may write before it is cut short.
    pub max_fill_size: usize,
}

impl Default for FillConfig {
    fn default() -> Self {
        FillConfig {
            max_fill_size: MAX_FILL_SIZE,
        }
    }
}
