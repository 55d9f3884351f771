// src/session/tool.rs

use serde::{Deserialize, Serialize};

/// The active drawing tool. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ToolMode {
    /// Free line from press to release. The default tool.
    #[default]
    Line,
    /// Flood fill at the clicked pixel.
    Fill,
    /// Click-by-click closed polygon.
    Polygon,
    /// Axis-aligned square from anchor to drag point.
    Square,
    /// Circle around the press point, committed as a polygon.
    Circle,
    /// Cuts gaps into lines under the cursor.
    Erase,
}

impl ToolMode {
    /// Transition for a toggle request.
    ///
    /// Toggling the active tool switches back to `Line`; toggling any other
    /// tool makes it the active one.
    pub fn toggled(self, requested: ToolMode) -> ToolMode {
        if self == requested {
            ToolMode::Line
        } else {
            requested
        }
    }
}
