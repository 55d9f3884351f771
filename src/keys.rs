// src/keys.rs

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::session::ToolMode;

bitflags! {
    /// Modifier keys the drawing tools react to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Modifiers: u8 {
        /// Snap to horizontal, vertical or 45°.
        const SHIFT = 1 << 0;
        /// Commit free lines as dotted lines.
        const CONTROL = 1 << 1;
    }
}

/// A key as delivered by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum KeySymbol {
    Char(char),
    Shift,
    Control,
    #[default]
    Unknown,
}

impl KeySymbol {
    /// The modifier flag this key holds down, if it is a modifier key.
    pub fn modifier(&self) -> Option<Modifiers> {
        match self {
            KeySymbol::Shift => Some(Modifiers::SHIFT),
            KeySymbol::Control => Some(Modifiers::CONTROL),
            _ => None,
        }
    }
}

/// What a non-modifier key press asks the session to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    ToggleTool(ToolMode),
    Clear,
}

/// Keyboard shortcuts: F fill, P polygon, R eraser, C clear. Case-insensitive.
pub fn map_key_to_command(symbol: KeySymbol) -> Option<KeyCommand> {
    match symbol {
        KeySymbol::Char(c) => match c.to_ascii_lowercase() {
            'f' => Some(KeyCommand::ToggleTool(ToolMode::Fill)),
            'p' => Some(KeyCommand::ToggleTool(ToolMode::Polygon)),
            'r' => Some(KeyCommand::ToggleTool(ToolMode::Erase)),
            'c' => Some(KeyCommand::Clear),
            _ => None,
        },
        _ => None,
    }
}
