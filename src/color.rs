// src/color.rs

//! Defines the packed `Rgb` color stored in the pixel buffer and the preset
//! palette offered by the color picker.

use serde::{Deserialize, Serialize};

/// A 24-bit color packed as `0xRRGGBB`.
///
/// The buffer compares pixels by this packed value, so two colors are equal
/// exactly when their channels are equal. Alpha is not modelled: the canvas
/// never blends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgb(pub u32);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0x000000);
    pub const WHITE: Rgb = Rgb(0xFFFFFF);
    pub const RED: Rgb = Rgb(0xFF0000);
    pub const GREEN: Rgb = Rgb(0x00FF00);
    pub const BLUE: Rgb = Rgb(0x0000FF);
    pub const YELLOW: Rgb = Rgb(0xFFFF00);
    pub const DARK_GRAY: Rgb = Rgb(0x404040);
    pub const GRAY: Rgb = Rgb(0x808080);
    pub const LIGHT_GRAY: Rgb = Rgb(0xC0C0C0);

    /// Builds a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Masks off anything above the low 24 bits, such as an alpha byte.
    pub const fn from_packed(value: u32) -> Self {
        Rgb(value & 0x00FF_FFFF)
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Channel bytes in `[r, g, b]` order, as written to PPM output.
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r(), self.g(), self.b()]
    }
}

/// The 5x5 grid of preset colors, row by row: grays, reds, greens, blues, yellows.
pub const PALETTE: [Rgb; 25] = [
    Rgb::BLACK,
    Rgb::DARK_GRAY,
    Rgb::GRAY,
    Rgb::LIGHT_GRAY,
    Rgb::WHITE,
    Rgb::RED,
    Rgb::new(255, 102, 102),
    Rgb::new(204, 0, 0),
    Rgb::new(139, 0, 0),
    Rgb::new(255, 51, 51),
    Rgb::GREEN,
    Rgb::new(102, 255, 102),
    Rgb::new(0, 204, 0),
    Rgb::new(0, 139, 0),
    Rgb::new(51, 255, 51),
    Rgb::BLUE,
    Rgb::new(102, 102, 255),
    Rgb::new(0, 0, 204),
    Rgb::new(0, 0, 139),
    Rgb::new(51, 51, 255),
    Rgb::YELLOW,
    Rgb::new(255, 255, 102),
    Rgb::new(204, 204, 0),
    Rgb::new(139, 139, 0),
    Rgb::new(255, 255, 51),
];
