//! RGB565 colors

use bytemuck::{Pod, Zeroable};

/// 16-bit 5-6-5 color, the native pixel format of the LCD
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Color(pub u16);

impl Color {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u16 >> 3) << 11) | ((g as u16 >> 2) << 5) | (b as u16 >> 3))
    }

    /// Expand back to 8-bit channels (low bits zero)
    pub const fn to_rgb(self) -> (u8, u8, u8) {
        let r = ((self.0 >> 11) & 0x1f) as u8;
        let g = ((self.0 >> 5) & 0x3f) as u8;
        let b = (self.0 & 0x1f) as u8;
        (r << 3, g << 2, b << 3)
    }
}

/// Named colors used by the game
pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);
    pub const RED: Color = Color::from_rgb(255, 0, 0);
    pub const DARKRED: Color = Color::from_rgb(139, 0, 0);
    pub const TOMATO: Color = Color::from_rgb(255, 99, 71);
    pub const GREEN: Color = Color::from_rgb(0, 128, 0);
    pub const BLUE: Color = Color::from_rgb(0, 0, 255);
    pub const CYAN: Color = Color::from_rgb(0, 255, 255);
    pub const YELLOW: Color = Color::from_rgb(255, 255, 0);
    pub const PURPLE: Color = Color::from_rgb(128, 0, 128);
    pub const GOLDENROD: Color = Color::from_rgb(218, 165, 32);
    pub const TAN: Color = Color::from_rgb(210, 180, 140);
    pub const LIGHTGRAY: Color = Color::from_rgb(211, 211, 211);
    pub const ORANGERED: Color = Color::from_rgb(255, 69, 0);
    pub const DARKTURQUOISE: Color = Color::from_rgb(0, 206, 209);

    // Meteorite shading, darkest first
    pub const DARKSLATEGRAY: Color = Color::from_rgb(47, 79, 79);
    pub const LIGHTSLATEGRAY: Color = Color::from_rgb(119, 136, 153);

    // Player sprite
    pub const YELLOWGREEN: Color = Color::from_rgb(154, 205, 50);
    pub const BLUEVIOLET: Color = Color::from_rgb(138, 43, 226);

    // Map backgrounds
    pub const SPACE: Color = Color::from_rgb(8, 8, 40);
    pub const LAVA: Color = Color::from_rgb(96, 16, 0);
    pub const MINES: Color = Color::from_rgb(56, 48, 40);
    pub const DESERT: Color = Color::from_rgb(184, 140, 80);
}
