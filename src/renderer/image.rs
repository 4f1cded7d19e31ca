//! Owned bitmap images (backgrounds, button art)
//!
//! Decoding image files is left to the platform; the game only needs to
//! hold decoded pixels and blit them.

use super::{Color, Renderer};

#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    width: i32,
    height: i32,
    pixels: Vec<Color>,
}

impl Image {
    /// Build from row-major pixels; `None` when the size does not match
    pub fn from_pixels(width: i32, height: i32, pixels: Vec<Color>) -> Option<Self> {
        if width <= 0 || height <= 0 || pixels.len() != (width * height) as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn solid(width: i32, height: i32, color: Color) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            pixels: vec![color; (width * height) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Draw with the top-left corner at (x, y)
    pub fn draw(&self, renderer: &mut dyn Renderer, x: i32, y: i32) {
        for (i, &color) in self.pixels.iter().enumerate() {
            let i = i as i32;
            renderer.draw_pixel(x + i % self.width, y + i / self.width, color);
        }
    }
}
