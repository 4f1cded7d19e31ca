//! Software renderer on an RGB565 pixel buffer
//!
//! Stands in for the LCD driver: every primitive is clipped to the screen,
//! so callers may draw partially (or wholly) off-screen shapes.

use super::{Color, Renderer};
use crate::consts::{CHAR_HEIGHT, CHAR_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Row-major pixel buffer
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: i32,
    height: i32,
    pixels: Vec<Color>,
    frames_presented: u64,
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

impl Framebuffer {
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            pixels: vec![Color::default(); (width * height) as usize],
            frames_presented: 0,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Pixel at (x, y), `None` off-screen
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Raw RGB565 frame in host byte order
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// RGB565 frame as little-endian bytes, independent of the host
    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.0.to_le_bytes()).collect()
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Number of pixels currently set to `color`
    pub fn count(&self, color: Color) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            None
        } else {
            Some((y * self.width + x) as usize)
        }
    }

    fn hline(&mut self, y: i32, x0: i32, x1: i32, color: Color) {
        if y < 0 || y >= self.height {
            return;
        }
        let start = x0.min(x1).max(0);
        let end = x0.max(x1).min(self.width - 1);
        for x in start..=end {
            let i = (y * self.width + x) as usize;
            self.pixels[i] = color;
        }
    }
}

impl Renderer for Framebuffer {
    fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    fn draw_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, r: i32, color: Color) {
        if r < 0 {
            return;
        }
        let r2 = r * r;
        for dy in -r..=r {
            // Widest dx on this row still inside the circle
            let mut dx = 0;
            while (dx + 1) * (dx + 1) + dy * dy <= r2 {
                dx += 1;
            }
            self.hline(cy + dy, cx - dx, cx + dx, color);
        }
    }

    fn draw_circle(&mut self, cx: i32, cy: i32, r: i32, color: Color) {
        if r < 0 {
            return;
        }
        // Midpoint circle
        let mut x = r;
        let mut y = 0;
        let mut err = 1 - r;
        while x >= y {
            for (px, py) in [
                (x, y),
                (y, x),
                (-y, x),
                (-x, y),
                (-x, -y),
                (-y, -x),
                (y, -x),
                (x, -y),
            ] {
                self.draw_pixel(cx + px, cy + py, color);
            }
            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        // Bresenham
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let (mut x, mut y) = (x0, y0);
        let mut err = dx + dy;
        loop {
            self.draw_pixel(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        if width <= 0 || height <= 0 {
            return;
        }
        let (x1, y1) = (x + width - 1, y + height - 1);
        self.draw_line(x, y, x1, y, color);
        self.draw_line(x1, y, x1, y1, color);
        self.draw_line(x1, y1, x, y1, color);
        self.draw_line(x, y1, x, y, color);
    }

    fn write_at(&mut self, text: &str, x: i32, y: i32, color: Color) {
        // No font: each visible glyph becomes a solid block inside its cell
        for (i, ch) in text.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let cell_x = x + i as i32 * CHAR_WIDTH;
            for row in 2..CHAR_HEIGHT - 2 {
                self.hline(y + row, cell_x + 1, cell_x + CHAR_WIDTH - 3, color);
            }
        }
    }

    fn present(&mut self) {
        self.frames_presented += 1;
    }
}
