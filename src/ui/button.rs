//! Rectangular text buttons

use crate::consts::{CHAR_HEIGHT, CHAR_WIDTH};
use crate::renderer::{Color, Image, Renderer};

/// Axis-aligned screen rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Strictly inside; the border itself does not count
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x > self.x && x < self.x + self.width && y > self.y && y < self.y + self.height
    }
}

/// Something drawn on screen that reacts to taps
pub trait Clickable {
    fn bounds(&self) -> Rect;

    fn draw(&self, renderer: &mut dyn Renderer);

    fn contains(&self, x: i32, y: i32) -> bool {
        self.bounds().contains(x, y)
    }
}

/// Outlined button with centred text and optional background art
#[derive(Debug, Clone)]
pub struct Button {
    bounds: Rect,
    border: Color,
    text_color: Color,
    label: String,
    image: Option<Image>,
}

impl Button {
    pub fn new(bounds: Rect, border: Color, text_color: Color, label: impl Into<String>) -> Self {
        Self {
            bounds,
            border,
            text_color,
            label: label.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: Image) -> Self {
        self.image = Some(image);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Top-left of the centred label
    pub fn label_origin(&self) -> (i32, i32) {
        let text_width = self.label.chars().count() as i32 * CHAR_WIDTH;
        (
            self.bounds.x + (self.bounds.width - text_width) / 2,
            self.bounds.y + 2 + (self.bounds.height - CHAR_HEIGHT) / 2,
        )
    }
}

impl Clickable for Button {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        if let Some(image) = &self.image {
            // Inside the 1px border
            image.draw(renderer, self.bounds.x + 1, self.bounds.y + 1);
        }
        renderer.draw_rect(
            self.bounds.x,
            self.bounds.y,
            self.bounds.width,
            self.bounds.height,
            self.border,
        );
        let (tx, ty) = self.label_origin();
        renderer.write_at(&self.label, tx, ty, self.text_color);
    }
}

pub fn draw_buttons<B: Clickable>(renderer: &mut dyn Renderer, buttons: &[B]) {
    for button in buttons {
        button.draw(renderer);
    }
}
