//! Drawing capability
//!
//! The game draws through the `Renderer` trait, modelled on a small LCD
//! driver: immediate-mode primitives in screen pixels, then `present`.
//! `Framebuffer` is the software implementation used natively and in tests.

pub mod color;
pub mod framebuffer;
pub mod image;
pub mod scene;

pub use color::{Color, palette};
pub use framebuffer::Framebuffer;
pub use image::Image;

/// Immediate-mode screen drawing
pub trait Renderer {
    /// Fill the whole screen
    fn clear(&mut self, color: Color);

    fn draw_pixel(&mut self, x: i32, y: i32, color: Color);

    fn fill_circle(&mut self, cx: i32, cy: i32, r: i32, color: Color);

    /// Circle outline
    fn draw_circle(&mut self, cx: i32, cy: i32, r: i32, color: Color);

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color);

    /// Rectangle outline with top-left corner at (x, y)
    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color);

    /// Text with its top-left corner at (x, y)
    fn write_at(&mut self, text: &str, x: i32, y: i32, color: Color);

    /// Push the finished frame to the display
    fn present(&mut self);
}
