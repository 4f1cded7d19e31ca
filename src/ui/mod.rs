//! Menu glue: buttons, click detection, stats text

pub mod button;
pub mod click;
pub mod stats;

pub use button::{Button, Clickable, Rect, draw_buttons};
pub use click::ClickTracker;
pub use stats::{draw_stats, stats_lines};
