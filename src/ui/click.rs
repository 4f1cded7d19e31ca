//! Tap detection
//!
//! A click is a press and a release over the same button, so dragging a
//! finger off a button cancels it.

use super::button::Clickable;
use crate::platform::TouchInput;

/// Press/release state carried between polls
#[derive(Debug, Clone, Default)]
pub struct ClickTracker {
    /// Where the current press started
    press_at: Option<(i32, i32)>,
    /// Touch seen on the previous poll
    last_touch: Option<(i32, i32)>,
}

impl ClickTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the clicked button, if any.
    ///
    /// With `blocking` false this polls the touch screen exactly once, so
    /// animated screens can check between frames. With `blocking` true it
    /// keeps polling until some button is clicked.
    pub fn poll<B: Clickable>(
        &mut self,
        buttons: &[B],
        touch: &mut dyn TouchInput,
        blocking: bool,
    ) -> Option<usize> {
        loop {
            let clicked = self.step(buttons, touch.poll_touch());
            if clicked.is_some() || !blocking {
                return clicked;
            }
        }
    }

    fn step<B: Clickable>(&mut self, buttons: &[B], current: Option<(i32, i32)>) -> Option<usize> {
        let mut clicked = None;
        match (self.last_touch, current) {
            (None, Some(pos)) => self.press_at = Some(pos),
            (Some(release), None) => {
                if let Some((px, py)) = self.press_at.take() {
                    clicked = buttons
                        .iter()
                        .position(|b| b.contains(release.0, release.1) && b.contains(px, py));
                }
            }
            _ => {}
        }
        self.last_touch = current;
        clicked
    }
}
