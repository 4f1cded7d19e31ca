//! Touch input sources that do not need real hardware

use std::collections::VecDeque;

use super::TouchInput;

/// A screen nobody touches
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTouch;

impl TouchInput for NoTouch {
    fn poll_touch(&mut self) -> Option<(i32, i32)> {
        None
    }
}

/// Replays one recorded sample per poll, then reports no touch
#[derive(Debug, Clone, Default)]
pub struct ScriptedTouch {
    samples: VecDeque<Option<(i32, i32)>>,
}

impl ScriptedTouch {
    pub fn new(samples: impl IntoIterator<Item = Option<(i32, i32)>>) -> Self {
        Self {
            samples: samples.into_iter().collect(),
        }
    }

    /// Hold a touch at `pos` for `polls` polls
    pub fn hold(mut self, pos: (i32, i32), polls: usize) -> Self {
        self.samples.extend(std::iter::repeat_n(Some(pos), polls));
        self
    }

    /// No touch for `polls` polls
    pub fn release(mut self, polls: usize) -> Self {
        self.samples.extend(std::iter::repeat_n(None, polls));
        self
    }

    pub fn remaining(&self) -> usize {
        self.samples.len()
    }
}

impl TouchInput for ScriptedTouch {
    fn poll_touch(&mut self) -> Option<(i32, i32)> {
        self.samples.pop_front().flatten()
    }
}
