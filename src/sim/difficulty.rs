//! Time-based difficulty ramp
//!
//! Game speed climbs in fixed steps as the run goes on. The current speed is
//! the base that meteorites sample their own speed from whenever they
//! (re)spawn; meteorites already falling keep theirs.

use serde::{Deserialize, Serialize};

use crate::consts::{SPEED_INCREASE_AMOUNT, SPEED_INCREASE_SECONDS, SPEED_START};

/// Step function from elapsed time to game speed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyRamp {
    /// Speed at the start of a run (pixels per tick)
    pub speed_start: f32,
    /// Added every `increase_seconds`
    pub increase_amount: f32,
    pub increase_seconds: u64,
}

impl Default for DifficultyRamp {
    fn default() -> Self {
        Self {
            speed_start: SPEED_START,
            increase_amount: SPEED_INCREASE_AMOUNT,
            increase_seconds: SPEED_INCREASE_SECONDS,
        }
    }
}

impl DifficultyRamp {
    /// Speed after `elapsed_ms` of play
    pub fn speed_at(&self, elapsed_ms: u64) -> f32 {
        let steps = (elapsed_ms / 1000) / self.increase_seconds.max(1);
        self.speed_start + self.increase_amount * steps as f32
    }
}

/// Speed after `elapsed_ms` with the stock ramp
pub fn current_speed(elapsed_ms: u64) -> f32 {
    DifficultyRamp::default().speed_at(elapsed_ms)
}
