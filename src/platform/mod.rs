//! Platform abstraction layer
//!
//! The game core only talks to the outside world through these capabilities:
//! - Time and pacing (`Clock`)
//! - Touch polling (`TouchInput`)
//! - Random numbers (`RandomSource`)
//!
//! Drawing lives in `crate::renderer`.

pub mod clock;
pub mod random;
pub mod touch;

pub use clock::{SimClock, SystemClock};
pub use random::PcgRandom;
pub use touch::{NoTouch, ScriptedTouch};

use crate::consts::RANDOM_MAX;

/// Monotonic millisecond clock with a cooperative sleep
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin
    fn now_millis(&self) -> u64;

    /// Block the caller for `ms` milliseconds
    fn sleep_ms(&mut self, ms: u64);
}

/// Non-blocking touch screen poll
pub trait TouchInput {
    /// Current touch position in screen pixels, `None` when untouched
    fn poll_touch(&mut self) -> Option<(i32, i32)>;
}

/// Uniform integers in `[0, RANDOM_MAX]`
pub trait RandomSource {
    fn next_int(&mut self) -> u32;

    /// Uniform sample in `[0, 1]`
    fn next_unit(&mut self) -> f32 {
        self.next_int().min(RANDOM_MAX) as f32 / RANDOM_MAX as f32
    }
}
