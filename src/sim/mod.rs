//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed tick per step
//! - Randomness only through the injected `RandomSource`
//! - Stable iteration order (meteorites in spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod meteorite;
pub mod player;
pub mod state;
pub mod tick;

pub use collision::{circles_overlap, collides};
pub use difficulty::{DifficultyRamp, current_speed};
pub use meteorite::{Meteorite, MeteoritePhase};
pub use player::{Player, TouchSide};
pub use state::{GameSession, SessionPhase, SessionResult};
pub use tick::{TickInput, TickReport, tick};
