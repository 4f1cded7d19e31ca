//! Meteorite Dash - dodge the falling meteorites on a small touch screen
//!
//! Core modules:
//! - `sim`: Deterministic simulation (meteorites, player, collisions, difficulty)
//! - `game`: Session driver wiring the simulation to the platform capabilities
//! - `renderer`: Drawing capability and a software RGB565 framebuffer
//! - `platform`: Clock, touch and random-number capabilities
//! - `settings`: Difficulty, map and tuning configuration
//! - `ui`: Menu buttons and click tracking

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use game::{MeteoriteDash, run_session};
pub use settings::{ConfigError, Difficulty, GameConfig, MapKind};
pub use sim::SessionResult;

/// Game configuration constants
pub mod consts {
    /// Display dimensions (landscape)
    pub const SCREEN_WIDTH: i32 = 320;
    pub const SCREEN_HEIGHT: i32 = 240;

    /// Fixed pacing sleep per tick (ms)
    pub const TICK_MS: u64 = 10;

    /// Upper bound of `RandomSource::next_int`
    pub const RANDOM_MAX: u32 = 32767;

    /// Meteorite radius bounds (pixels)
    pub const METEORITE_RADIUS_MIN: i32 = 4;
    pub const METEORITE_RADIUS_MAX: i32 = 14;
    /// Meteorite speed spread, as a fraction of the current game speed
    pub const METEORITE_SPEED_MIN: f32 = 0.75;
    pub const METEORITE_SPEED_MAX: f32 = 1.25;
    /// Death window, as a fraction of the cycles a meteorite spends on screen
    pub const METEORITE_DEATH_MIN: f32 = 0.2;
    pub const METEORITE_DEATH_MAX: f32 = 0.8;
    /// Speeds never drop below this (pixels per tick)
    pub const MIN_SPEED: f32 = 0.01;

    /// Difficulty ramp
    pub const SPEED_START: f32 = 0.5;
    pub const SPEED_INCREASE_AMOUNT: f32 = 0.0075;
    pub const SPEED_INCREASE_SECONDS: u64 = 1;

    /// Meteorite counts per difficulty
    pub const METEORITES_EASY: usize = 25;
    pub const METEORITES_HARD: usize = 50;

    /// Player defaults
    pub const PLAYER_RADIUS: i32 = 6;
    /// Pixels between the player circle and the bottom of the screen
    pub const PLAYER_Y_HEIGHT: i32 = 6;
    pub const PLAYER_START_X: i32 = SCREEN_WIDTH / 2;
    pub const PLAYER_STEP: i32 = 2;

    /// Explosion animation: (radius, duration ms) per stage
    pub const EXPLOSION_RADII: [i32; 3] = [16, 32, 64];
    pub const EXPLOSION_STAGE_MS: u64 = 200;

    /// Font cell size used by text placement
    pub const CHAR_WIDTH: i32 = 12;
    pub const CHAR_HEIGHT: i32 = 17;
}
