//! Game configuration
//!
//! Difficulty and map selection plus tuning knobs, loadable from a JSON file.
//! Every field has a default so partial files are fine.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{METEORITES_EASY, METEORITES_HARD, MIN_SPEED, TICK_MS};
use crate::renderer::{Color, palette};
use crate::sim::DifficultyRamp;

/// How many meteorites are on the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Meteorites in play for this difficulty
    pub fn object_count(&self) -> usize {
        match self {
            Difficulty::Easy => METEORITES_EASY,
            Difficulty::Hard => METEORITES_HARD,
        }
    }
}

/// Background the run is played on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MapKind {
    Space,
    Lava,
    Mines,
    #[default]
    Desert,
}

impl MapKind {
    pub const ALL: [MapKind; 4] = [MapKind::Space, MapKind::Lava, MapKind::Mines, MapKind::Desert];

    pub fn as_str(&self) -> &'static str {
        match self {
            MapKind::Space => "Space",
            MapKind::Lava => "Lava",
            MapKind::Mines => "Mines",
            MapKind::Desert => "Desert",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "space" => Some(MapKind::Space),
            "lava" => Some(MapKind::Lava),
            "mines" => Some(MapKind::Mines),
            "desert" => Some(MapKind::Desert),
            _ => None,
        }
    }

    /// Solid color standing in for the map's background art
    pub fn background(&self) -> Color {
        match self {
            MapKind::Space => palette::SPACE,
            MapKind::Lava => palette::LAVA,
            MapKind::Mines => palette::MINES,
            MapKind::Desert => palette::DESERT,
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Settings for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    pub map: MapKind,
    /// Fixed RNG seed for reproducible runs; random when absent
    pub seed: Option<u64>,
    /// Pacing sleep per tick (ms)
    pub tick_ms: u64,
    /// Let the autopilot play (attract/demo mode)
    pub idle_mode: bool,
    pub ramp: DifficultyRamp,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            map: MapKind::Desert,
            seed: None,
            tick_ms: TICK_MS,
            idle_mode: false,
            ramp: DifficultyRamp::default(),
        }
    }
}

impl GameConfig {
    /// Read and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::Invalid("tick_ms must be at least 1".into()));
        }
        if !(self.ramp.speed_start.is_finite() && self.ramp.speed_start >= MIN_SPEED) {
            return Err(ConfigError::Invalid(format!(
                "ramp.speed_start must be at least {MIN_SPEED}, got {}",
                self.ramp.speed_start
            )));
        }
        if !(self.ramp.increase_amount.is_finite() && self.ramp.increase_amount >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "ramp.increase_amount must not be negative, got {}",
                self.ramp.increase_amount
            )));
        }
        if self.ramp.increase_seconds == 0 {
            return Err(ConfigError::Invalid(
                "ramp.increase_seconds must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn object_count(&self) -> usize {
        self.difficulty.object_count()
    }
}
