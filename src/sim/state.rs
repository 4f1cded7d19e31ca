//! Game session state
//!
//! One `GameSession` is one run: created when the player starts, advanced
//! every tick, frozen on the first collision.

use serde::{Deserialize, Serialize};

use super::collision::collides;
use super::difficulty::DifficultyRamp;
use super::meteorite::Meteorite;
use super::player::Player;
use crate::platform::RandomSource;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Active gameplay
    Running,
    /// Player was hit; explosion plays
    Collided,
    /// Run ended, result is final
    Finished,
}

/// What the stats screen shows after a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionResult {
    /// Time survived
    pub elapsed_ms: u64,
    /// Meteorites that reached the bottom without hitting the player
    pub objects_survived: u32,
}

impl SessionResult {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_ms as f64 / 1000.0
    }
}

/// Complete state of one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    pub phase: SessionPhase,
    pub player: Player,
    pub meteorites: Vec<Meteorite>,
    /// Wall time since the run started
    pub elapsed_ms: u64,
    /// Base speed new meteorites spawn with
    pub speed: f32,
    pub objects_survived: u32,
    /// Ticks simulated so far
    pub time_ticks: u64,
    ramp: DifficultyRamp,
}

impl GameSession {
    /// Start a run with `meteorite_count` meteorites, each given a random
    /// start delay.
    pub fn new(meteorite_count: usize, ramp: DifficultyRamp, rng: &mut dyn RandomSource) -> Self {
        let speed = ramp.speed_at(0);
        let meteorites = (0..meteorite_count)
            .map(|_| Meteorite::new(speed, &mut *rng))
            .collect();

        Self {
            phase: SessionPhase::Running,
            player: Player::default(),
            meteorites,
            elapsed_ms: 0,
            speed,
            objects_survived: 0,
            time_ticks: 0,
            ramp,
        }
    }

    pub fn ramp(&self) -> &DifficultyRamp {
        &self.ramp
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    /// Record wall time and recompute the game speed
    pub fn advance_clock(&mut self, elapsed_ms: u64) {
        if !self.is_running() {
            return;
        }
        self.elapsed_ms = self.elapsed_ms.max(elapsed_ms);
        self.speed = self.ramp.speed_at(self.elapsed_ms);
    }

    /// Check the player against every live meteorite; a hit freezes the run.
    pub fn check_collision(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        if collides(&self.player, &self.meteorites) {
            self.phase = SessionPhase::Collided;
            log::info!(
                "player hit after {} ms ({} meteorites survived)",
                self.elapsed_ms,
                self.objects_survived
            );
            return true;
        }
        false
    }

    /// Collided -> Finished
    pub fn finish(&mut self) {
        if self.phase == SessionPhase::Collided {
            self.phase = SessionPhase::Finished;
        }
    }

    pub fn result(&self) -> SessionResult {
        SessionResult {
            elapsed_ms: self.elapsed_ms,
            objects_survived: self.objects_survived,
        }
    }
}
