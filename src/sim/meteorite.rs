//! Falling meteorites
//!
//! Each meteorite cycles through three phases:
//! - `Waiting`: one-time start delay so the field does not spawn in a single wave
//! - `Falling`: moves down by `speed` pixels per tick until it reaches the bottom
//! - `Respawning`: off screen for a randomized number of ticks, then reset at the top

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::platform::RandomSource;

/// Lifecycle phase of a meteorite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeteoritePhase {
    Waiting,
    Falling,
    Respawning,
}

/// A single falling hazard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meteorite {
    pub radius: i32,
    pub x: i32,
    pub y: f32,
    /// Pixels per tick
    pub speed: f32,
    /// Ticks until respawn; non-zero means dead
    respawn_delay: u32,
    /// Ticks before the first appearance
    start_delay: u32,
}

impl Meteorite {
    /// Spawn with a random size, speed and column, plus a random start delay
    /// spread over one average meteorite cycle.
    pub fn new(base_speed: f32, rng: &mut dyn RandomSource) -> Self {
        let mut meteorite = Self {
            radius: METEORITE_RADIUS_MIN,
            x: METEORITE_RADIUS_MIN,
            y: 0.0,
            speed: MIN_SPEED,
            respawn_delay: 0,
            start_delay: 0,
        };
        meteorite.reset(base_speed, rng);

        let average_cycle = (SCREEN_HEIGHT - (METEORITE_RADIUS_MIN + METEORITE_RADIUS_MAX)) as f32
            / meteorite.speed
            + (meteorite.death_min() + meteorite.death_max()) / 2.0;
        meteorite.start_delay = to_ticks(rng.next_unit() * average_cycle);
        meteorite
    }

    /// Resample radius, speed and column and move back to the top
    pub fn reset(&mut self, base_speed: f32, rng: &mut dyn RandomSource) {
        let base_speed = sanitize_speed(base_speed);
        let spread = METEORITE_SPEED_MIN
            + rng.next_unit() * (METEORITE_SPEED_MAX - METEORITE_SPEED_MIN);
        self.speed = (base_speed * spread).max(MIN_SPEED);
        self.radius = uniform_int(rng, METEORITE_RADIUS_MIN, METEORITE_RADIUS_MAX);
        self.y = (self.radius + 2) as f32;
        self.x = uniform_int(rng, self.radius, SCREEN_WIDTH - 2 - self.radius);

        debug_assert!((METEORITE_RADIUS_MIN..=METEORITE_RADIUS_MAX).contains(&self.radius));
        debug_assert!(self.speed > 0.0);
    }

    /// Advance one tick. Returns true if the meteorite reached the bottom
    /// on this tick (i.e. the player survived it).
    pub fn tick(&mut self, base_speed: f32, rng: &mut dyn RandomSource) -> bool {
        if self.start_delay > 0 {
            self.start_delay -= 1;
            return false;
        }

        if self.respawn_delay > 0 {
            self.respawn_delay -= 1;
            if self.respawn_delay == 0 {
                self.reset(base_speed, rng);
                log::trace!(
                    "meteorite respawned at x={} r={} speed={:.3}",
                    self.x,
                    self.radius,
                    self.speed
                );
            }
            return false;
        }

        if self.y < (SCREEN_HEIGHT - self.radius) as f32 {
            self.y += self.speed;
            return false;
        }

        let (death_min, death_max) = (self.death_min(), self.death_max());
        let window = death_min + rng.next_unit() * (death_max - death_min);
        // At least one tick dead, otherwise the same fall would be counted again
        self.respawn_delay = to_ticks(window / self.speed).max(1);
        true
    }

    /// Dead meteorites (waiting to respawn) cannot hit the player.
    ///
    /// Meteorites still in their start delay count as alive; they sit at the
    /// top of the screen, far from the player.
    pub fn is_alive(&self) -> bool {
        self.respawn_delay == 0
    }

    pub fn phase(&self) -> MeteoritePhase {
        if self.start_delay > 0 {
            MeteoritePhase::Waiting
        } else if self.respawn_delay > 0 {
            MeteoritePhase::Respawning
        } else {
            MeteoritePhase::Falling
        }
    }

    pub fn respawn_delay(&self) -> u32 {
        self.respawn_delay
    }

    pub fn start_delay(&self) -> u32 {
        self.start_delay
    }

    /// Center in screen coordinates
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y)
    }

    /// Ticks needed to cross the screen at the current speed
    pub fn alive_cycles(&self) -> f32 {
        (SCREEN_HEIGHT - 2 * self.radius) as f32 / self.speed
    }

    pub fn death_min(&self) -> f32 {
        self.alive_cycles() * METEORITE_DEATH_MIN
    }

    pub fn death_max(&self) -> f32 {
        self.alive_cycles() * METEORITE_DEATH_MAX
    }
}

/// Uniform integer in `[lo, hi]`
fn uniform_int(rng: &mut dyn RandomSource, lo: i32, hi: i32) -> i32 {
    if hi <= lo {
        return lo;
    }
    let span = hi - lo;
    let offset = (rng.next_unit() * (span + 1) as f32) as i32;
    lo + offset.min(span)
}

/// Float tick count to a whole, non-negative number of ticks
fn to_ticks(value: f32) -> u32 {
    debug_assert!(!value.is_nan(), "tick count is NaN");
    if value.is_nan() || value <= 0.0 {
        0
    } else {
        value as u32
    }
}

/// Non-finite or too-slow base speeds are a caller bug; release builds fall
/// back to `MIN_SPEED`.
fn sanitize_speed(speed: f32) -> f32 {
    debug_assert!(
        speed.is_finite() && speed >= MIN_SPEED,
        "base speed {speed} out of range"
    );
    if speed.is_finite() && speed >= MIN_SPEED {
        speed
    } else {
        log::warn!("base speed {speed} out of range, clamping to {MIN_SPEED}");
        MIN_SPEED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::PcgRandom;
    use crate::sim::test_support::FixedRandom;
    use proptest::prelude::*;

    /// A meteorite of radius 10 moving at 0.5 px/tick, sitting on the bottom edge
    fn at_bottom() -> Meteorite {
        Meteorite {
            radius: 10,
            x: 100,
            y: (SCREEN_HEIGHT - 10) as f32,
            speed: 0.5,
            respawn_delay: 0,
            start_delay: 0,
        }
    }

    #[test]
    fn test_new_samples_within_ranges() {
        let mut rng = PcgRandom::new(1234);
        for _ in 0..500 {
            let m = Meteorite::new(SPEED_START, &mut rng);
            assert!((METEORITE_RADIUS_MIN..=METEORITE_RADIUS_MAX).contains(&m.radius));
            assert!(m.x >= m.radius && m.x <= SCREEN_WIDTH - 2 - m.radius);
            assert_eq!(m.y, (m.radius + 2) as f32);
            assert!(m.speed >= SPEED_START * METEORITE_SPEED_MIN - 1e-6);
            assert!(m.speed <= SPEED_START * METEORITE_SPEED_MAX + 1e-6);
            assert!(m.is_alive());
        }
    }

    #[test]
    fn test_start_delay_bounds() {
        // Unit sample of 0 spawns immediately
        let m = Meteorite::new(SPEED_START, &mut FixedRandom::min());
        assert_eq!(m.start_delay(), 0);
        assert_eq!(m.phase(), MeteoritePhase::Falling);

        // Unit sample of 1 waits a whole average cycle
        let m = Meteorite::new(SPEED_START, &mut FixedRandom::max());
        let expected = (SCREEN_HEIGHT - 18) as f32 / m.speed + (m.death_min() + m.death_max()) / 2.0;
        assert_eq!(m.start_delay(), expected as u32);
        assert_eq!(m.phase(), MeteoritePhase::Waiting);
    }

    #[test]
    fn test_start_delay_staggers_spawns() {
        let mut rng = PcgRandom::new(99);
        let delays: Vec<u32> = (0..50)
            .map(|_| Meteorite::new(SPEED_START, &mut rng).start_delay())
            .collect();
        let distinct: std::collections::HashSet<_> = delays.iter().collect();
        assert!(distinct.len() > 25, "start delays should be spread out");
    }

    #[test]
    fn test_waiting_meteorite_does_not_move() {
        let mut m = at_bottom();
        m.y = 12.0;
        m.start_delay = 3;
        let mut rng = FixedRandom::mid();
        for _ in 0..3 {
            assert!(!m.tick(SPEED_START, &mut rng));
            assert_eq!(m.y, 12.0);
        }
        assert_eq!(m.phase(), MeteoritePhase::Falling);
        m.tick(SPEED_START, &mut rng);
        assert_eq!(m.y, 12.5);
    }

    #[test]
    fn test_falling_advances_by_speed() {
        let mut m = at_bottom();
        m.y = 50.0;
        assert!(!m.tick(SPEED_START, &mut FixedRandom::mid()));
        assert_eq!(m.y, 50.5);
    }

    #[test]
    fn test_respawn_window_scenario() {
        // alive cycles = (240 - 20) / 0.5 = 440, death window 88..352 cycles
        let mut m = at_bottom();
        assert_eq!(m.alive_cycles(), 440.0);
        assert!((m.death_min() - 88.0).abs() < 1e-3);
        assert!((m.death_max() - 352.0).abs() < 1e-3);

        assert!(m.tick(SPEED_START, &mut FixedRandom::min()));
        assert_eq!(m.respawn_delay(), 176);
        assert!(!m.is_alive());

        let mut m = at_bottom();
        assert!(m.tick(SPEED_START, &mut FixedRandom::max()));
        assert!((703..=704).contains(&m.respawn_delay()));

        let mut rng = PcgRandom::new(5);
        for _ in 0..200 {
            let mut m = at_bottom();
            assert!(m.tick(SPEED_START, &mut rng));
            assert!((176..=704).contains(&m.respawn_delay()));
        }
    }

    #[test]
    fn test_respawn_counts_down_then_resets() {
        let mut m = at_bottom();
        let mut rng = FixedRandom::min();
        assert!(m.tick(SPEED_START, &mut rng));
        let delay = m.respawn_delay();

        for expected in (1..delay).rev() {
            assert!(!m.tick(SPEED_START, &mut rng));
            assert_eq!(m.respawn_delay(), expected);
            assert_eq!(m.phase(), MeteoritePhase::Respawning);
        }

        // Last countdown tick resets without reporting a death
        assert!(!m.tick(1.0, &mut rng));
        assert_eq!(m.respawn_delay(), 0);
        assert!(m.is_alive());
        assert_eq!(m.radius, METEORITE_RADIUS_MIN);
        assert_eq!(m.y, (METEORITE_RADIUS_MIN + 2) as f32);
        assert_eq!(m.x, METEORITE_RADIUS_MIN);
        // Respawned with the base speed current at reset time
        assert_eq!(m.speed, 1.0 * METEORITE_SPEED_MIN);
    }

    #[test]
    fn test_fast_meteorite_stays_dead_at_least_one_tick() {
        let mut m = at_bottom();
        m.speed = 200.0;
        assert!(m.tick(SPEED_START, &mut FixedRandom::min()));
        assert_eq!(m.respawn_delay(), 1);
        assert!(!m.tick(SPEED_START, &mut FixedRandom::min()));
        assert!(m.is_alive());
    }

    #[test]
    fn test_falling_keeps_sampled_speed_when_base_rises() {
        let mut m = at_bottom();
        m.y = 50.0;
        assert!(!m.tick(5.0, &mut FixedRandom::mid()));
        assert_eq!(m.speed, 0.5);
        assert_eq!(m.y, 50.5);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of range")]
    fn test_invalid_base_speed_panics_in_debug() {
        Meteorite::new(0.0, &mut PcgRandom::new(3));
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_invalid_base_speed_is_clamped() {
        let mut rng = PcgRandom::new(3);
        for base in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let m = Meteorite::new(base, &mut rng);
            assert!(m.speed > 0.0 && m.speed.is_finite());
        }
    }

    proptest! {
        #[test]
        fn prop_lifecycle_invariants(seed in any::<u64>(), ramp in 0u32..200) {
            let mut rng = PcgRandom::new(seed);
            let base_speed = SPEED_START + ramp as f32 * SPEED_INCREASE_AMOUNT;
            let mut m = Meteorite::new(base_speed, &mut rng);

            for _ in 0..3_000 {
                let before = m.respawn_delay();
                let died = m.tick(base_speed, &mut rng);

                prop_assert!((METEORITE_RADIUS_MIN..=METEORITE_RADIUS_MAX).contains(&m.radius));
                prop_assert!(m.speed > 0.0);
                prop_assert!(m.x >= m.radius && m.x <= SCREEN_WIDTH - 2 - m.radius);
                if !m.is_alive() {
                    prop_assert!(m.respawn_delay() > 0);
                }
                if before > 0 {
                    // Counts down one at a time, never skipping zero
                    prop_assert!(!died);
                    prop_assert_eq!(m.respawn_delay(), before - 1);
                    if m.respawn_delay() == 0 {
                        prop_assert_eq!(m.y, (m.radius + 2) as f32);
                    }
                }
                if died {
                    prop_assert!(m.respawn_delay() > 0);
                }
            }
        }
    }
}
