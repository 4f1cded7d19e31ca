//! Per-tick simulation step
//!
//! Moves the player and every meteorite by one tick. Pacing, rendering and
//! the collision check are sequenced by the session driver in `crate::game`.

use super::meteorite::MeteoritePhase;
use super::player::TouchSide;
use super::state::GameSession;
use crate::consts::*;
use crate::platform::RandomSource;

/// Extra clearance the idle autopilot keeps from a meteorite (pixels)
const DODGE_MARGIN: i32 = 4;

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Raw touch position, `None` when the screen is not touched
    pub touch: Option<(i32, i32)>,
    /// Idle/demo mode - the autopilot steers instead of touch
    pub idle_mode: bool,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Direction the player was steered
    pub side: TouchSide,
    /// Meteorites that reached the bottom this tick
    pub destroyed: u32,
}

/// Advance the session by one tick
pub fn tick(state: &mut GameSession, input: &TickInput, rng: &mut dyn RandomSource) -> TickReport {
    if !state.is_running() {
        return TickReport::default();
    }

    let side = if input.idle_mode {
        autopilot_side(state)
    } else {
        TouchSide::from_touch(input.touch)
    };
    state.player.update_position(side);

    let base_speed = state.speed;
    let mut destroyed = 0;
    for meteorite in &mut state.meteorites {
        if meteorite.tick(base_speed, rng) {
            destroyed += 1;
        }
    }
    state.objects_survived += destroyed;
    state.time_ticks += 1;

    TickReport { side, destroyed }
}

/// Steer away from the lowest falling meteorite in the player's column,
/// otherwise drift back to the middle.
fn autopilot_side(state: &GameSession) -> TouchSide {
    let (px, py) = state.player.anchor();

    let threat = state
        .meteorites
        .iter()
        .filter(|m| m.phase() == MeteoritePhase::Falling)
        .filter(|m| m.y > (SCREEN_HEIGHT / 2) as f32 && m.y < (py + m.radius) as f32)
        .filter(|m| (m.x - px).abs() <= m.radius + PLAYER_RADIUS + DODGE_MARGIN)
        .max_by(|a, b| a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal));

    match threat {
        Some(m) if m.x > px => TouchSide::Left,
        Some(m) if m.x < px => TouchSide::Right,
        // Dead center: run toward the roomier side
        Some(_) if px > SCREEN_WIDTH / 2 => TouchSide::Left,
        Some(_) => TouchSide::Right,
        None if px < PLAYER_START_X - PLAYER_STEP => TouchSide::Right,
        None if px > PLAYER_START_X + PLAYER_STEP => TouchSide::Left,
        None => TouchSide::None,
    }
}
