//! Session driver
//!
//! Runs one game from start to explosion against the platform capabilities:
//! poll touch, draw, step the simulation, pace, check for a hit.

use log::{debug, info};

use crate::consts::{EXPLOSION_RADII, EXPLOSION_STAGE_MS};
use crate::platform::{Clock, RandomSource, TouchInput};
use crate::renderer::{Renderer, scene};
use crate::settings::GameConfig;
use crate::sim::{GameSession, SessionResult, TickInput, tick};

/// Play one run until the player is hit.
///
/// Each frame is drawn before the tick, so it shows the field as the
/// previous tick left it.
pub fn run_session<R, T, C>(
    config: &GameConfig,
    renderer: &mut R,
    touch: &mut T,
    clock: &mut C,
    rng: &mut dyn RandomSource,
) -> SessionResult
where
    R: Renderer,
    T: TouchInput,
    C: Clock,
{
    let mut session = GameSession::new(config.object_count(), config.ramp, rng);
    let background = config.map.background();
    let start = clock.now_millis();
    info!(
        "Starting {} run on {} with {} meteorites",
        config.difficulty.as_str(),
        config.map.as_str(),
        session.meteorites.len()
    );

    while session.is_running() {
        let input = TickInput {
            touch: touch.poll_touch(),
            idle_mode: config.idle_mode,
        };

        scene::draw_frame(renderer, &session, background);
        let report = tick(&mut session, &input, rng);
        if report.destroyed > 0 {
            debug!(
                "tick {}: {} meteorite(s) survived, total {}",
                session.time_ticks, report.destroyed, session.objects_survived
            );
        }

        session.advance_clock(clock.now_millis().saturating_sub(start));
        clock.sleep_ms(config.tick_ms);
        session.check_collision();
    }

    // Non-interactive explosion
    for stage in 0..EXPLOSION_RADII.len() {
        scene::draw_explosion_stage(renderer, &session.player, stage);
        clock.sleep_ms(EXPLOSION_STAGE_MS);
    }
    session.finish();

    let result = session.result();
    info!(
        "Run over: survived {:.3}s, {} meteorites",
        result.elapsed_secs(),
        result.objects_survived
    );
    result
}

/// The game between runs: configuration plus the last run's stats
#[derive(Debug, Clone, Default)]
pub struct MeteoriteDash {
    pub config: GameConfig,
    last_result: Option<SessionResult>,
}

impl MeteoriteDash {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            last_result: None,
        }
    }

    /// Play a run and keep its result for the stats screen
    pub fn play<R, T, C>(
        &mut self,
        renderer: &mut R,
        touch: &mut T,
        clock: &mut C,
        rng: &mut dyn RandomSource,
    ) -> SessionResult
    where
        R: Renderer,
        T: TouchInput,
        C: Clock,
    {
        let result = run_session(&self.config, renderer, touch, clock, rng);
        self.last_result = Some(result);
        result
    }

    /// Stats of the most recent run, zeroed before the first one
    pub fn last_result(&self) -> SessionResult {
        self.last_result.unwrap_or_default()
    }

    pub fn has_played(&self) -> bool {
        self.last_result.is_some()
    }
}
