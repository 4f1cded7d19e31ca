//! Meteorite Dash entry point
//!
//! Runs a single game on the software framebuffer. Without real touch
//! hardware the player either stands still or, with `--idle`, is steered by
//! the autopilot. Virtual time is used unless `--realtime` is given.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use meteorite_dash::platform::{NoTouch, PcgRandom, SimClock, SystemClock};
use meteorite_dash::renderer::Framebuffer;
use meteorite_dash::ui::{draw_stats, stats_lines};
use meteorite_dash::{Difficulty, GameConfig, MapKind, MeteoriteDash};

#[derive(Parser, Debug)]
#[command(about = "Dodge the falling meteorites", version)]
struct Args {
    /// JSON config file; command-line options override it
    #[arg(long)]
    config: Option<PathBuf>,
    /// RNG seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
    /// easy (25 meteorites) or hard (50)
    #[arg(long)]
    difficulty: Option<String>,
    /// space, lava, mines or desert
    #[arg(long)]
    map: Option<String>,
    /// Let the autopilot play
    #[arg(long)]
    idle: bool,
    /// Pace ticks with the wall clock instead of virtual time
    #[arg(long)]
    realtime: bool,
    /// Write the final RGB565 frame (stats screen, little-endian) to this file
    #[arg(long)]
    dump_frame: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    log::info!("Meteorite Dash (native) starting...");

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(name) = &args.difficulty {
        let Some(difficulty) = Difficulty::from_str(name) else {
            bail!("unknown difficulty {name:?} (expected easy or hard)");
        };
        config.difficulty = difficulty;
    }
    if let Some(name) = &args.map {
        let Some(map) = MapKind::from_str(name) else {
            bail!("unknown map {name:?} (expected space, lava, mines or desert)");
        };
        config.map = map;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.idle_mode |= args.idle;
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => PcgRandom::new(seed),
        None => PcgRandom::from_entropy(),
    };
    log::info!("Using seed {}", rng.seed());

    let mut framebuffer = Framebuffer::default();
    let background = config.map.background();
    let mut game = MeteoriteDash::new(config);
    let result = if args.realtime {
        game.play(&mut framebuffer, &mut NoTouch, &mut SystemClock::new(), &mut rng)
    } else {
        game.play(&mut framebuffer, &mut NoTouch, &mut SimClock::new(), &mut rng)
    };

    draw_stats(&mut framebuffer, &result, background);
    for (label, value) in stats_lines(&game.last_result()) {
        println!("{label}: {value}");
    }
    println!("{}", serde_json::to_string(&result)?);

    if let Some(path) = &args.dump_frame {
        fs::write(path, framebuffer.to_le_bytes())
            .with_context(|| format!("writing frame to {}", path.display()))?;
        log::info!("Frame written to {}", path.display());
    }

    Ok(())
}
