//! Headless driver that runs the AI brains on a map and logs every turn.
//!
//! ```bash
//! SIM_MAP=arena.ron SIM_TURNS=200 SIM_SEED=3 RUST_LOG=runtime=debug brain-sim
//! ```
mod config;

use anyhow::Result;
use game_core::{ActorKind, BrainKind, GameConfig, GameError, MapLayout, Position, SpawnSpec};
use game_content::{ConfigLoader, MapLoader};
use runtime::{PlayerInput, Simulation};
use tracing_subscriber::EnvFilter;

use crate::config::SimConfig;

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let config = SimConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let game_config = match &config.config_path {
        Some(path) => ConfigLoader::load(path)?,
        None => GameConfig::default(),
    };
    let layout = match &config.map_path {
        Some(path) => MapLoader::load(path)?,
        None => default_arena()?,
    };

    tracing::info!(
        "running {} turns on a {}x{} map (seed {})",
        config.turns,
        layout.dimensions().width,
        layout.dimensions().height,
        config.seed
    );

    let mut simulation = Simulation::seeded(&layout, game_config, config.seed)?;
    let mut keys = config.keys.chars().cycle();

    for _ in 0..config.turns {
        let Some(next) = simulation.next_actor() else {
            tracing::info!("no actors left");
            break;
        };
        let input = if simulation.player() == Some(next) {
            keys.next().map(PlayerInput::Key)
        } else {
            None
        };

        let outcome = match simulation.step(input) {
            Ok(outcome) => outcome,
            Err(err) => {
                let severity = err.severity();
                tracing::error!(
                    "[{}] step failed ({}, {}): {}",
                    simulation.clock(),
                    severity.as_str(),
                    err.error_code(),
                    err
                );
                if severity.is_recoverable() {
                    break;
                }
                return Err(err.into());
            }
        };
        let name = simulation
            .world()
            .record(outcome.actor)
            .map_or_else(|| outcome.actor.to_string(), |record| record.name.clone());
        match &outcome.action {
            Some(action) => tracing::info!(
                "[{}] {} -> {:?} (energy {})",
                simulation.clock(),
                name,
                action,
                outcome.energy
            ),
            None => tracing::info!("[{}] {} waits", simulation.clock(), name),
        }
    }

    Ok(())
}

/// Walled room with one of each brain.
fn default_arena() -> Result<MapLayout> {
    let layout = MapLayout::from_rows(&[
        "################",
        "#..............#",
        "#..*....##.....#",
        "#.......##..>..#",
        "#..............#",
        "#....####......#",
        "#..............#",
        "################",
    ])?;

    let spawn = |name: &str, kind, brain, x, y| SpawnSpec::new(name, kind, brain, Position::new(x, y));
    Ok(layout.with_spawns(vec![
        spawn("hero", ActorKind::Player, BrainKind::Player, 2, 1),
        spawn("rogue", ActorKind::Human, BrainKind::Rogue, 13, 6),
        spawn("wolf", ActorKind::Animal, BrainKind::Animal, 7, 1),
        spawn("imp", ActorKind::Demon, BrainKind::Demon, 12, 1),
        spawn("ghoul", ActorKind::Zombie, BrainKind::Zombie, 3, 6),
        spawn("Summoner", ActorKind::Summoner, BrainKind::Summoner, 14, 4),
        spawn("guard", ActorKind::Human, BrainKind::Human, 5, 3),
        spawn("wisp", ActorKind::Spirit, BrainKind::Spirit, 10, 5),
    ]))
}
