//! Headless Survival Simulation
//!
//! Spawns the player and the configured agents, runs the tick schedule, and
//! writes every event to a JSONL log. Stops early if the player dies.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use survival_core::components::SimClock;
use survival_core::config::{Tuning, DEFAULT_TUNING_PATH};
use survival_core::{
    build_schedule, build_world, get_spawn_summary, AgentController, EventLogger, Vitals,
};
use survival_events::Gauge;
use tracing_subscriber::EnvFilter;

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "survival_sim")]
#[command(about = "Headless zombie survival simulation")]
struct Args {
    /// Tuning file (falls back to defaults when missing)
    #[arg(long, default_value = DEFAULT_TUNING_PATH)]
    config: PathBuf,

    /// Random seed for reproducibility (overrides the tuning file)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of ticks to simulate (overrides the tuning file)
    #[arg(long)]
    ticks: Option<u64>,

    /// Seconds per tick (overrides the tuning file)
    #[arg(long)]
    dt: Option<f32>,

    /// Event log output path
    #[arg(long, default_value = "output/events.jsonl")]
    events: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut tuning = match Tuning::load_or_default(&args.config) {
        Ok(tuning) => tuning,
        Err(e) => {
            tracing::error!("Invalid tuning file {}: {}", args.config.display(), e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(ticks) = args.ticks {
        tuning.simulation.ticks = ticks;
    }
    if let Some(dt) = args.dt {
        tuning.simulation.dt = dt.max(0.0);
    }
    let seed = args.seed.unwrap_or(tuning.simulation.seed);

    if let Some(parent) = args.events.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            tracing::warn!("Could not create {}: {}", parent.display(), e);
        }
    }
    let logger = match EventLogger::new(&args.events) {
        Ok(logger) => logger,
        Err(e) => {
            tracing::warn!("Could not open {}: {}. Events will not be written.", args.events.display(), e);
            EventLogger::null()
        }
    };

    tracing::info!(
        seed,
        ticks = tuning.simulation.ticks,
        dt = tuning.simulation.dt,
        "starting simulation"
    );

    let (mut world, player) = build_world(&tuning, seed, logger);
    let summary = get_spawn_summary(&mut world);
    tracing::info!("Spawned {}", summary);

    let mut schedule = build_schedule();
    for _ in 0..tuning.simulation.ticks {
        world.resource_mut::<SimClock>().advance();
        schedule.run(&mut world);

        if world.get::<Vitals>(player).is_some_and(Vitals::is_dead) {
            let now = world.resource::<SimClock>().now;
            tracing::info!("Player died at {}", now);
            break;
        }
    }

    let engaged = world
        .query::<&AgentController>()
        .iter(&world)
        .filter(|controller| controller.state().is_engaged())
        .count();
    tracing::info!("{} of {} agents engaged at the end of the run", engaged, summary.total_agents);

    let now = world.resource::<SimClock>().now;
    let logged = world.resource::<EventLogger>().event_count();
    if let Some(vitals) = world.get::<Vitals>(player) {
        tracing::info!(
            health = vitals.level(Gauge::Health),
            hunger = vitals.level(Gauge::Hunger),
            thirst = vitals.level(Gauge::Thirst),
            "Simulation complete at {} with {} events logged",
            now,
            logged
        );
    }

    if let Err(e) = world.resource_mut::<EventLogger>().flush() {
        tracing::warn!("Failed to flush event log: {}", e);
    }

    ExitCode::SUCCESS
}
