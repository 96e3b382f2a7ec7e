//! Runs a compass session against a synthetic world and logs the indicator.
mod world;

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use compass_core::{EntityCategory, Subtype, TickOutcome};
use compass_host::{HostConfig, SessionBuilder};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::world::SyntheticWorld;

#[derive(Parser, Debug)]
#[command(name = "compass-sim", about = "Drive the nearest-entity tracker with a synthetic world")]
struct Args {
    /// Simulation steps to run.
    #[arg(long, default_value_t = 1_000)]
    ticks: u64,

    /// Number of NPCs to spawn.
    #[arg(long, default_value_t = 150)]
    npcs: u32,

    /// Largest NPC subtype to spawn (subtypes are 1..=N).
    #[arg(long, default_value_t = 12)]
    subtypes: i32,

    /// RNG seed for spawn positions and movement.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Tracker config TOML (overrides COMPASS_CONFIG).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pin preset RON (overrides COMPASS_PINS).
    #[arg(long)]
    pins: Option<PathBuf>,

    /// Extra pin as `category:subtype`, e.g. `npc:4`. Repeatable.
    #[arg(long = "pin", value_parser = parse_pin)]
    extra_pins: Vec<(EntityCategory, Subtype)>,

    /// Log the indicator every N steps.
    #[arg(long, default_value_t = 60)]
    report_every: u64,
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let args = Args::parse();
    if args.subtypes < 1 {
        bail!("--subtypes must be at least 1");
    }

    let mut host = HostConfig::from_env();
    if args.config.is_some() {
        host.config_path = args.config.clone();
    }
    if args.pins.is_some() {
        host.pins_path = args.pins.clone();
    }

    let mut preset = host.pin_preset()?;
    for (category, subtype) in &args.extra_pins {
        preset = preset.with(*category, [subtype.0]);
    }
    let mut session = SessionBuilder::new()
        .config(host.tracker_config()?)
        .preset(preset)
        .build();

    let subtypes: Vec<i32> = (1..=args.subtypes).collect();
    let mut world = SyntheticWorld::new(args.npcs, &subtypes, args.seed);

    let report = session.on_world_load(world.player, &world);
    tracing::info!(closest = ?report.closest, eligible = report.eligible, "initial scan");

    let mut scans = 0u64;
    for step in 1..=args.ticks {
        world.step();

        if let TickOutcome::Scanned(report) = session.update(world.player, &world) {
            scans += 1;
            if report.changed() {
                tracing::info!(
                    step,
                    previous = ?report.previous,
                    closest = ?report.closest,
                    distance = ?report.distance,
                    "closest changed"
                );
            }
        }

        if args.report_every > 0 && step % args.report_every == 0 {
            match session.draw(world.player, &world) {
                Some(indicator) => tracing::info!(
                    step,
                    target = %indicator.target,
                    subtype = %indicator.subtype,
                    angle = indicator.bearing.angle.to_degrees(),
                    distance = indicator.bearing.distance,
                    "indicator"
                ),
                None => tracing::info!(step, active = world.active_count(), "no indicator"),
            }
        }
    }

    session.on_world_unload();
    tracing::info!(steps = args.ticks, scans, "simulation finished");

    Ok(())
}

/// Parses `category:subtype`.
fn parse_pin(value: &str) -> Result<(EntityCategory, Subtype)> {
    let (category, subtype) = value
        .split_once(':')
        .with_context(|| format!("expected category:subtype, got '{value}'"))?;
    let category: EntityCategory = category
        .trim()
        .parse()
        .map_err(|_| anyhow!("unknown category '{category}'"))?;
    let subtype: i32 = subtype
        .trim()
        .parse()
        .with_context(|| format!("invalid subtype '{subtype}'"))?;

    Ok((category, Subtype(subtype)))
}

/// Setup logging to stderr, filtered by RUST_LOG (default: info).
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
