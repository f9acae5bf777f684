//! stepper — headless driver for the flock boids engine.
//!
//! ```text
//! stepper [CONFIG.json] [TICKS]
//! ```
//!
//! Without a config file the default flock is used (90 agents over a 3 × 3
//! grid in a 700 × 700 world).  Set `RUST_LOG=debug` for per-tick counters.

use std::fs::File;
use std::io::BufReader;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use flock_core::{FlockConfig, Tick};
use flock_grid::Cell;
use flock_sim::{FlockBuilder, FlockObserver, TickStats, TracingObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_TICKS: u64   = 100;
const DEFAULT_SEED:  u64   = 42;
const TABLE_ROWS:    usize = 12; // first N agents printed

// ── Observer ──────────────────────────────────────────────────────────────────

/// Accumulates run-wide totals and forwards to [`TracingObserver`].
#[derive(Default)]
struct SummaryObserver {
    inner:             TracingObserver,
    ticks:             u64,
    neighbor_links:    usize,
    degenerate_forces: usize,
}

impl FlockObserver for SummaryObserver {
    fn on_tick_end(&mut self, stats: &TickStats, cells: &[Cell]) {
        self.ticks += 1;
        self.neighbor_links += stats.neighbor_links;
        self.degenerate_forces += stats.degenerate_forces;
        self.inner.on_tick_end(stats, cells);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── Arguments ─────────────────────────────────────────────────────────────────

fn parse_args() -> Result<(FlockConfig, u64)> {
    let mut config = FlockConfig { seed: Some(DEFAULT_SEED), ..FlockConfig::default() };
    let mut ticks = DEFAULT_TICKS;

    for arg in std::env::args().skip(1) {
        if let Ok(n) = arg.parse::<u64>() {
            ticks = n;
        } else {
            let file = File::open(&arg).with_context(|| format!("opening config {arg}"))?;
            config = serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("parsing config {arg}"))?;
        }
    }
    Ok((config, ticks))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let (config, ticks) = parse_args()?;

    println!("=== stepper — flock boids engine ===");
    println!(
        "Agents: {}  |  Cells: {}  |  World: {} × {}  |  Policy: {}",
        config.total_agent_count,
        config.cell_count,
        config.world_width,
        config.world_height,
        config.integration_policy,
    );
    println!();

    let mut sim = FlockBuilder::new(config).build()?;
    info!(seed = sim.seed(), rows = sim.layout().rows, cols = sim.layout().cols, "flock ready");

    let mut obs = SummaryObserver::default();
    let t0 = Instant::now();
    sim.run_ticks(ticks, &mut obs);
    let elapsed = t0.elapsed();

    println!("Ran {} ticks in {:.3} s (seed {})", obs.ticks, elapsed.as_secs_f64(), sim.seed());
    if obs.ticks > 0 {
        println!(
            "  mean neighbour links / tick : {:.1}",
            obs.neighbor_links as f64 / obs.ticks as f64
        );
    }
    println!("  degenerate forces (total)   : {}", obs.degenerate_forces);
    println!();

    println!("{:<12} {:>10} {:>10} {:>9}", "Agent", "x", "y", "heading");
    println!("{}", "-".repeat(44));
    for pose in sim.poses().take(TABLE_ROWS) {
        println!(
            "{:<12} {:>10.2} {:>10.2} {:>9.3}",
            pose.id.to_string(),
            pose.position.x,
            pose.position.y,
            pose.heading,
        );
    }
    if sim.agent_count() > TABLE_ROWS {
        println!("… {} more", sim.agent_count() - TABLE_ROWS);
    }

    Ok(())
}
