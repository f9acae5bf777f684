//! Observer hooks for progress reporting and data collection.

use flock_core::Tick;
use flock_grid::Cell;
use tracing::{debug, info};

use crate::TickStats;

/// Callbacks invoked by [`FlockSimulation::run_ticks`][crate::FlockSimulation::run_ticks]
/// around each tick.
///
/// Every method defaults to a no-op.
///
/// # Example — pose recorder
///
/// ```rust,ignore
/// struct Recorder { frames: Vec<Vec<Pose>> }
///
/// impl FlockObserver for Recorder {
///     fn on_tick_end(&mut self, _stats: &TickStats, cells: &[Cell]) {
///         self.frames.push(cells.iter().flat_map(|c| c.agents()).map(Agent::pose).collect());
///     }
/// }
/// ```
pub trait FlockObserver {
    /// Called before the snapshot of tick `tick` is taken.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after every cell has advanced.  `cells` holds post-tick state.
    fn on_tick_end(&mut self, _stats: &TickStats, _cells: &[Cell]) {}

    /// Called once after the last tick of a `run_ticks` call.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`FlockObserver`] that does nothing.
pub struct NoopObserver;

impl FlockObserver for NoopObserver {}

/// Logs per-tick counters at `debug` and the final tick at `info`.
#[derive(Default)]
pub struct TracingObserver;

impl FlockObserver for TracingObserver {
    fn on_tick_end(&mut self, stats: &TickStats, _cells: &[Cell]) {
        debug!(
            tick = stats.tick.0,
            agents = stats.agents_updated,
            links = stats.neighbor_links,
            degenerate = stats.degenerate_forces,
            "tick complete",
        );
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        info!(tick = final_tick.0, "run finished");
    }
}
