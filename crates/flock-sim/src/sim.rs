//! `FlockSimulation` — owns the cell arena and drives the tick loop.

use flock_agent::{Integration, Pose};
use flock_core::{AgentId, FlockConfig, Tick};
use flock_grid::{AdjacencyTable, Cell, CellTickStats, FlockSnapshot, GridLayout};
use tracing::trace;

use crate::{FlockObserver, SimError, SimResult};

/// Counters for one completed tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    /// The tick that was just processed.
    pub tick:              Tick,
    pub agents_updated:    usize,
    /// Sum over agents of their neighbour-set sizes.
    pub neighbor_links:    usize,
    pub degenerate_forces: usize,
}

impl TickStats {
    fn from_cells(tick: Tick, cell: CellTickStats) -> Self {
        Self {
            tick,
            agents_updated:    cell.agents_updated,
            neighbor_links:    cell.neighbor_links,
            degenerate_forces: cell.degenerate_forces,
        }
    }
}

/// The flocking engine.  Build with [`FlockBuilder`][crate::FlockBuilder].
pub struct FlockSimulation {
    pub(crate) config:      FlockConfig,
    pub(crate) layout:      GridLayout,
    pub(crate) adjacency:   AdjacencyTable,
    /// Indexed by `CellId`.
    pub(crate) cells:       Vec<Cell>,
    pub(crate) per_cell:    usize,
    pub(crate) integration: Integration,
    pub(crate) seed:        u64,
    pub(crate) tick:        Tick,
    #[cfg(feature = "parallel")]
    pub(crate) pool:        Option<rayon::ThreadPool>,
}

impl FlockSimulation {
    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance the whole flock by one tick.
    ///
    /// Every agent's steering is computed from the state at the start of the
    /// tick, regardless of the order in which cells are processed.  With the
    /// `parallel` feature, cells are processed on Rayon's thread pool.
    pub fn step(&mut self) -> TickStats {
        #[cfg(feature = "parallel")]
        let stats = self.step_with(Self::tick_cells_parallel);
        #[cfg(not(feature = "parallel"))]
        let stats = self.step_with(Self::tick_cells_sequential);
        stats
    }

    /// Advance one tick on the calling thread, whatever the feature set.
    pub fn step_sequential(&mut self) -> TickStats {
        self.step_with(Self::tick_cells_sequential)
    }

    /// Run `n` ticks, notifying `observer` around each.
    pub fn run_ticks<O: FlockObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            observer.on_tick_start(self.tick);
            let stats = self.step();
            observer.on_tick_end(&stats, &self.cells);
        }
        observer.on_sim_end(self.tick);
    }

    fn step_with(&mut self, phase: fn(&mut Self, &FlockSnapshot) -> CellTickStats) -> TickStats {
        let now = self.tick;
        let snapshot = FlockSnapshot::capture(&self.cells);
        let totals = phase(self, &snapshot);
        self.tick = now.next();

        let stats = TickStats::from_cells(now, totals);
        trace!(tick = now.0, agents = stats.agents_updated, "step complete");
        stats
    }

    fn tick_cells_sequential(&mut self, snapshot: &FlockSnapshot) -> CellTickStats {
        let adjacency = &self.adjacency;
        let integration = self.integration;
        let mut totals = CellTickStats::default();
        for cell in &mut self.cells {
            let candidates = cell.assemble_candidates(adjacency, snapshot);
            totals += cell.tick(&candidates, integration);
        }
        totals
    }

    #[cfg(feature = "parallel")]
    fn tick_cells_parallel(&mut self, snapshot: &FlockSnapshot) -> CellTickStats {
        use rayon::prelude::*;

        let adjacency = &self.adjacency;
        let integration = self.integration;
        let cells = &mut self.cells;
        let mut run = || {
            cells
                .par_iter_mut()
                .map(|cell| {
                    let candidates = cell.assemble_candidates(adjacency, snapshot);
                    cell.tick(&candidates, integration)
                })
                .collect::<Vec<_>>()
        };
        let per_cell = match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        };

        let mut totals = CellTickStats::default();
        for s in per_cell {
            totals += s;
        }
        totals
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn agent_count(&self) -> usize {
        self.cells.iter().map(Cell::agent_count).sum()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of ticks completed so far.
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// Seed used for initial placement (drawn from entropy if none was set).
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &FlockConfig {
        &self.config
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn adjacency(&self) -> &AdjacencyTable {
        &self.adjacency
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Current pose of `id`.
    ///
    /// # Errors
    /// [`SimError::AgentNotFound`] if `id` is outside `0..agent_count`.
    pub fn pose(&self, id: AgentId) -> SimResult<Pose> {
        if self.per_cell == 0 {
            return Err(SimError::AgentNotFound(id));
        }
        let idx = id.index();
        self.cells
            .get(idx / self.per_cell)
            .and_then(|cell| cell.agents().get(idx % self.per_cell))
            .map(|agent| agent.pose())
            .ok_or(SimError::AgentNotFound(id))
    }

    /// Poses of every agent in `AgentId` order.
    pub fn poses(&self) -> impl Iterator<Item = Pose> + '_ {
        self.cells.iter().flat_map(|cell| cell.agents().iter().map(|a| a.pose()))
    }
}
