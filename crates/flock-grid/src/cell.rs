//! A spatial cell and the agents it owns.
//!
//! Membership is fixed at construction.  An agent that drifts outside its
//! cell's `bounds` stays owned by the cell and keeps drawing candidates from
//! the same neighbourhood; `bounds` only matter when agents are first placed.

use flock_agent::{Agent, AgentSnapshot, Integration};
use flock_core::{CellId, Rect, Vec2};
use tracing::trace;

use crate::{AdjacencyTable, FlockSnapshot};

/// Counters gathered while ticking one cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CellTickStats {
    /// Agents whose state was advanced.
    pub agents_updated:    usize,
    /// Sum over agents of their neighbour-set sizes.
    pub neighbor_links:    usize,
    /// Steering rules that were degenerate and contributed zero.
    pub degenerate_forces: usize,
}

impl std::ops::AddAssign for CellTickStats {
    fn add_assign(&mut self, rhs: Self) {
        self.agents_updated += rhs.agents_updated;
        self.neighbor_links += rhs.neighbor_links;
        self.degenerate_forces += rhs.degenerate_forces;
    }
}

/// One grid cell.
#[derive(Clone, Debug)]
pub struct Cell {
    id:     CellId,
    bounds: Rect,
    agents: Vec<Agent>,
}

impl Cell {
    pub fn new(id: CellId, bounds: Rect, agents: Vec<Agent>) -> Self {
        Self { id, bounds, agents }
    }

    #[inline]
    pub fn id(&self) -> CellId {
        self.id
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Owned agents in creation order.
    #[inline]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    #[inline]
    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    /// This cell's agents followed by those of each adjacent cell, in
    /// direction order, read from `snapshot`.
    ///
    /// The result is a fresh `Vec`; a neighbour cell listed twice is only
    /// included once.
    pub fn assemble_candidates(
        &self,
        adjacency: &AdjacencyTable,
        snapshot:  &FlockSnapshot,
    ) -> Vec<AgentSnapshot> {
        let mut cells: Vec<CellId> = Vec::with_capacity(9);
        cells.push(self.id);
        for n in adjacency.neighbor_ids(self.id) {
            if !cells.contains(&n) {
                cells.push(n);
            }
        }

        let total = cells.iter().map(|&c| snapshot.cell(c).len()).sum();
        let mut candidates = Vec::with_capacity(total);
        for c in cells {
            candidates.extend_from_slice(snapshot.cell(c));
        }
        candidates
    }

    /// Advance every owned agent one tick against `candidates`.
    ///
    /// All steering vectors are computed before any agent moves, so the
    /// result does not depend on agent order within the cell.
    pub fn tick(&mut self, candidates: &[AgentSnapshot], integration: Integration) -> CellTickStats {
        let mut stats = CellTickStats::default();

        let steering: Vec<Vec2> = self
            .agents
            .iter()
            .map(|agent| {
                let neighbors = agent.compute_neighbors(candidates);
                stats.neighbor_links += neighbors.len();
                let (steer, degenerate) = agent.compute_steering(&neighbors);
                stats.degenerate_forces += degenerate;
                steer
            })
            .collect();

        for (agent, steer) in self.agents.iter_mut().zip(steering) {
            agent.advance(steer, integration);
        }
        stats.agents_updated = self.agents.len();

        trace!(
            cell = self.id.0,
            agents = stats.agents_updated,
            links = stats.neighbor_links,
            degenerate = stats.degenerate_forces,
            "cell ticked",
        );
        stats
    }
}
