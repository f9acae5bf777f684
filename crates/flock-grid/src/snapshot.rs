//! Tick-start copy of every cell's agents.
//!
//! The snapshot is the read buffer of the double-buffered tick: candidate
//! assembly and steering read only from here, while each cell writes its
//! own agents.  Nothing an agent does this tick is visible to another agent
//! until the next snapshot.

use flock_agent::AgentSnapshot;
use flock_core::CellId;

use crate::Cell;

/// Per-cell agent snapshots, indexed by `CellId`.
#[derive(Clone, Debug, Default)]
pub struct FlockSnapshot {
    cells: Vec<Vec<AgentSnapshot>>,
}

impl FlockSnapshot {
    /// Copy the state of every agent in `cells`.  `cells[i]` must have id `i`.
    pub fn capture(cells: &[Cell]) -> Self {
        let cells = cells
            .iter()
            .map(|c| c.agents().iter().map(|a| a.snapshot()).collect())
            .collect();
        Self { cells }
    }

    /// Snapshots for one cell, in creation order.  Empty for unknown cells.
    pub fn cell(&self, cell: CellId) -> &[AgentSnapshot] {
        self.cells.get(cell.index()).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn agent_count(&self) -> usize {
        self.cells.iter().map(Vec::len).sum()
    }
}
