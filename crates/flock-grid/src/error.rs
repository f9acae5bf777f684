//! Grid-topology error type.

use thiserror::Error;

use flock_core::CellId;

use crate::Direction;

/// An adjacency table that breaks the grid invariants.  Fatal at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    #[error("{cell} lists {neighbor} to the {direction} but {neighbor} does not list {cell} to the {}", direction.opposite())]
    Asymmetric {
        cell:      CellId,
        direction: Direction,
        neighbor:  CellId,
    },

    #[error("{cell} lists unknown {neighbor} (table has {cell_count} cells)")]
    UnknownCell {
        cell:       CellId,
        neighbor:   CellId,
        cell_count: usize,
    },

    #[error("{0} lists itself as a neighbour")]
    SelfNeighbor(CellId),

    #[error("adjacency table has {got} rows but the grid has {expected} cells")]
    RowCountMismatch { expected: usize, got: usize },
}

pub type TopologyResult<T> = Result<T, TopologyError>;
