//! Static cell-adjacency topology.
//!
//! Every cell has one slot per compass direction, in the fixed order
//! NW, N, NE, E, SE, S, SW, W.  An empty slot (`None`) means there is no
//! neighbour that way, e.g. on the grid boundary.
//!
//! The table is built once and never mutated.  Construction checks that it
//! is symmetric: if B sits to the `d` of A then A sits to the
//! `d.opposite()` of B.  Candidate assembly relies on this so that the
//! agent-level neighbour relation stays symmetric across cell borders.

use flock_core::CellId;

use crate::{GridLayout, TopologyError, TopologyResult};

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the eight compass directions, in table-slot order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    NorthWest,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
    ];

    /// Slot index in a [`NeighborRow`].
    #[inline]
    pub fn slot(self) -> usize {
        self as usize
    }

    /// The direction pointing back.  Opposite slots are 4 apart.
    #[inline]
    pub fn opposite(self) -> Direction {
        Self::ALL[(self.slot() + 4) % 8]
    }

    /// `(d_row, d_col)` grid offset; rows grow southward.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::NorthWest => (-1, -1),
            Direction::North     => (-1,  0),
            Direction::NorthEast => (-1,  1),
            Direction::East      => ( 0,  1),
            Direction::SouthEast => ( 1,  1),
            Direction::South     => ( 1,  0),
            Direction::SouthWest => ( 1, -1),
            Direction::West      => ( 0, -1),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Direction::NorthWest => "NW",
            Direction::North     => "N",
            Direction::NorthEast => "NE",
            Direction::East      => "E",
            Direction::SouthEast => "SE",
            Direction::South     => "S",
            Direction::SouthWest => "SW",
            Direction::West      => "W",
        };
        f.write_str(s)
    }
}

// ── AdjacencyTable ────────────────────────────────────────────────────────────

/// One cell's neighbours, indexed by [`Direction::slot`].
pub type NeighborRow = [Option<CellId>; 8];

/// Immutable `CellId → NeighborRow` lookup.
#[derive(Clone, Debug, PartialEq)]
pub struct AdjacencyTable {
    rows: Vec<NeighborRow>,
}

impl AdjacencyTable {
    /// 8-connected adjacency for a rectangular grid.
    pub fn from_layout(layout: &GridLayout) -> Self {
        let rows = layout
            .cell_ids()
            .map(|cell| {
                let (row, col) = layout.row_col(cell);
                Direction::ALL.map(|d| {
                    let (dr, dc) = d.offset();
                    layout.cell_at(row as isize + dr, col as isize + dc)
                })
            })
            .collect();
        let table = Self { rows };
        debug_assert!(table.validate().is_ok(), "generated adjacency failed validation");
        table
    }

    /// A hand-built table.  Row `i` describes `CellId(i)`.
    ///
    /// # Errors
    /// [`TopologyError`] if any entry names an unknown cell or the cell
    /// itself, or is not mirrored by its neighbour.
    pub fn from_rows(rows: Vec<NeighborRow>) -> TopologyResult<Self> {
        let table = Self { rows };
        table.validate()?;
        Ok(table)
    }

    /// Check range and symmetry of every entry.
    pub fn validate(&self) -> TopologyResult<()> {
        let cell_count = self.rows.len();
        for (i, row) in self.rows.iter().enumerate() {
            let cell = CellId(i as u16);
            for d in Direction::ALL {
                let Some(neighbor) = row[d.slot()] else { continue };
                if neighbor.index() >= cell_count {
                    return Err(TopologyError::UnknownCell { cell, neighbor, cell_count });
                }
                if neighbor == cell {
                    return Err(TopologyError::SelfNeighbor(cell));
                }
                if self.rows[neighbor.index()][d.opposite().slot()] != Some(cell) {
                    return Err(TopologyError::Asymmetric { cell, direction: d, neighbor });
                }
            }
        }
        Ok(())
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.rows.len()
    }

    /// The full 8-slot row for `cell`.
    ///
    /// # Panics
    /// If `cell` is not in the table.
    #[inline]
    pub fn neighbors_of(&self, cell: CellId) -> &NeighborRow {
        &self.rows[cell.index()]
    }

    /// Present neighbours of `cell` in slot order, sentinels skipped.
    pub fn neighbor_ids(&self, cell: CellId) -> impl Iterator<Item = CellId> + '_ {
        self.neighbors_of(cell).iter().flatten().copied()
    }

    /// `true` if `b` appears anywhere in `a`'s row.
    pub fn are_neighbors(&self, a: CellId, b: CellId) -> bool {
        self.neighbor_ids(a).any(|n| n == b)
    }
}
