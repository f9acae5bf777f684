//! Unit tests for flock-grid.
//!
//! All tests use hand-placed agents so neighbour sets are known exactly.

#[cfg(test)]
mod helpers {
    use flock_agent::{Agent, AgentBuilder};
    use flock_core::{AgentId, CellId, Vec2};

    use crate::{Cell, GridLayout};

    pub fn agent(id: u32, x: f32, y: f32) -> Agent {
        AgentBuilder::new(AgentId(id), 100.0, 30.0)
            .position(Vec2::new(x, y))
            .velocity(Vec2::new(1.0, 0.0))
            .build()
    }

    /// 3 × 3 grid of 100-unit cells, one agent at each cell centre.
    /// Agent id == cell id.
    pub fn nine_cells() -> (GridLayout, Vec<Cell>) {
        let layout = GridLayout::new(9, 300.0, 300.0).unwrap();
        let cells = layout
            .cell_ids()
            .map(|id| {
                let b = layout.cell_bounds(id);
                let c = b.center();
                Cell::new(id, b, vec![agent(id.0 as u32, c.x, c.y)])
            })
            .collect();
        (layout, cells)
    }

    pub fn ids(v: &[flock_agent::AgentSnapshot]) -> Vec<u32> {
        v.iter().map(|s| s.id.0).collect()
    }

    pub fn cell(i: u16) -> CellId {
        CellId(i)
    }
}

// ── Layout ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod layout {
    use flock_core::{ALLOWED_CELL_COUNTS, CellId, ConfigError, FlockConfig, Vec2};

    use crate::GridLayout;

    #[test]
    fn square_counts_are_square() {
        for (n, side) in [(1, 1), (4, 2), (9, 3), (16, 4), (25, 5), (36, 6)] {
            let l = GridLayout::new(n, 600.0, 600.0).unwrap();
            assert_eq!((l.rows, l.cols), (side, side), "n = {n}");
            assert_eq!(l.cell_count(), n);
        }
    }

    #[test]
    fn two_cells_form_one_row() {
        let l = GridLayout::new(2, 700.0, 700.0).unwrap();
        assert_eq!((l.rows, l.cols), (1, 2));
        assert_eq!(l.cell_width, 350.0);
        assert_eq!(l.cell_height, 700.0);
    }

    #[test]
    fn unsupported_counts_rejected() {
        for n in [0, 3, 5, 8, 10, 49] {
            assert_eq!(GridLayout::new(n, 1.0, 1.0), Err(ConfigError::UnsupportedCellCount(n)));
        }
    }

    #[test]
    fn bounds_tile_the_world() {
        let l = GridLayout::from_config(&FlockConfig::default()).unwrap();
        let b = l.cell_bounds(CellId(5)); // row 1, col 2
        assert_eq!(l.row_col(CellId(5)), (1, 2));
        assert!((b.min.x - 466.6667).abs() < 1e-3);
        assert!((b.min.y - 233.3333).abs() < 1e-3);
        assert!((b.max.x - 700.0).abs() < 1e-3);

        let area: f32 = l.cell_ids().map(|c| l.cell_bounds(c).width() * l.cell_bounds(c).height()).sum();
        assert!((area - 700.0 * 700.0).abs() < 1.0);
        assert!(l.cell_bounds(CellId(0)).contains(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn cell_at_edges() {
        let l = GridLayout::new(ALLOWED_CELL_COUNTS[3], 3.0, 3.0).unwrap();
        assert_eq!(l.cell_at(0, 0), Some(CellId(0)));
        assert_eq!(l.cell_at(2, 2), Some(CellId(8)));
        assert_eq!(l.cell_at(-1, 0), None);
        assert_eq!(l.cell_at(0, 3), None);
    }
}

// ── Adjacency ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod adjacency {
    use flock_core::{ALLOWED_CELL_COUNTS, CellId};

    use super::helpers::cell;
    use crate::{AdjacencyTable, Direction, GridLayout, TopologyError};

    #[test]
    fn opposite_directions() {
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::NorthEast.opposite(), Direction::SouthWest);
        assert_eq!(Direction::West.opposite(), Direction::East);
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn three_by_three_matches_reference_rows() {
        // Reference rows (1-based ids, 0 = none) for the 3 × 3 grid,
        // slots NW, N, NE, E, SE, S, SW, W.
        let reference: [[u16; 8]; 9] = [
            [0, 0, 0, 2, 5, 4, 0, 0],
            [0, 0, 0, 3, 6, 5, 4, 1],
            [0, 0, 0, 0, 0, 6, 5, 2],
            [0, 1, 2, 5, 8, 7, 0, 0],
            [1, 2, 3, 6, 9, 8, 7, 4],
            [2, 3, 0, 0, 0, 9, 8, 5],
            [0, 4, 5, 8, 0, 0, 0, 0],
            [4, 5, 6, 9, 0, 0, 0, 7],
            [5, 6, 0, 0, 0, 0, 0, 8],
        ];
        let layout = GridLayout::new(9, 300.0, 300.0).unwrap();
        let table = AdjacencyTable::from_layout(&layout);
        for (i, row) in reference.iter().enumerate() {
            let expected = row.map(|n| (n != 0).then(|| CellId(n - 1)));
            assert_eq!(table.neighbors_of(CellId(i as u16)), &expected, "cell {i}");
        }
    }

    #[test]
    fn generated_tables_are_symmetric_for_every_size() {
        for &n in &ALLOWED_CELL_COUNTS {
            let layout = GridLayout::new(n, 100.0, 100.0).unwrap();
            let table = AdjacencyTable::from_layout(&layout);
            assert!(table.validate().is_ok(), "n = {n}");
            for a in layout.cell_ids() {
                for b in table.neighbor_ids(a) {
                    assert!(table.are_neighbors(b, a), "n = {n}: {a} -> {b}");
                }
            }
        }
    }

    #[test]
    fn single_cell_has_no_neighbors() {
        let layout = GridLayout::new(1, 10.0, 10.0).unwrap();
        let table = AdjacencyTable::from_layout(&layout);
        assert_eq!(table.neighbor_ids(CellId(0)).count(), 0);
    }

    #[test]
    fn two_cells_see_each_other() {
        let layout = GridLayout::new(2, 10.0, 10.0).unwrap();
        let table = AdjacencyTable::from_layout(&layout);
        assert_eq!(table.neighbors_of(cell(0))[Direction::East.slot()], Some(cell(1)));
        assert_eq!(table.neighbors_of(cell(1))[Direction::West.slot()], Some(cell(0)));
    }

    #[test]
    fn hand_built_symmetric_table_accepted() {
        let mut a = [None; 8];
        let mut b = [None; 8];
        a[Direction::East.slot()] = Some(cell(1));
        b[Direction::West.slot()] = Some(cell(0));
        let table = AdjacencyTable::from_rows(vec![a, b]).unwrap();
        assert_eq!(table.cell_count(), 2);
    }

    #[test]
    fn hand_built_asymmetric_table_rejected() {
        let mut a = [None; 8];
        a[Direction::East.slot()] = Some(cell(1));
        let b = [None; 8]; // B does not list A
        let err = AdjacencyTable::from_rows(vec![a, b]).unwrap_err();
        assert_eq!(
            err,
            TopologyError::Asymmetric { cell: cell(0), direction: Direction::East, neighbor: cell(1) }
        );
        assert!(err.to_string().contains("to the W"));
    }

    #[test]
    fn wrong_direction_counts_as_asymmetric() {
        // B lists A, but in the North slot rather than the West slot.
        let mut a = [None; 8];
        let mut b = [None; 8];
        a[Direction::East.slot()] = Some(cell(1));
        b[Direction::North.slot()] = Some(cell(0));
        assert!(matches!(
            AdjacencyTable::from_rows(vec![a, b]),
            Err(TopologyError::Asymmetric { .. })
        ));
    }

    #[test]
    fn unknown_and_self_neighbors_rejected() {
        let mut a = [None; 8];
        a[Direction::South.slot()] = Some(cell(7));
        assert!(matches!(
            AdjacencyTable::from_rows(vec![a]),
            Err(TopologyError::UnknownCell { cell_count: 1, .. })
        ));

        let mut a = [None; 8];
        a[Direction::South.slot()] = Some(cell(0));
        assert_eq!(
            AdjacencyTable::from_rows(vec![a]),
            Err(TopologyError::SelfNeighbor(cell(0)))
        );
    }
}

// ── Cells ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod cells {
    use flock_agent::Integration;
    use flock_core::{CellId, IntegrationPolicy, Vec2};

    use super::helpers::*;
    use crate::{AdjacencyTable, Cell, FlockSnapshot};

    #[test]
    fn corner_cell_candidates() {
        let (layout, cells) = nine_cells();
        let table = AdjacencyTable::from_layout(&layout);
        let snap = FlockSnapshot::capture(&cells);
        // Cell 0: itself, then E (1), SE (4), S (3).
        assert_eq!(ids(&cells[0].assemble_candidates(&table, &snap)), vec![0, 1, 4, 3]);
    }

    #[test]
    fn centre_cell_sees_everyone() {
        let (layout, cells) = nine_cells();
        let table = AdjacencyTable::from_layout(&layout);
        let snap = FlockSnapshot::capture(&cells);
        // Own agent first, then NW, N, NE, E, SE, S, SW, W.
        assert_eq!(
            ids(&cells[4].assemble_candidates(&table, &snap)),
            vec![4, 0, 1, 2, 5, 8, 7, 6, 3]
        );
    }

    #[test]
    fn candidates_are_a_copy() {
        let (layout, mut cells) = nine_cells();
        let table = AdjacencyTable::from_layout(&layout);
        let snap = FlockSnapshot::capture(&cells);
        let candidates = cells[4].assemble_candidates(&table, &snap);
        let before = candidates[0].position;
        cells[4].tick(&candidates, Integration::new(IntegrationPolicy::VelocityAccumulating));
        assert_eq!(candidates[0].position, before);
        assert_ne!(cells[4].agents()[0].position(), before);
    }

    #[test]
    fn duplicate_neighbor_cells_contribute_once() {
        use crate::Direction;
        // Two cells, B listed in two slots of A (and A in the mirrored slots of B).
        let mut a = [None; 8];
        let mut b = [None; 8];
        a[Direction::East.slot()] = Some(cell(1));
        a[Direction::SouthEast.slot()] = Some(cell(1));
        b[Direction::West.slot()] = Some(cell(0));
        b[Direction::NorthWest.slot()] = Some(cell(0));
        let table = AdjacencyTable::from_rows(vec![a, b]).unwrap();

        let bounds = flock_core::Rect::from_origin_size(Vec2::ZERO, 10.0, 10.0);
        let cells = vec![
            Cell::new(CellId(0), bounds, vec![agent(0, 1.0, 1.0)]),
            Cell::new(CellId(1), bounds, vec![agent(1, 2.0, 2.0), agent(2, 3.0, 3.0)]),
        ];
        let snap = FlockSnapshot::capture(&cells);
        assert_eq!(ids(&cells[0].assemble_candidates(&table, &snap)), vec![0, 1, 2]);
    }

    #[test]
    fn tick_counts_links_and_updates() {
        let (layout, mut cells) = nine_cells();
        let table = AdjacencyTable::from_layout(&layout);
        let snap = FlockSnapshot::capture(&cells);
        // Centre agent at (150, 150); orthogonal neighbours are 100 away
        // (excluded, strict radius), diagonals ~141 away.  No neighbours.
        let candidates = cells[4].assemble_candidates(&table, &snap);
        let stats = cells[4].tick(&candidates, Integration::new(IntegrationPolicy::DirectDisplacement));
        assert_eq!(stats.agents_updated, 1);
        assert_eq!(stats.neighbor_links, 0);
        assert_eq!(cells[4].agents()[0].position(), Vec2::new(150.0, 150.0));
    }

    #[test]
    fn tick_counts_recovered_degenerate_rules() {
        // Two stationary agents: alignment is degenerate for both.
        let bounds = flock_core::Rect::from_origin_size(Vec2::ZERO, 100.0, 100.0);
        let still = |id: u32, x: f32| {
            flock_agent::AgentBuilder::new(flock_core::AgentId(id), 100.0, 30.0)
                .position(Vec2::new(x, 50.0))
                .build()
        };
        let mut c = Cell::new(CellId(0), bounds, vec![still(0, 20.0), still(1, 70.0)]);
        let candidates: Vec<_> = c.agents().iter().map(|a| a.snapshot()).collect();
        let stats = c.tick(&candidates, Integration::new(IntegrationPolicy::VelocityAccumulating));
        assert_eq!(stats.neighbor_links, 2);
        assert_eq!(stats.degenerate_forces, 2);
        assert_eq!(c.agents()[0].position(), Vec2::new(20.0, 50.0));
    }

    #[test]
    fn agents_keep_their_cell_after_leaving_bounds() {
        let bounds = flock_core::Rect::from_origin_size(Vec2::ZERO, 10.0, 10.0);
        let mut c = Cell::new(CellId(0), bounds, vec![agent(0, 9.5, 5.0)]);
        let candidates = c.agents().iter().map(|a| a.snapshot()).collect::<Vec<_>>();
        c.tick(&candidates, Integration::new(IntegrationPolicy::VelocityAccumulating));
        assert!(!bounds.contains(c.agents()[0].position()));
        assert_eq!(c.agent_count(), 1);
        assert_eq!(c.bounds(), bounds);
    }

    #[test]
    fn tick_is_independent_of_agent_order() {
        let bounds = flock_core::Rect::from_origin_size(Vec2::ZERO, 100.0, 100.0);
        let a = vec![agent(0, 10.0, 10.0), agent(1, 20.0, 15.0), agent(2, 12.0, 30.0)];
        let mut reversed = a.clone();
        reversed.reverse();

        let mut c1 = Cell::new(CellId(0), bounds, a);
        let mut c2 = Cell::new(CellId(0), bounds, reversed);
        let pool1: Vec<_> = c1.agents().iter().map(|x| x.snapshot()).collect();
        let pool2: Vec<_> = c2.agents().iter().map(|x| x.snapshot()).collect();
        let policy = Integration::new(IntegrationPolicy::VelocityAccumulating);
        c1.tick(&pool1, policy);
        c2.tick(&pool2, policy);

        for x in c1.agents() {
            let y = c2.agents().iter().find(|y| y.id() == x.id()).unwrap();
            assert!((x.position() - y.position()).norm() < 1e-4);
        }
    }
}

// ── Snapshot ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod snapshot {
    use flock_core::CellId;

    use super::helpers::*;
    use crate::FlockSnapshot;

    #[test]
    fn capture_counts() {
        let (_, cells) = nine_cells();
        let snap = FlockSnapshot::capture(&cells);
        assert_eq!(snap.cell_count(), 9);
        assert_eq!(snap.agent_count(), 9);
        assert_eq!(snap.cell(CellId(3))[0].id.0, 3);
        assert!(snap.cell(CellId(40)).is_empty());
    }
}
