//! Fluent builder for constructing a [`FlockSimulation`].

use flock_agent::{AgentBuilder, Integration};
use flock_core::{AgentId, CellId, ConfigError, FlockConfig, Tick, Vec2, entropy_seed};
use flock_grid::{AdjacencyTable, Cell, GridLayout, TopologyError};
use tracing::debug;

use crate::{FlockSimulation, SimResult};

/// Fluent builder for [`FlockSimulation`].
///
/// # Required inputs
///
/// - [`FlockConfig`] — world size, agent and cell counts, radius, policy, …
///
/// # Optional inputs (have defaults)
///
/// | Method                     | Default                                      |
/// |----------------------------|----------------------------------------------|
/// | `.initial_positions(v)`    | Uniform inside each agent's cell (seeded)    |
/// | `.initial_velocities(v)`   | Each axis uniform in `±max_speed` (seeded)   |
/// | `.adjacency(t)`            | 8-connected table for the grid layout        |
///
/// Position and velocity vectors are indexed by `AgentId`: cell 0 owns ids
/// `0..k`, cell 1 owns `k..2k`, and so on, with `k = agents per cell`.
///
/// # Example
///
/// ```rust
/// use flock_core::{FlockConfig, IntegrationPolicy, Vec2};
/// use flock_sim::FlockBuilder;
///
/// let config = FlockConfig {
///     total_agent_count:  2,
///     cell_count:         1,
///     integration_policy: IntegrationPolicy::DirectDisplacement,
///     ..FlockConfig::default()
/// };
/// let sim = FlockBuilder::new(config)
///     .initial_positions(vec![Vec2::new(100.0, 100.0), Vec2::new(150.0, 100.0)])
///     .initial_velocities(vec![Vec2::ZERO, Vec2::ZERO])
///     .build()?;
/// assert_eq!(sim.agent_count(), 2);
/// # Ok::<(), flock_sim::SimError>(())
/// ```
pub struct FlockBuilder {
    config:     FlockConfig,
    positions:  Option<Vec<Vec2>>,
    velocities: Option<Vec<Vec2>>,
    adjacency:  Option<AdjacencyTable>,
}

impl FlockBuilder {
    pub fn new(config: FlockConfig) -> Self {
        Self {
            config,
            positions:  None,
            velocities: None,
            adjacency:  None,
        }
    }

    /// Supply every agent's starting position (length `total_agent_count`).
    ///
    /// Positions need not lie inside the owning cell's bounds.
    pub fn initial_positions(mut self, positions: Vec<Vec2>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Supply every agent's starting velocity (length `total_agent_count`).
    pub fn initial_velocities(mut self, velocities: Vec<Vec2>) -> Self {
        self.velocities = Some(velocities);
        self
    }

    /// Replace the generated adjacency table with a hand-built one.
    pub fn adjacency(mut self, table: AdjacencyTable) -> Self {
        self.adjacency = Some(table);
        self
    }

    /// Validate inputs, lay out the grid, create every cell and agent, and
    /// return a ready-to-step [`FlockSimulation`].
    pub fn build(self) -> SimResult<FlockSimulation> {
        let config = self.config;
        config.validate()?;
        let agent_count = config.total_agent_count;

        // ── Validate optional inputs ──────────────────────────────────────
        check_len(self.positions.as_deref(), agent_count, "initial positions")?;
        check_len(self.velocities.as_deref(), agent_count, "initial velocities")?;

        let layout = GridLayout::from_config(&config)?;
        let adjacency = match self.adjacency {
            Some(table) => {
                if table.cell_count() != layout.cell_count() {
                    return Err(TopologyError::RowCountMismatch {
                        expected: layout.cell_count(),
                        got:      table.cell_count(),
                    }
                    .into());
                }
                table.validate()?;
                table
            }
            None => AdjacencyTable::from_layout(&layout),
        };

        let seed = config.seed.unwrap_or_else(entropy_seed);

        // ── Create cells and agents (ids dense, cell-major) ───────────────
        let per_cell = config.agents_per_cell();
        let cells: Vec<Cell> = layout
            .cell_ids()
            .map(|cell_id: CellId| {
                let bounds = layout.cell_bounds(cell_id);
                let agents = (0..per_cell)
                    .map(|k| {
                        let idx = cell_id.index() * per_cell + k;
                        let id = AgentId(idx as u32);
                        let mut b = AgentBuilder::new(id, config.vision_radius, config.max_speed);
                        b = match &self.positions {
                            Some(p) => b.position(p[idx]).random_velocity(seed),
                            None    => b.random_within(&bounds, seed),
                        };
                        if let Some(v) = &self.velocities {
                            b = b.velocity(v[idx]);
                        }
                        b.build()
                    })
                    .collect();
                Cell::new(cell_id, bounds, agents)
            })
            .collect();

        #[cfg(feature = "parallel")]
        let pool = match config.num_threads {
            Some(n) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| crate::SimError::ThreadPool(e.to_string()))?,
            ),
            None => None,
        };

        debug!(
            cells = layout.cell_count(),
            rows = layout.rows,
            cols = layout.cols,
            agents = agent_count,
            policy = %config.integration_policy,
            seed,
            "flock simulation built",
        );

        Ok(FlockSimulation {
            integration: Integration::from_config(&config),
            config,
            layout,
            adjacency,
            cells,
            per_cell,
            seed,
            tick: Tick::ZERO,
            #[cfg(feature = "parallel")]
            pool,
        })
    }
}

fn check_len(v: Option<&[Vec2]>, expected: usize, what: &'static str) -> SimResult<()> {
    match v {
        Some(v) if v.len() != expected => {
            Err(ConfigError::LengthMismatch { expected, got: v.len(), what }.into())
        }
        _ => Ok(()),
    }
}
