//! Setup-time configuration.
//!
//! `FlockConfig` is the single source of truth for how a simulation is
//! constructed.  Applications typically build it in code or load it from a
//! JSON file (with the `serde` feature) and hand it to `flock-sim`'s builder,
//! which calls [`FlockConfig::validate`] before anything is allocated.

use crate::{ConfigError, ConfigResult};

/// Cell counts the grid layout supports.
///
/// All but `2` are perfect squares; `2` is laid out as a single row of two
/// cells.
pub const ALLOWED_CELL_COUNTS: [usize; 7] = [1, 2, 4, 9, 16, 25, 36];

// ── IntegrationPolicy ─────────────────────────────────────────────────────────

/// How a tick's steering vector is folded into agent state.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum IntegrationPolicy {
    /// `velocity += steering; position += velocity`.
    #[default]
    VelocityAccumulating,
    /// `position += steering`.  Velocity is overwritten with this tick's
    /// displacement and never accumulates.
    DirectDisplacement,
}

impl std::fmt::Display for IntegrationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            IntegrationPolicy::VelocityAccumulating => "velocity-accumulating",
            IntegrationPolicy::DirectDisplacement   => "direct-displacement",
        };
        f.write_str(s)
    }
}

// ── FlockConfig ───────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlockConfig {
    /// World extent along x.  Cells tile `[0, world_width)`.
    pub world_width: f32,

    /// World extent along y.  Cells tile `[0, world_height)`.
    pub world_height: f32,

    /// Total agents across all cells.  Must be a multiple of `cell_count`.
    pub total_agent_count: usize,

    /// One of [`ALLOWED_CELL_COUNTS`].
    pub cell_count: usize,

    /// Neighbour cut-off distance, shared by every agent.
    pub vision_radius: f32,

    /// Speed bound.  Also the per-axis range for random initial velocities.
    /// Only enforced when `clamp_speed` is set.
    pub max_speed: f32,

    pub integration_policy: IntegrationPolicy,

    /// Clamp velocity magnitude to `max_speed` after each velocity update.
    pub clamp_speed: bool,

    /// Master RNG seed for initial placement.  `None` draws one from OS
    /// entropy at build time.
    pub seed: Option<u64>,

    /// Worker thread count for the `parallel` feature.  `None` uses Rayon's
    /// global pool.
    pub num_threads: Option<usize>,
}

impl Default for FlockConfig {
    /// 700 × 700 world, 9 cells of 10 agents, vision radius 100, max speed 30.
    fn default() -> Self {
        Self {
            world_width:        700.0,
            world_height:       700.0,
            total_agent_count:  90,
            cell_count:         9,
            vision_radius:      100.0,
            max_speed:          30.0,
            integration_policy: IntegrationPolicy::default(),
            clamp_speed:        false,
            seed:               None,
            num_threads:        None,
        }
    }
}

impl FlockConfig {
    /// Check every constraint that would make construction impossible.
    pub fn validate(&self) -> ConfigResult<()> {
        if !ALLOWED_CELL_COUNTS.contains(&self.cell_count) {
            return Err(ConfigError::UnsupportedCellCount(self.cell_count));
        }
        if self.total_agent_count % self.cell_count != 0 {
            return Err(ConfigError::UnevenAgentSplit {
                agents: self.total_agent_count,
                cells:  self.cell_count,
            });
        }
        positive("world_width", self.world_width)?;
        positive("world_height", self.world_height)?;
        positive("vision_radius", self.vision_radius)?;
        positive("max_speed", self.max_speed)?;
        Ok(())
    }

    /// Agents owned by each cell.  Only meaningful after [`validate`](Self::validate).
    #[inline]
    pub fn agents_per_cell(&self) -> usize {
        self.total_agent_count / self.cell_count.max(1)
    }
}

fn positive(what: &'static str, value: f32) -> ConfigResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { what, value })
    }
}
