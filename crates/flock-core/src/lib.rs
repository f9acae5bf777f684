//! `flock-core` — foundational types for the flock boids engine.
//!
//! This crate is a dependency of every other `flock-*` crate.  It has no
//! `flock-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `CellId`                                   |
//! | [`vector`]      | `Vec2`, normalization                                 |
//! | [`geo`]         | `Rect` cell bounds                                    |
//! | [`config`]      | `FlockConfig`, `IntegrationPolicy`                    |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `AgentRng` (per-agent), `entropy_seed`                |
//! | [`error`]       | `ConfigError`, `DegenerateVectorError`                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;
pub mod vector;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ALLOWED_CELL_COUNTS, FlockConfig, IntegrationPolicy};
pub use error::{ConfigError, ConfigResult, DegenerateVectorError};
pub use geo::Rect;
pub use ids::{AgentId, CellId};
pub use rng::{AgentRng, entropy_seed};
pub use time::Tick;
pub use vector::Vec2;
