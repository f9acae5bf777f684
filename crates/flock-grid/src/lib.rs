//! `flock-grid` — the static spatial partition.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`layout`]    | `GridLayout` (rows × cols over the world), cell bounds      |
//! | [`adjacency`] | `Direction`, `AdjacencyTable` (8-neighbour, symmetric)      |
//! | [`cell`]      | `Cell` (owned agents, candidate assembly, per-cell tick)    |
//! | [`snapshot`]  | `FlockSnapshot` (tick-start copy of every cell's agents)    |
//! | [`error`]     | `TopologyError`, `TopologyResult<T>`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod adjacency;
pub mod cell;
pub mod error;
pub mod layout;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use adjacency::{AdjacencyTable, Direction, NeighborRow};
pub use cell::{Cell, CellTickStats};
pub use error::{TopologyError, TopologyResult};
pub use layout::GridLayout;
pub use snapshot::FlockSnapshot;
