//! `flock-agent` — per-boid state and the three steering rules.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                   |
//! |----------------|------------------------------------------------------------|
//! | [`agent`]      | `Agent`, `Integration`, neighbour filter, `advance`        |
//! | [`steering`]   | `cohesion`, `alignment`, `separation`, `SteeringForces`    |
//! | [`snapshot`]   | `AgentSnapshot` (tick-start copy), `Pose` (render output)  |
//! | [`builder`]    | `AgentBuilder` (explicit or seeded-random initial state)   |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `serde`    | Derives `Serialize`/`Deserialize` on `AgentSnapshot`/`Pose`.|

pub mod agent;
pub mod builder;
pub mod snapshot;
pub mod steering;


pub use agent::{Agent, Integration};
pub use builder::AgentBuilder;
pub use snapshot::{AgentSnapshot, Pose};
pub use steering::{SteeringForces, alignment, cohesion, separation};
