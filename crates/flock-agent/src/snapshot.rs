//! Read-only views of agent state.
//!
//! [`AgentSnapshot`] is what neighbour search and steering read: a `Copy`
//! struct captured for every agent before any agent moves in a tick.
//! [`Pose`] is what leaves the core after a tick for whoever draws it.

use flock_core::{AgentId, Vec2};

/// Immutable copy of an agent's kinematic state at tick start.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSnapshot {
    pub id:       AgentId,
    pub position: Vec2,
    pub velocity: Vec2,
}

/// Externally visible agent pose.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub id:       AgentId,
    pub position: Vec2,
    /// Direction of travel in radians (`atan2(dy, dx)` of the last
    /// non-zero displacement).
    pub heading:  f32,
}

impl std::fmt::Display for Pose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {} heading {:.3} rad", self.id, self.position, self.heading)
    }
}
