//! Fluent builder for [`Agent`].
//!
//! # Usage
//!
//! ```rust
//! use flock_agent::AgentBuilder;
//! use flock_core::{AgentId, Rect, Vec2};
//!
//! // Explicit initial state from setup code.
//! let a = AgentBuilder::new(AgentId(0), 100.0, 30.0)
//!     .position(Vec2::new(10.0, 20.0))
//!     .velocity(Vec2::new(1.0, 0.0))
//!     .build();
//! assert_eq!(a.position(), Vec2::new(10.0, 20.0));
//!
//! // Seeded random placement inside a cell.
//! let bounds = Rect::from_origin_size(Vec2::ZERO, 50.0, 50.0);
//! let b = AgentBuilder::new(AgentId(1), 100.0, 30.0)
//!     .random_within(&bounds, 42)
//!     .build();
//! assert!(bounds.contains(b.position()));
//! ```

use flock_core::{AgentId, AgentRng, Rect, Vec2};

use crate::Agent;

/// Fluent builder for a single [`Agent`].
///
/// Unset position and velocity default to the zero vector.
pub struct AgentBuilder {
    id:            AgentId,
    position:      Vec2,
    velocity:      Vec2,
    vision_radius: f32,
    max_speed:     f32,
}

impl AgentBuilder {
    pub fn new(id: AgentId, vision_radius: f32, max_speed: f32) -> Self {
        Self {
            id,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            vision_radius,
            max_speed,
        }
    }

    pub fn position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Draw a position uniformly inside `bounds` and a velocity with each
    /// component uniform in `[-max_speed, max_speed]`, from an RNG seeded by
    /// `(seed, id)`.
    pub fn random_within(mut self, bounds: &Rect, seed: u64) -> Self {
        let mut rng = AgentRng::new(seed, self.id);
        self.position = rng.point_in(bounds);
        self.velocity = rng.symmetric_vec(self.max_speed);
        self
    }

    /// Random velocity only; keeps whatever position was set.
    pub fn random_velocity(mut self, seed: u64) -> Self {
        let mut rng = AgentRng::new(seed, self.id);
        self.velocity = rng.symmetric_vec(self.max_speed);
        self
    }

    pub fn build(self) -> Agent {
        Agent::new(self.id, self.position, self.velocity, self.vision_radius, self.max_speed)
    }
}
