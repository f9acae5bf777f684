//! The `Agent` type: state owned by a single cell for its whole lifetime.

use flock_core::{AgentId, FlockConfig, IntegrationPolicy, Vec2};
use tracing::trace;

use crate::{AgentSnapshot, Pose, SteeringForces};

// ── Integration ───────────────────────────────────────────────────────────────

/// State-update rule applied by [`Agent::advance`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Integration {
    pub policy:      IntegrationPolicy,
    /// Clamp velocity to the agent's `max_speed` (velocity policy only).
    pub clamp_speed: bool,
}

impl Integration {
    pub fn new(policy: IntegrationPolicy) -> Self {
        Self { policy, clamp_speed: false }
    }

    pub fn from_config(config: &FlockConfig) -> Self {
        Self { policy: config.integration_policy, clamp_speed: config.clamp_speed }
    }
}

// ── Agent ─────────────────────────────────────────────────────────────────────

/// One boid.
///
/// `id` and `vision_radius` are fixed at creation.  Position and velocity
/// change only through [`advance`](Self::advance).
#[derive(Clone, Debug, PartialEq)]
pub struct Agent {
    id:            AgentId,
    position:      Vec2,
    velocity:      Vec2,
    vision_radius: f32,
    max_speed:     f32,
    /// Last non-zero direction of travel, radians.
    heading:       f32,
}

impl Agent {
    /// Create an agent.  Prefer [`AgentBuilder`](crate::AgentBuilder).
    pub fn new(id: AgentId, position: Vec2, velocity: Vec2, vision_radius: f32, max_speed: f32) -> Self {
        let heading = if velocity.is_zero() { 0.0 } else { velocity.heading() };
        Self { id, position, velocity, vision_radius, max_speed, heading }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    pub fn vision_radius(&self) -> f32 {
        self.vision_radius
    }

    #[inline]
    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    #[inline]
    pub fn heading(&self) -> f32 {
        self.heading
    }

    #[inline]
    pub fn snapshot(&self) -> AgentSnapshot {
        AgentSnapshot { id: self.id, position: self.position, velocity: self.velocity }
    }

    #[inline]
    pub fn pose(&self) -> Pose {
        Pose { id: self.id, position: self.position, heading: self.heading }
    }

    // ── Flocking ──────────────────────────────────────────────────────────

    /// Candidates strictly closer than `vision_radius`, excluding self (by
    /// id).  Candidate order is preserved; a repeated id is kept once.
    pub fn compute_neighbors(&self, candidates: &[AgentSnapshot]) -> Vec<AgentSnapshot> {
        let r2 = self.vision_radius * self.vision_radius;
        let mut neighbors: Vec<AgentSnapshot> = Vec::new();
        for c in candidates {
            if c.id == self.id || self.position.distance_squared(c.position) >= r2 {
                continue;
            }
            if !neighbors.iter().any(|n| n.id == c.id) {
                neighbors.push(*c);
            }
        }
        neighbors
    }

    /// Per-rule forces against `neighbors`.  `None` when there are none.
    pub fn steering_forces(&self, neighbors: &[AgentSnapshot]) -> Option<SteeringForces> {
        SteeringForces::compute(self.position, neighbors)
    }

    /// Combined steering vector and the number of degenerate rules that
    /// were recovered as zero.  `(ZERO, 0)` for an empty neighbour set.
    pub fn compute_steering(&self, neighbors: &[AgentSnapshot]) -> (Vec2, usize) {
        match self.steering_forces(neighbors) {
            None => (Vec2::ZERO, 0),
            Some(forces) => {
                let degenerate = forces.degenerate_count();
                if degenerate > 0 {
                    trace!(agent = self.id.0, degenerate, "degenerate steering rule recovered as zero");
                }
                (forces.total(), degenerate)
            }
        }
    }

    /// Fold `steering` into the agent's state.
    pub fn advance(&mut self, steering: Vec2, integration: Integration) {
        let before = self.position;
        match integration.policy {
            IntegrationPolicy::VelocityAccumulating => {
                self.velocity += steering;
                if integration.clamp_speed {
                    self.velocity = self.velocity.clamp_length(self.max_speed);
                }
                self.position += self.velocity;
            }
            IntegrationPolicy::DirectDisplacement => {
                self.position += steering;
                self.velocity = steering;
            }
        }
        let moved = self.position - before;
        if !moved.is_zero() {
            self.heading = moved.heading();
        }
    }
}
