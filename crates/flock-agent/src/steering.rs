//! The three flocking rules.
//!
//! Each rule reduces a non-empty neighbour set to a unit vector:
//!
//! | Rule         | Direction                                               |
//! |--------------|---------------------------------------------------------|
//! | cohesion     | mean neighbour position − own position                  |
//! | alignment    | mean neighbour velocity                                 |
//! | separation   | −mean(neighbour position − own position)                |
//!
//! Each returns `Err(DegenerateVectorError)` when its direction vector is
//! zero (and for an empty neighbour set).  [`SteeringForces::total`] treats
//! such a rule as contributing nothing, so one degenerate rule never aborts a
//! tick.  The rules are summed with equal weight.
//!
//! Cohesion and separation are exact opposites up to rounding, so the sum is
//! dominated by alignment.  This matches the reference behaviour.

use flock_core::{DegenerateVectorError, Vec2};

use crate::AgentSnapshot;

type Force = Result<Vec2, DegenerateVectorError>;

fn mean<I: Iterator<Item = Vec2>>(iter: I) -> Option<Vec2> {
    let (sum, n) = iter.fold((Vec2::ZERO, 0usize), |(s, n), v| (s + v, n + 1));
    (n > 0).then(|| sum / n as f32)
}

fn degenerate() -> DegenerateVectorError {
    DegenerateVectorError { x: 0.0, y: 0.0 }
}

/// Unit vector from `position` toward the neighbours' centroid.
pub fn cohesion(position: Vec2, neighbors: &[AgentSnapshot]) -> Force {
    let centroid = mean(neighbors.iter().map(|n| n.position)).ok_or_else(degenerate)?;
    (centroid - position).normalize()
}

/// Unit vector along the neighbours' mean velocity.
pub fn alignment(neighbors: &[AgentSnapshot]) -> Force {
    mean(neighbors.iter().map(|n| n.velocity))
        .ok_or_else(degenerate)?
        .normalize()
}

/// Unit vector away from the mean offset to the neighbours.
pub fn separation(position: Vec2, neighbors: &[AgentSnapshot]) -> Force {
    let offset = mean(neighbors.iter().map(|n| n.position - position)).ok_or_else(degenerate)?;
    (-offset).normalize()
}

// ── SteeringForces ────────────────────────────────────────────────────────────

/// The three rule outputs for one agent, kept separate for inspection.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SteeringForces {
    pub cohesion:   Force,
    pub alignment:  Force,
    pub separation: Force,
}

impl SteeringForces {
    /// Evaluate all three rules.  `None` for an empty neighbour set.
    pub fn compute(position: Vec2, neighbors: &[AgentSnapshot]) -> Option<Self> {
        if neighbors.is_empty() {
            return None;
        }
        Some(Self {
            cohesion:   cohesion(position, neighbors),
            alignment:  alignment(neighbors),
            separation: separation(position, neighbors),
        })
    }

    /// Unweighted sum; degenerate rules contribute the zero vector.
    pub fn total(&self) -> Vec2 {
        [self.cohesion, self.alignment, self.separation]
            .into_iter()
            .map(|f| f.unwrap_or(Vec2::ZERO))
            .sum()
    }

    /// How many of the three rules were degenerate.
    pub fn degenerate_count(&self) -> usize {
        [self.cohesion, self.alignment, self.separation]
            .iter()
            .filter(|f| f.is_err())
            .count()
    }
}
