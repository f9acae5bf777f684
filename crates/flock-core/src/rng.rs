//! Deterministic per-agent RNG used for initial placement.
//!
//! # Determinism strategy
//!
//! Each agent gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space.
//! An agent's initial position and velocity therefore depend only on the
//! run seed and its own id, never on how many agents were placed before it
//! or on which thread placed it.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{AgentId, Rect, Vec2};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-agent deterministic RNG.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and an agent ID.
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Uniform point inside `rect` (half-open, like [`Rect::contains`]).
    ///
    /// A degenerate (zero-width or zero-height) rect yields its `min` corner
    /// on that axis instead of panicking on an empty range.
    pub fn point_in(&mut self, rect: &Rect) -> Vec2 {
        let x = if rect.width() > 0.0 { self.gen_range(rect.min.x..rect.max.x) } else { rect.min.x };
        let y = if rect.height() > 0.0 { self.gen_range(rect.min.y..rect.max.y) } else { rect.min.y };
        Vec2::new(x, y)
    }

    /// Vector with each component uniform in `[-limit, limit]`.
    pub fn symmetric_vec(&mut self, limit: f32) -> Vec2 {
        if limit <= 0.0 {
            return Vec2::ZERO;
        }
        Vec2::new(self.gen_range(-limit..=limit), self.gen_range(-limit..=limit))
    }
}

/// Draw a fresh run seed from OS entropy.  Used when the configuration does
/// not pin one; the drawn value is logged so the run can be replayed.
pub fn entropy_seed() -> u64 {
    rand::thread_rng().r#gen()
}
