//! Core error types.
//!
//! Sub-crates define their own error enums and wrap these via `#[from]`
//! (see `flock-sim::SimError`).  `DegenerateVectorError` is the one error
//! that is expected to be recovered locally rather than propagated.

use thiserror::Error;

/// Raised by [`Vec2::normalize`](crate::Vec2::normalize) when asked to
/// normalize a vector whose norm is zero (or not finite).
#[derive(Copy, Clone, Debug, PartialEq, Error)]
#[error("cannot normalize degenerate vector ({x}, {y})")]
pub struct DegenerateVectorError {
    pub x: f32,
    pub y: f32,
}

/// Invalid setup configuration.  Fatal: the simulation cannot start.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("unsupported cell count {0} (allowed: 1, 2, 4, 9, 16, 25, 36)")]
    UnsupportedCellCount(usize),

    #[error("agent count {agents} is not evenly divisible by cell count {cells}")]
    UnevenAgentSplit { agents: usize, cells: usize },

    #[error("{what} must be positive and finite, got {value}")]
    NonPositive { what: &'static str, value: f32 },

    #[error("{what} length {got} does not match agent count {expected}")]
    LengthMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },
}

/// Shorthand result type for configuration validation.
pub type ConfigResult<T> = Result<T, ConfigError>;
