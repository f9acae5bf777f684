use flock_core::{AgentId, ConfigError};
use flock_grid::TopologyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("simulation topology error: {0}")]
    Topology(#[from] TopologyError),

    #[error("{0} not found")]
    AgentNotFound(AgentId),

    #[error("failed to build worker pool: {0}")]
    ThreadPool(String),
}

pub type SimResult<T> = Result<T, SimError>;
