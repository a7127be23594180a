use ants_core::{AgentId, CoreError};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BehaviorError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("agent {0} is returning but no unvisited pheromone is in range")]
    TrailLost(AgentId),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
