use ants_behavior::BehaviorError;
use ants_core::{AgentId, CoreError, PheromoneId};
use thiserror::Error;

/// Everything that can stop a run.
///
/// Apart from `NoRuntime` and `AuthorityStopped` these are invariant
/// violations: the authority logs the first one it meets and stops.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Behavior(#[from] BehaviorError),

    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("agent {0} has no trail state")]
    TrailMissing(AgentId),

    #[error("pheromone {0} not found")]
    PheromoneNotFound(PheromoneId),

    #[error("no Tokio runtime is running; spawn the engine from inside one")]
    NoRuntime,

    #[error("the world-state authority has stopped")]
    AuthorityStopped,

    #[error("engine task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub type EngineResult<T> = Result<T, EngineError>;
