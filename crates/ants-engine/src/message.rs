//! Messages understood by the world-state authority.

use std::fmt;
use std::sync::Arc;

use ants_behavior::{BehaviorResult, Transition, step};
use ants_colony::{Agent, Pheromone, TrailState};
use ants_core::{AgentId, AntRng, CoreResult, PheromoneId, SimParams};
use tokio::sync::oneshot;

use crate::{PheromoneFate, WorldState};

/// A pure agent transition, run inside the authority against the current
/// agent, the pheromones near it, its trail counter and the generator.
pub type AgentTransitionFn = Box<
    dyn FnOnce(&Agent, &[Pheromone], TrailState, AntRng) -> BehaviorResult<Transition<AntRng>>
        + Send,
>;

/// A pure pheromone update.  `Ok(None)` removes the pheromone.
pub type PheromoneUpdateFn = Box<dyn FnOnce(&Pheromone) -> CoreResult<Option<Pheromone>> + Send>;

/// A request to the authority.  Every variant carries the channel its
/// answer goes back on; the sender awaits it before issuing anything else.
pub enum StateMsg {
    /// Advance one agent.  Answered with the id of a dropped pheromone.
    NextAgentState {
        agent:      AgentId,
        transition: AgentTransitionFn,
        done:       oneshot::Sender<Option<PheromoneId>>,
    },

    /// Update (typically decay) one pheromone.
    UpdatePheromone {
        pheromone: PheromoneId,
        update:    PheromoneUpdateFn,
        done:      oneshot::Sender<PheromoneFate>,
    },

    /// Copy of the whole world.
    Snapshot {
        reply: oneshot::Sender<WorldState>,
    },
}

impl fmt::Debug for StateMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateMsg::NextAgentState { agent, .. } => {
                f.debug_struct("NextAgentState").field("agent", agent).finish_non_exhaustive()
            }
            StateMsg::UpdatePheromone { pheromone, .. } => {
                f.debug_struct("UpdatePheromone").field("pheromone", pheromone).finish_non_exhaustive()
            }
            StateMsg::Snapshot { .. } => f.write_str("Snapshot"),
        }
    }
}

// ── Standard request payloads ─────────────────────────────────────────────────

/// The behavior state machine, packaged as a transition.
pub fn behavior_transition(params: Arc<SimParams>) -> AgentTransitionFn {
    Box::new(move |agent, nearby, trail, rng| step(&params, rng, agent, nearby, trail))
}

/// One decay tick at `rate`, packaged as an update.
pub fn decay_update(rate: f32) -> PheromoneUpdateFn {
    Box::new(move |pheromone| pheromone.decayed(rate))
}
