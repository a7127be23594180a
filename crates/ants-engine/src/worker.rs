//! Per-agent and per-pheromone tasks.
//!
//! A worker owns no world state.  Each tick it sleeps, sends one request and
//! waits for the acknowledgement before sleeping again, so it never has two
//! requests in flight.

use std::sync::Arc;
use std::time::Duration;

use ants_core::{AgentId, PheromoneId, SimParams};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::message::{behavior_transition, decay_update};
use crate::{EngineHandle, PheromoneFate};

/// Sleep for `tick` unless shutdown is signalled first.  Returns `false` on
/// shutdown.
async fn tick_or_shutdown(tick: Duration, shutdown: &mut watch::Receiver<bool>) -> bool {
    if *shutdown.borrow() {
        return false;
    }
    tokio::select! {
        biased;
        _ = shutdown.changed() => false,
        _ = tokio::time::sleep(tick) => true,
    }
}

pub(crate) async fn agent_worker(
    handle:       EngineHandle,
    agent:        AgentId,
    params:       Arc<SimParams>,
    mut shutdown: watch::Receiver<bool>,
) {
    let tick = params.agent_tick();
    while tick_or_shutdown(tick, &mut shutdown).await {
        if let Err(e) = handle.transition_agent(agent, behavior_transition(Arc::clone(&params))).await {
            warn!(%agent, error = %e, "agent worker lost the authority");
            break;
        }
    }
    debug!(%agent, "agent worker exiting");
}

pub(crate) async fn decay_worker(
    handle:       EngineHandle,
    pheromone:    PheromoneId,
    tick:         Duration,
    rate:         f32,
    mut shutdown: watch::Receiver<bool>,
) {
    while tick_or_shutdown(tick, &mut shutdown).await {
        match handle.update_pheromone(pheromone, decay_update(rate)).await {
            Ok(PheromoneFate::Kept) => {}
            Ok(PheromoneFate::Removed) => break,
            Err(e) => {
                warn!(%pheromone, error = %e, "decay worker lost the authority");
                break;
            }
        }
    }
    debug!(%pheromone, "decay worker exiting");
}
