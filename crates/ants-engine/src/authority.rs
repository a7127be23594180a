//! The world-state authority: the one task that owns [`WorldState`].
//!
//! Requests arrive through a bounded FIFO mailbox and are applied one at a
//! time, so every mutation is atomic and a snapshot always reflects a
//! complete prefix of the request stream.  Decay workers are started here,
//! one per pheromone, the moment the pheromone exists.

use std::sync::Arc;

use ants_core::{Distance, PheromoneId, SimParams};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinSet;
use tracing::{debug, error, info};

use crate::worker::decay_worker;
use crate::{EngineHandle, EngineResult, PheromoneFate, StateMsg, WorldState};

pub(crate) struct Authority {
    state:    WorldState,
    params:   Arc<SimParams>,
    radius:   Distance,
    rx:       mpsc::Receiver<StateMsg>,
    /// Weak, so the authority never keeps its own mailbox open.
    mailbox:  mpsc::WeakSender<StateMsg>,
    shutdown: watch::Receiver<bool>,
    decays:   JoinSet<()>,
}

impl Authority {
    pub(crate) fn new(
        state:    WorldState,
        params:   Arc<SimParams>,
        rx:       mpsc::Receiver<StateMsg>,
        mailbox:  mpsc::WeakSender<StateMsg>,
        shutdown: watch::Receiver<bool>,
    ) -> EngineResult<Self> {
        let radius = params.detection_radius()?;
        Ok(Self { state, params, radius, rx, mailbox, shutdown, decays: JoinSet::new() })
    }

    /// Serve requests until shutdown, until every sender is gone, or until
    /// the first invariant violation, which is returned.
    pub(crate) async fn run(mut self) -> EngineResult<()> {
        info!(
            agents     = self.state.agents.len(),
            pheromones = self.state.pheromones.len(),
            "authority started"
        );

        let existing: Vec<PheromoneId> = self.state.pheromones.keys().copied().collect();
        for id in existing {
            self.spawn_decay(id);
        }

        let outcome = loop {
            tokio::select! {
                biased;
                _ = self.shutdown.changed() => break Ok(()),
                Some(_) = self.decays.join_next(), if !self.decays.is_empty() => {}
                msg = self.rx.recv() => {
                    let Some(msg) = msg else { break Ok(()) };
                    if let Err(e) = self.handle(msg) {
                        error!(error = %e, "invariant violated, stopping the authority");
                        break Err(e);
                    }
                }
            }
        };

        self.decays.shutdown().await;
        info!(
            agents     = self.state.agents.len(),
            pheromones = self.state.pheromones.len(),
            "authority stopped"
        );
        outcome
    }

    fn handle(&mut self, msg: StateMsg) -> EngineResult<()> {
        match msg {
            StateMsg::NextAgentState { agent, transition, done } => {
                let dropped = self.state.apply_agent_transition(agent, self.radius, transition)?;
                if let Some(id) = dropped {
                    debug!(%agent, pheromone = %id, "pheromone dropped");
                    self.spawn_decay(id);
                }
                // The requester may have gone away.
                let _ = done.send(dropped);
            }
            StateMsg::UpdatePheromone { pheromone, update, done } => {
                let fate = self.state.apply_pheromone_update(pheromone, update)?;
                if fate == PheromoneFate::Removed {
                    debug!(%pheromone, "pheromone evaporated");
                }
                let _ = done.send(fate);
            }
            StateMsg::Snapshot { reply } => {
                let _ = reply.send(self.state.clone());
            }
        }
        Ok(())
    }

    fn spawn_decay(&mut self, id: PheromoneId) {
        // No live sender: the engine is being torn down.
        let Some(tx) = self.mailbox.upgrade() else { return };
        self.decays.spawn(decay_worker(
            EngineHandle::new(tx),
            id,
            self.params.decay_tick(),
            self.params.decay_rate,
            self.shutdown.clone(),
        ));
    }
}
