//! Starting, querying and stopping a concurrent run.

use std::sync::Arc;

use ants_behavior::{BehaviorResult, Transition};
use ants_colony::{Agent, Pheromone, TrailState};
use ants_core::{AgentId, AntRng, CoreResult, PheromoneId, SimParams};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tracing::info;

use crate::authority::Authority;
use crate::worker::agent_worker;
use crate::{EngineError, EngineResult, PheromoneFate, StateMsg, WorldState};

// ── EngineBuilder ─────────────────────────────────────────────────────────────

/// Fluent builder for [`Engine`].
///
/// # Example
///
/// ```rust,ignore
/// let engine = EngineBuilder::new(SimParams::default()).spawn()?;
/// tokio::time::sleep(Duration::from_secs(1)).await;
/// let world = engine.snapshot().await?;
/// engine.shutdown().await?;
/// ```
pub struct EngineBuilder {
    params:  SimParams,
    initial: Option<WorldState>,
}

impl EngineBuilder {
    pub fn new(params: SimParams) -> Self {
        Self { params, initial: None }
    }

    /// Start from `state` instead of [`WorldState::populate`].
    ///
    /// One agent worker is started per agent in `state`, and one decay
    /// worker per pheromone already in it.
    pub fn initial_state(mut self, state: WorldState) -> Self {
        self.initial = Some(state);
        self
    }

    /// Validate the parameters and start the authority and agent workers on
    /// the current Tokio runtime.
    ///
    /// # Errors
    ///
    /// - [`EngineError::Core`] if the parameters are invalid.
    /// - [`EngineError::NoRuntime`] if called outside a runtime.
    pub fn spawn(self) -> EngineResult<Engine> {
        self.params.validate()?;
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| EngineError::NoRuntime)?;

        let state = match self.initial {
            Some(state) => state,
            None        => WorldState::populate(&self.params)?,
        };
        let agents: Vec<AgentId> = state.agents.keys().copied().collect();
        let params = Arc::new(self.params);

        let (tx, rx) = mpsc::channel(params.mailbox_capacity);
        let (shutdown, shutdown_rx) = watch::channel(false);

        let authority = Authority::new(state, Arc::clone(&params), rx, tx.downgrade(), shutdown_rx.clone())?;
        let authority = runtime.spawn(authority.run());

        let handle = EngineHandle::new(tx);
        let workers = agents
            .iter()
            .map(|&id| {
                runtime.spawn(agent_worker(handle.clone(), id, Arc::clone(&params), shutdown_rx.clone()))
            })
            .collect();

        info!(agents = agents.len(), seed = ?params.seed, "engine started");
        Ok(Engine { handle, shutdown, authority, workers })
    }
}

// ── Engine ────────────────────────────────────────────────────────────────────

/// A running simulation.
///
/// Dropping it without [`shutdown`][Self::shutdown] also stops every task,
/// but discards the authority's outcome.
pub struct Engine {
    handle:    EngineHandle,
    shutdown:  watch::Sender<bool>,
    authority: JoinHandle<EngineResult<()>>,
    workers:   Vec<JoinHandle<()>>,
}

impl Engine {
    /// A request sink that outlives borrows of the engine.
    pub fn handle(&self) -> EngineHandle {
        self.handle.clone()
    }

    pub async fn snapshot(&self) -> EngineResult<WorldState> {
        self.handle.snapshot().await
    }

    /// Stop every task and wait for them.
    ///
    /// Returns the invariant violation that ended the run, if one did.
    pub async fn shutdown(self) -> EngineResult<()> {
        // Fails only if every receiver is already gone.
        let _ = self.shutdown.send(true);
        for worker in self.workers {
            worker.await?;
        }
        drop(self.handle);
        let outcome = self.authority.await?;
        info!(ok = outcome.is_ok(), "engine stopped");
        outcome
    }
}

// ── EngineHandle ──────────────────────────────────────────────────────────────

/// Cloneable sender side of the authority's mailbox.
///
/// Every call waits for the authority's answer.  Once the authority has
/// stopped, every call fails with [`EngineError::AuthorityStopped`].
#[derive(Clone, Debug)]
pub struct EngineHandle {
    tx: mpsc::Sender<StateMsg>,
}

impl EngineHandle {
    pub(crate) fn new(tx: mpsc::Sender<StateMsg>) -> Self {
        Self { tx }
    }

    async fn request<T>(&self, msg: impl FnOnce(oneshot::Sender<T>) -> StateMsg) -> EngineResult<T> {
        let (done, answer) = oneshot::channel();
        self.tx.send(msg(done)).await.map_err(|_| EngineError::AuthorityStopped)?;
        answer.await.map_err(|_| EngineError::AuthorityStopped)
    }

    /// A copy of the whole world as of the moment the authority reads this
    /// request.
    pub async fn snapshot(&self) -> EngineResult<WorldState> {
        self.request(|reply| StateMsg::Snapshot { reply }).await
    }

    /// Apply `transition` to `agent`.  Returns the id of the pheromone it
    /// dropped, if any.
    pub async fn transition_agent<F>(&self, agent: AgentId, transition: F) -> EngineResult<Option<PheromoneId>>
    where
        F: FnOnce(&Agent, &[Pheromone], TrailState, AntRng) -> BehaviorResult<Transition<AntRng>>
            + Send
            + 'static,
    {
        self.request(|done| StateMsg::NextAgentState { agent, transition: Box::new(transition), done })
            .await
    }

    /// Apply `update` to `pheromone`; `Ok(None)` from `update` removes it.
    pub async fn update_pheromone<F>(&self, pheromone: PheromoneId, update: F) -> EngineResult<PheromoneFate>
    where
        F: FnOnce(&Pheromone) -> CoreResult<Option<Pheromone>> + Send + 'static,
    {
        self.request(|done| StateMsg::UpdatePheromone { pheromone, update: Box::new(update), done })
            .await
    }
}
