//! A synchronous, single-threaded driver over the same state and transitions
//! as the concurrent engine.
//!
//! Where the engine interleaves agent and decay requests by wall-clock
//! timing, `Lockstep` advances in whole ticks: each tick first decays the
//! pheromones that are due, then transitions every agent in ascending id
//! order.  Given a seed, a run is exactly reproducible, which makes it the
//! tool for replaying a trajectory and for tests.

use std::collections::BTreeMap;

use ants_behavior::step;
use ants_core::{AgentId, Distance, PheromoneId, SimParams};

use crate::{EngineResult, PheromoneFate, WorldState};

/// What changed during one or more ticks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    pub dropped: Vec<PheromoneId>,
    pub removed: Vec<PheromoneId>,
}

impl StepReport {
    fn absorb(&mut self, other: StepReport) {
        self.dropped.extend(other.dropped);
        self.removed.extend(other.removed);
    }
}

pub struct Lockstep {
    params: SimParams,
    radius: Distance,
    state:  WorldState,
    tick:   u64,

    /// Agent ticks per decay tick: the decay delay rounded down to whole
    /// agent ticks, never less than one.
    decay_every: u64,

    /// Tick at which each live pheromone appeared.
    born: BTreeMap<PheromoneId, u64>,
}

impl Lockstep {
    /// A fresh world for `params`.
    pub fn new(params: SimParams) -> EngineResult<Self> {
        params.validate()?;
        let state = WorldState::populate(&params)?;
        Self::with_state(params, state)
    }

    /// Drive `state` instead of a fresh world.  Pheromones already in it
    /// count as born at tick 0.
    pub fn with_state(params: SimParams, state: WorldState) -> EngineResult<Self> {
        params.validate()?;
        let radius = params.detection_radius()?;
        let decay_every = (params.decay_tick_ms / params.agent_tick_ms).max(1);
        let born = state.pheromones.keys().map(|&id| (id, 0)).collect();
        Ok(Self { params, radius, state, tick: 0, decay_every, born })
    }

    /// Advance one tick.
    pub fn step(&mut self) -> EngineResult<StepReport> {
        self.tick += 1;
        let now = self.tick;
        let mut report = StepReport::default();

        let due: Vec<PheromoneId> = self
            .born
            .iter()
            .filter(|&(_, &born)| now > born && (now - born) % self.decay_every == 0)
            .map(|(&id, _)| id)
            .collect();
        let rate = self.params.decay_rate;
        for id in due {
            if self.state.apply_pheromone_update(id, |p| p.decayed(rate))? == PheromoneFate::Removed {
                self.born.remove(&id);
                report.removed.push(id);
            }
        }

        let agents: Vec<AgentId> = self.state.agents.keys().copied().collect();
        let params = &self.params;
        for id in agents {
            let dropped = self.state.apply_agent_transition(id, self.radius, |agent, nearby, trail, rng| {
                step(params, rng, agent, nearby, trail)
            })?;
            if let Some(pheromone) = dropped {
                self.born.insert(pheromone, now);
                report.dropped.push(pheromone);
            }
        }

        Ok(report)
    }

    /// Advance `ticks` ticks, stopping at the first error.
    pub fn run_ticks(&mut self, ticks: u64) -> EngineResult<StepReport> {
        let mut report = StepReport::default();
        for _ in 0..ticks {
            report.absorb(self.step()?);
        }
        Ok(report)
    }

    /// Ticks completed so far.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn state(&self) -> &WorldState {
        &self.state
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    pub fn into_state(self) -> WorldState {
        self.state
    }
}
