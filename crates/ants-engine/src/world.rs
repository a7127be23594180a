//! The canonical world state and the two mutations applied to it.

use std::collections::BTreeMap;

use ants_behavior::{BehaviorResult, Transition};
use ants_colony::{Agent, Pheromone, TrailState};
use ants_core::{AgentId, AntRng, CoreResult, Distance, Orientation, PheromoneId, SimParams, distance};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{EngineError, EngineResult};

/// What became of a pheromone after a decay update.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PheromoneFate {
    Kept,
    Removed,
}

/// Everything the simulation knows.
///
/// Owned by exactly one party at a time: the authority task while the engine
/// runs, or a [`Lockstep`][crate::Lockstep] driver.  Everyone else sees
/// clones.  All maps are ordered, so iteration (and therefore the
/// nearby-pheromone list handed to the behavior code) is in ascending id
/// order.
#[derive(Clone, Debug)]
pub struct WorldState {
    pub agents: BTreeMap<AgentId, Agent>,

    pub pheromones: BTreeMap<PheromoneId, Pheromone>,

    /// Each agent's private drop counter.  Kept here rather than in the
    /// agent's worker so that only the owner of the state ever updates it.
    pub trails: BTreeMap<AgentId, TrailState>,

    /// The generator threaded through every agent transition.
    pub rng: AntRng,
}

impl WorldState {
    /// A world with nobody in it.
    pub fn empty(rng: AntRng) -> Self {
        Self {
            agents:     BTreeMap::new(),
            pheromones: BTreeMap::new(),
            trails:     BTreeMap::new(),
            rng,
        }
    }

    /// The starting world for `params`: `params.agents` agents at the nest,
    /// each facing a random direction.
    ///
    /// Initial headings come from a separate setup generator; only the
    /// per-tick generator is stored.  With `params.seed` set, both are
    /// seeded and the whole run is reproducible.
    pub fn populate(params: &SimParams) -> EngineResult<Self> {
        let (mut setup, rng) = match params.seed {
            Some(seed) => (SmallRng::seed_from_u64(seed), AntRng::seeded(seed)),
            None       => (SmallRng::from_entropy(), AntRng::from_entropy()),
        };

        let nest = params.world.center();
        let trail = TrailState::new(params.drop_distance()?);
        let mut state = Self::empty(rng);
        for i in 1..=params.agents {
            let orientation = Orientation::new(setup.gen_range(0.0..360.0))?;
            state.insert_agent(Agent::hatch(AgentId(i), nest, orientation), trail);
        }
        Ok(state)
    }

    /// Add `agent` together with its trail counter.  Every key of `agents`
    /// must also be a key of `trails`; a missing counter is reported as
    /// [`EngineError::TrailMissing`].
    pub fn insert_agent(&mut self, agent: Agent, trail: TrailState) {
        self.trails.insert(agent.id, trail);
        self.agents.insert(agent.id, agent);
    }

    /// One more than the largest live id, or [`PheromoneId::FIRST`].
    pub fn next_pheromone_id(&self) -> PheromoneId {
        self.pheromones
            .keys()
            .next_back()
            .map_or(PheromoneId::FIRST, |id| id.next())
    }

    /// Pheromones no further than `radius` from `agent`, ascending by id.
    pub fn nearby_pheromones(&self, agent: &Agent, radius: Distance) -> Vec<Pheromone> {
        self.pheromones
            .values()
            .filter(|p| distance(p.position, agent.position) <= radius)
            .copied()
            .collect()
    }

    /// Agents a renderer should draw.
    pub fn visible_agents(&self) -> impl Iterator<Item = &Agent> {
        self.agents.values().filter(|a| a.state.is_visible())
    }

    /// Pheromones at or above the removal threshold.
    pub fn effective_pheromones(&self) -> impl Iterator<Item = &Pheromone> {
        self.pheromones.values().filter(|p| p.is_effective())
    }

    // ── Mutations ─────────────────────────────────────────────────────────

    /// Run one agent transition.
    ///
    /// The agent, its trail counter and the generator are replaced together,
    /// and a drop inserts a full-strength pheromone at the agent's new
    /// position.  Returns the id of that pheromone, if any.  If `transition`
    /// fails nothing is changed.
    pub fn apply_agent_transition<F>(
        &mut self,
        id:         AgentId,
        radius:     Distance,
        transition: F,
    ) -> EngineResult<Option<PheromoneId>>
    where
        F: FnOnce(&Agent, &[Pheromone], TrailState, AntRng) -> BehaviorResult<Transition<AntRng>>,
    {
        let agent = self.agents.get(&id).ok_or(EngineError::AgentNotFound(id))?;
        let trail = *self.trails.get(&id).ok_or(EngineError::TrailMissing(id))?;
        let nearby = self.nearby_pheromones(agent, radius);

        let Transition { agent, drop_pheromone, trail, rng } =
            transition(agent, &nearby, trail, self.rng.clone())?;

        let dropped = drop_pheromone.then(|| {
            let pheromone = Pheromone::fresh(self.next_pheromone_id(), agent.position);
            self.pheromones.insert(pheromone.id, pheromone);
            pheromone.id
        });
        self.agents.insert(id, agent);
        self.trails.insert(id, trail);
        self.rng = rng;
        Ok(dropped)
    }

    /// Run one pheromone update.  `Ok(None)` from `update` removes it.
    pub fn apply_pheromone_update<F>(&mut self, id: PheromoneId, update: F) -> EngineResult<PheromoneFate>
    where
        F: FnOnce(&Pheromone) -> CoreResult<Option<Pheromone>>,
    {
        let pheromone = self.pheromones.get(&id).ok_or(EngineError::PheromoneNotFound(id))?;
        match update(pheromone)? {
            Some(next) => {
                self.pheromones.insert(id, next);
                Ok(PheromoneFate::Kept)
            }
            None => {
                self.pheromones.remove(&id);
                Ok(PheromoneFate::Removed)
            }
        }
    }
}
