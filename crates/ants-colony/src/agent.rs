//! Agents and their behavioral state.

use std::collections::BTreeSet;
use std::fmt;

use ants_core::{AgentId, Orientation, PheromoneId, WorldPosition};

/// Which phase of a foraging trip an agent is in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AgentState {
    /// In the nest.  Not drawn, does not move.
    Inside,
    /// Foraging: random walk, dropping pheromones.
    Outside,
    /// Walking home along the pheromone trail.
    Returning,
}

impl AgentState {
    /// Inside agents are hidden from renderers.
    #[inline]
    pub fn is_visible(self) -> bool {
        !matches!(self, AgentState::Inside)
    }
}

impl fmt::Display for AgentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AgentState::Inside    => "inside",
            AgentState::Outside   => "outside",
            AgentState::Returning => "returning",
        };
        f.write_str(s)
    }
}

/// A single ant.
///
/// `visited` holds the pheromones this agent has already passed on its way
/// home; it only grows while the agent is returning.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id:          AgentId,
    pub state:       AgentState,
    pub position:    WorldPosition,
    pub orientation: Orientation,
    pub visited:     BTreeSet<PheromoneId>,
}

impl Agent {
    /// A freshly created agent: inside the nest, nothing visited.
    pub fn hatch(id: AgentId, position: WorldPosition, orientation: Orientation) -> Self {
        Self {
            id,
            state: AgentState::Inside,
            position,
            orientation,
            visited: BTreeSet::new(),
        }
    }

    #[inline]
    pub fn has_visited(&self, pheromone: PheromoneId) -> bool {
        self.visited.contains(&pheromone)
    }

    pub fn with_state(&self, state: AgentState) -> Agent {
        Agent { state, ..self.clone() }
    }

    /// Same agent, moved to `position` facing `orientation`.
    pub fn moved(&self, position: WorldPosition, orientation: Orientation) -> Agent {
        Agent { position, orientation, ..self.clone() }
    }

    /// Hit the edge of the world: face the other way and head home.
    pub fn turned_back(&self) -> Agent {
        Agent {
            state:       AgentState::Returning,
            orientation: self.orientation.reversed(),
            ..self.clone()
        }
    }

    /// Same agent with `pheromone` added to its visited set.
    pub fn visiting(mut self, pheromone: PheromoneId) -> Agent {
        self.visited.insert(pheromone);
        self
    }

    /// Back inside the nest at `nest`, with the trail memory cleared.
    /// Orientation is kept.
    pub fn entered_nest(&self, nest: WorldPosition) -> Agent {
        Agent {
            state:    AgentState::Inside,
            position: nest,
            visited:  BTreeSet::new(),
            ..self.clone()
        }
    }
}
