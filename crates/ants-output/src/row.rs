//! Plain data rows, flattened out of a [`WorldState`] snapshot.

use ants_colony::AgentState;
use ants_engine::WorldState;

/// One agent in one snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    /// Index of the snapshot this row belongs to, starting at 0.
    pub sample:      u64,
    pub agent_id:    u32,
    pub state:       AgentState,
    pub x:           f32,
    pub y:           f32,
    pub orientation: f32,
    /// Number of pheromones visited on the current return trip.
    pub visited:     u32,
}

/// One pheromone in one snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PheromoneSnapshotRow {
    pub sample:       u64,
    pub pheromone_id: u32,
    pub strength:     f32,
    pub x:            f32,
    pub y:            f32,
}

impl AgentSnapshotRow {
    /// All agents of `world`, ascending by id.
    pub fn from_world(sample: u64, world: &WorldState) -> Vec<Self> {
        world
            .agents
            .values()
            .map(|a| Self {
                sample,
                agent_id:    a.id.into(),
                state:       a.state,
                x:           a.position.x,
                y:           a.position.y,
                orientation: a.orientation.degrees(),
                visited:     a.visited.len() as u32,
            })
            .collect()
    }
}

impl PheromoneSnapshotRow {
    /// All pheromones of `world`, ascending by id.
    pub fn from_world(sample: u64, world: &WorldState) -> Vec<Self> {
        world
            .pheromones
            .values()
            .map(|p| Self {
                sample,
                pheromone_id: p.id.into(),
                strength:     p.strength.value(),
                x:            p.position.x,
                y:            p.position.y,
            })
            .collect()
    }
}
