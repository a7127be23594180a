//! `ants-colony` — the things that live in the world.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`agent`]     | `Agent`, `AgentState`                                        |
//! | [`pheromone`] | `Pheromone`, `PheromoneStrength`, decay                      |
//! | [`trail`]     | `TrailState`, an agent's distance-until-next-drop counter    |
//!
//! All types are plain values: every "mutation" returns a new value, and a
//! snapshot of the world is an ordinary clone.

pub mod agent;
pub mod pheromone;
pub mod trail;


pub use agent::{Agent, AgentState};
pub use pheromone::{EFFECTIVE_THRESHOLD, Pheromone, PheromoneStrength};
pub use trail::TrailState;
