//! `ants-core` — foundational types for the pheromone-trail colony engine.
//!
//! This crate is a dependency of every other `ants-*` crate.  It has no
//! `ants-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                        |
//! |-----------------|-----------------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `PheromoneId`                                        |
//! | [`geo`]         | `Orientation`, `Turn`, `Distance`, `WorldPosition`, movement math |
//! | [`rng`]         | `RandomSource` (value-threaded), `AntRng`, `ConstantRng`        |
//! | [`params`]      | `SimParams`, `World`, `ReturnPolicy`                            |
//! | [`error`]       | `CoreError`, `CoreResult`                                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod error;
pub mod geo;
pub mod ids;
pub mod params;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{
    Distance, Orientation, PositionDelta, Turn, WorldPosition, bearing_to, distance, movement,
    segment_distance,
};
pub use ids::{AgentId, PheromoneId};
pub use params::{ReturnPolicy, SimParams, World};
pub use rng::{AntRng, ConstantRng, RandomSource};
