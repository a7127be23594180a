//! `ants-engine` — runs the colony.
//!
//! # Task layout
//!
//! ```text
//!   agent worker ×N ──┐                          ┌──▶ decay worker ×M
//!                     │  StateMsg (bounded mpsc)  │    (started on drop)
//!   EngineHandle ─────┼─────────────────────────▶ Authority ── owns WorldState
//!                     │  ◀── oneshot ack ──────── │
//!   decay worker ×M ──┘                          └── watch: shutdown
//! ```
//!
//! - The **authority** is the only task that touches [`WorldState`].  It
//!   applies one request at a time, in arrival order.
//! - An **agent worker** sleeps `agent_tick_ms`, asks the authority to run
//!   the behavior state machine on its agent, and waits for the answer.
//! - A **decay worker** does the same for one pheromone every
//!   `decay_tick_ms` and stops once the authority reports it removed.
//!
//! The first invariant violation (unknown id, out-of-range value) is fatal:
//! the authority logs it, stops, and [`Engine::shutdown`] returns it.
//!
//! [`Lockstep`] drives the same state and transitions without Tokio, one
//! tick at a time.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let engine = EngineBuilder::new(params).spawn()?;
//! let world = engine.snapshot().await?;
//! for agent in world.visible_agents() { /* draw */ }
//! engine.shutdown().await?;
//! ```

mod authority;
pub mod engine;
pub mod error;
pub mod lockstep;
pub mod message;
mod worker;
pub mod world;


pub use engine::{Engine, EngineBuilder, EngineHandle};
pub use error::{EngineError, EngineResult};
pub use lockstep::{Lockstep, StepReport};
pub use message::{AgentTransitionFn, PheromoneUpdateFn, StateMsg, behavior_transition, decay_update};
pub use world::{PheromoneFate, WorldState};
