//! `ants-behavior` — the agent state machine.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`transition`] | `step` (one tick of one agent) and its `Transition` result  |
//! | [`error`]      | `BehaviorError`, `BehaviorResult<T>`                      |
//!
//! # Design notes
//!
//! `step` is a pure function of its inputs:
//!
//! ```text
//! (params, rng, agent, nearby pheromones, trail) → (agent', drop?, trail', rng')
//! ```
//!
//! It never reads a clock, a global generator or shared state, so the same
//! inputs always produce the same output.  The engine calls it from inside
//! the world-state authority; tests call it directly with a
//! [`ConstantRng`][ants_core::ConstantRng] to pin exact values.
//!
//! ```text
//!            p(outside)            candidate leaves world
//!   Inside ─────────────▶ Outside ───────────────────────▶ Returning
//!     ▲                                                        │
//!     └────────────── trail used up (ReturnPolicy::EnterNest) ─┘
//! ```

pub mod error;
pub mod transition;


pub use error::{BehaviorError, BehaviorResult};
pub use transition::{PASS_EPSILON, Transition, step};
