//! Run parameters.
//!
//! Typically loaded from a TOML file by the application crate (with the
//! `serde` feature) and handed to the engine builder, which calls
//! [`SimParams::validate`] before any task starts.  Every field has a
//! default, so a partial file only overrides what it names.

use std::time::Duration;

use crate::{CoreError, CoreResult, Distance, WorldPosition};

// ── World ─────────────────────────────────────────────────────────────────────

/// The rectangular world.  The origin is the top-left corner.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct World {
    pub width:  f32,
    pub height: f32,
}

impl World {
    #[inline]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// `true` if `p` lies in `[0, width) × [0, height)`.
    #[inline]
    pub fn contains(&self, p: WorldPosition) -> bool {
        (0.0..self.width).contains(&p.x) && (0.0..self.height).contains(&p.y)
    }

    /// The nest: every agent starts here.
    #[inline]
    pub fn center(&self) -> WorldPosition {
        WorldPosition::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new(1024.0, 1024.0)
    }
}

// ── ReturnPolicy ──────────────────────────────────────────────────────────────

/// What a returning agent does when no unvisited pheromone is within the
/// detection radius.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ReturnPolicy {
    /// The trail is used up: the agent goes back inside at the nest, forgets
    /// its visited pheromones and restarts its drop counter.
    #[default]
    EnterNest,

    /// The agent stays put (still returning) and tries again next tick.
    Idle,

    /// Surface the lost trail as an error, which ends the run.
    Fail,
}

// ── SimParams ─────────────────────────────────────────────────────────────────

/// Immutable per-run configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimParams {
    /// Agents spawned at start.
    pub agents: u32,

    /// Milliseconds an agent worker sleeps between transition requests.
    pub agent_tick_ms: u64,

    /// Chance per tick that an inside agent goes outside.
    pub outside_probability: f32,

    /// Chance per outside tick of a random turn.
    pub turn_probability: f32,

    /// Half-width, in degrees, of the uniform turn distribution.
    pub turn_magnitude: f32,

    /// Step length of outside and returning agents.
    pub move_distance: f32,

    /// Distance an outside agent travels per pheromone drop.
    pub drop_distance: f32,

    /// Milliseconds a pheromone worker sleeps between decay requests.
    pub decay_tick_ms: u64,

    /// Fraction of strength lost per decay tick.
    pub decay_rate: f32,

    /// Radius within which an agent senses pheromones.
    pub detection_radius: f32,

    pub return_policy: ReturnPolicy,

    pub world: World,

    /// Seed for the engine generator.  `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Capacity of the authority's bounded mailbox.
    pub mailbox_capacity: usize,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            agents:              1,
            agent_tick_ms:       10,
            outside_probability: 0.9,
            turn_probability:    0.1,
            turn_magnitude:      10.0,
            move_distance:       2.0,
            drop_distance:       10.0,
            decay_tick_ms:       1_000,
            decay_rate:          0.1,
            detection_radius:    50.0,
            return_policy:       ReturnPolicy::default(),
            world:               World::default(),
            seed:                None,
            mailbox_capacity:    1_024,
        }
    }
}

impl SimParams {
    /// Reject parameter combinations that would violate an invariant later.
    pub fn validate(&self) -> CoreResult<()> {
        for (name, p) in [
            ("outside_probability", self.outside_probability),
            ("turn_probability", self.turn_probability),
            ("decay_rate", self.decay_rate),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(CoreError::Config(format!("{name} = {p} is outside [0, 1]")));
            }
        }
        if !(0.0..360.0).contains(&self.turn_magnitude) {
            return Err(CoreError::Config(format!(
                "turn_magnitude = {} is outside [0, 360)",
                self.turn_magnitude
            )));
        }
        for (name, d) in [
            ("move_distance", self.move_distance),
            ("drop_distance", self.drop_distance),
            ("detection_radius", self.detection_radius),
        ] {
            if d.is_nan() || d < 0.0 {
                return Err(CoreError::Config(format!("{name} = {d} is negative")));
            }
        }
        if !(self.world.width > 0.0 && self.world.height > 0.0) {
            return Err(CoreError::Config(format!(
                "world size {}x{} must be positive",
                self.world.width, self.world.height
            )));
        }
        if self.agent_tick_ms == 0 || self.decay_tick_ms == 0 {
            return Err(CoreError::Config("tick delays must be at least 1 ms".into()));
        }
        if self.mailbox_capacity == 0 {
            return Err(CoreError::Config("mailbox_capacity must be at least 1".into()));
        }
        Ok(())
    }

    #[inline]
    pub fn agent_tick(&self) -> Duration {
        Duration::from_millis(self.agent_tick_ms)
    }

    #[inline]
    pub fn decay_tick(&self) -> Duration {
        Duration::from_millis(self.decay_tick_ms)
    }

    pub fn move_distance(&self) -> CoreResult<Distance> {
        Distance::new(self.move_distance)
    }

    pub fn drop_distance(&self) -> CoreResult<Distance> {
        Distance::new(self.drop_distance)
    }

    pub fn detection_radius(&self) -> CoreResult<Distance> {
        Distance::new(self.detection_radius)
    }
}
