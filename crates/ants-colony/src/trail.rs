//! Per-agent trail bookkeeping.

use ants_core::{CoreResult, Distance};

/// How far an outside agent still has to walk before it drops its next
/// pheromone.
///
/// This is the agent's private state.  It is stored next to the agent in the
/// world state, so the authority is the only thing that ever updates it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrailState {
    pub until_drop: Distance,
}

impl TrailState {
    /// A counter that starts a full drop interval away from the next drop.
    #[inline]
    pub fn new(drop_distance: Distance) -> Self {
        Self { until_drop: drop_distance }
    }

    /// Account for a step of length `step`.
    ///
    /// Returns `(drop, next)`: when the remaining distance is no more than
    /// one step a pheromone is dropped and the counter restarts at
    /// `drop_distance`; otherwise the step is subtracted.
    pub fn advance(self, step: Distance, drop_distance: Distance) -> CoreResult<(bool, TrailState)> {
        if self.until_drop <= step {
            Ok((true, TrailState::new(drop_distance)))
        } else {
            Ok((false, TrailState { until_drop: self.until_drop.checked_sub(step)? }))
        }
    }
}
