//! Pheromones and their decay.

use ants_core::{CoreError, CoreResult, PheromoneId, WorldPosition};

/// Strength below which a pheromone no longer counts and is removed.
pub const EFFECTIVE_THRESHOLD: f32 = 0.1;

/// Scent strength in `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PheromoneStrength(f32);

impl PheromoneStrength {
    pub const FULL: PheromoneStrength = PheromoneStrength(1.0);

    pub fn new(strength: f32) -> CoreResult<Self> {
        if (0.0..=1.0).contains(&strength) {
            Ok(Self(strength))
        } else {
            Err(CoreError::Strength(strength))
        }
    }

    #[inline]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Strength after losing `rate` of it.
    pub fn decayed(self, rate: f32) -> CoreResult<Self> {
        Self::new(self.0 * (1.0 - rate))
    }

    #[inline]
    pub fn is_effective(self) -> bool {
        self.0 >= EFFECTIVE_THRESHOLD
    }
}

/// A scent marker dropped by a foraging agent.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pheromone {
    pub id:       PheromoneId,
    pub strength: PheromoneStrength,
    pub position: WorldPosition,
}

impl Pheromone {
    /// A newly dropped pheromone at full strength.
    pub fn fresh(id: PheromoneId, position: WorldPosition) -> Self {
        Self { id, strength: PheromoneStrength::FULL, position }
    }

    #[inline]
    pub fn is_effective(&self) -> bool {
        self.strength.is_effective()
    }

    /// Opacity a renderer should draw this pheromone with.
    #[inline]
    pub fn opacity(&self) -> f32 {
        self.strength.value()
    }

    /// One decay tick.
    ///
    /// `Ok(None)` means the pheromone dropped below [`EFFECTIVE_THRESHOLD`]
    /// on this tick and must be removed.
    pub fn decayed(&self, rate: f32) -> CoreResult<Option<Pheromone>> {
        let strength = self.strength.decayed(rate)?;
        Ok(strength.is_effective().then_some(Pheromone { strength, ..*self }))
    }
}
