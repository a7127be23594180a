//! Value-threaded random number generation.
//!
//! # Determinism strategy
//!
//! A generator is a *value*: every draw consumes it and hands back the next
//! generator alongside the drawn number,
//!
//!   (value, next) = rng.next_long()
//!
//! so the behavior code threads the generator explicitly through every
//! decision.  The world state stores the current generator; replaying the same
//! sequence of generator values replays the same agent trajectory, and there
//! is no shared mutable generator anywhere on the per-tick path.
//!
//! Every derived draw (unit float, range, weighted coin) is built on top of
//! [`RandomSource::next_long`] alone, so a fixed-output source such as
//! [`ConstantRng`] drives the behavior code through exact, known paths in
//! tests.

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use crate::{CoreError, CoreResult};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Number of mantissa bits used to turn a long into a unit float.
const UNIT_BITS: u32 = 24;

// ── RandomSource ──────────────────────────────────────────────────────────────

/// A generator that is consumed by each draw.
pub trait RandomSource: Sized {
    /// The base draw every other operation is expressed in.
    fn next_long(self) -> (i64, Self);

    /// A long in `[0, i64::MAX]`.  Negative draws are shifted up by 2^63.
    fn next_non_negative_long(self) -> (i64, Self) {
        let (value, next) = self.next_long();
        if value < 0 {
            (value.wrapping_add(i64::MAX).wrapping_add(1), next)
        } else {
            (value, next)
        }
    }

    /// A float uniformly distributed in `[0, 1)`.
    ///
    /// Only the top 24 of the 63 random bits are used: that is exactly the
    /// `f32` mantissa, so the result can never round up to 1.0.
    fn next_unit_f32(self) -> (f32, Self) {
        let (value, next) = self.next_non_negative_long();
        let top = (value >> (63 - UNIT_BITS)) as u32;
        (top as f32 / (1u32 << UNIT_BITS) as f32, next)
    }

    /// A float uniformly distributed in `[min, max)`.
    fn next_f32_in(self, min: f32, max: f32) -> (f32, Self) {
        let (unit, next) = self.next_unit_f32();
        (min + unit * (max - min), next)
    }

    /// `true` with probability `p`.
    ///
    /// `p == 0` and `p == 1` are decided without consuming a draw.  Any `p`
    /// outside `[0, 1]` is an invariant violation.
    fn next_bool_with_probability(self, p: f32) -> CoreResult<(bool, Self)> {
        if !(0.0..=1.0).contains(&p) {
            return Err(CoreError::Probability(p));
        }
        if p == 0.0 {
            return Ok((false, self));
        }
        if p == 1.0 {
            return Ok((true, self));
        }
        let (unit, next) = self.next_unit_f32();
        Ok((unit < p, next))
    }
}

// ── AntRng ────────────────────────────────────────────────────────────────────

/// The engine's generator: a `SmallRng` moved from draw to draw.
///
/// Cloning is cheap (a few words of state), which is what lets the world
/// state hand a copy to a transition and only commit the returned generator
/// once the transition succeeded.
#[derive(Clone, Debug)]
pub struct AntRng(SmallRng);

impl AntRng {
    /// Seed deterministically.  The same seed always yields the same stream.
    pub fn seeded(seed: u64) -> Self {
        AntRng(SmallRng::seed_from_u64(seed.wrapping_mul(MIXING_CONSTANT)))
    }

    /// Seed from OS entropy for runs that need not be reproducible.
    pub fn from_entropy() -> Self {
        AntRng(SmallRng::from_entropy())
    }
}

impl RandomSource for AntRng {
    #[inline]
    fn next_long(mut self) -> (i64, Self) {
        let value = self.0.next_u64() as i64;
        (value, self)
    }
}

// ── ConstantRng ───────────────────────────────────────────────────────────────

/// A source that always yields the same long.
///
/// Meant for exact-value tests of the behavior state machine: with
/// `ConstantRng(1)` every unit draw is `0.0`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ConstantRng(pub i64);

impl RandomSource for ConstantRng {
    #[inline]
    fn next_long(self) -> (i64, Self) {
        (self.0, self)
    }
}
