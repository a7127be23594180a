//! Planar geometry for the colony world.
//!
//! The world uses screen conventions: the origin is the top-left corner, `y`
//! grows downward and an [`Orientation`] of 0° points "up" (towards negative
//! `y`), 90° points right.  All quantities are `f32`, which is plenty for a
//! world a few thousand units across.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

use crate::{CoreError, CoreResult};

// ── Orientation ───────────────────────────────────────────────────────────────

/// A compass heading in degrees, always within `[0, 360)`.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Orientation(f32);

impl Orientation {
    pub const NORTH: Orientation = Orientation(0.0);
    pub const EAST:  Orientation = Orientation(90.0);
    pub const SOUTH: Orientation = Orientation(180.0);
    pub const WEST:  Orientation = Orientation(270.0);

    /// Validate and wrap `degrees`.  Values outside `[0, 360)` are rejected.
    pub fn new(degrees: f32) -> CoreResult<Self> {
        if (0.0..360.0).contains(&degrees) {
            Ok(Self(degrees))
        } else {
            Err(CoreError::Orientation(degrees))
        }
    }

    /// Wrap an arbitrary finite angle into `[0, 360)`.
    ///
    /// `rem_euclid` of a tiny negative angle rounds up to exactly 360.0 in
    /// `f32`, which is folded back to 0.
    fn wrapped(degrees: f32) -> CoreResult<Self> {
        let wrapped = degrees.rem_euclid(360.0);
        Self::new(if wrapped >= 360.0 { 0.0 } else { wrapped })
    }

    #[inline]
    pub fn degrees(self) -> f32 {
        self.0
    }

    /// Rotate by `turn`, wrapping the result back into `[0, 360)`.
    pub fn turn(self, turn: Turn) -> Orientation {
        let degrees = self.0 + turn.0;
        // Both operands are validated, so the sum lies in (-360, 720).
        let wrapped = if degrees < 0.0 {
            degrees + 360.0
        } else if degrees >= 360.0 {
            degrees - 360.0
        } else {
            degrees
        };
        if wrapped >= 360.0 { Orientation(0.0) } else { Orientation(wrapped) }
    }

    /// The opposite heading.
    #[inline]
    pub fn reversed(self) -> Orientation {
        self.turn(Turn::HALF)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}°", self.0)
    }
}

// ── Turn ──────────────────────────────────────────────────────────────────────

/// A signed rotation in degrees, strictly within `(-360, 360)`.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn(f32);

impl Turn {
    pub const ZERO: Turn = Turn(0.0);
    pub const HALF: Turn = Turn(180.0);

    pub fn new(degrees: f32) -> CoreResult<Self> {
        if degrees > -360.0 && degrees < 360.0 {
            Ok(Self(degrees))
        } else {
            Err(CoreError::Turn(degrees))
        }
    }

    #[inline]
    pub fn degrees(self) -> f32 {
        self.0
    }
}

// ── Distance ──────────────────────────────────────────────────────────────────

/// A non-negative length in world units.
///
/// NaN is rejected at construction, so `Distance` is totally ordered.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Distance(f32);

impl Distance {
    pub const ZERO: Distance = Distance(0.0);

    pub fn new(raw: f32) -> CoreResult<Self> {
        if raw >= 0.0 {
            Ok(Self(raw))
        } else {
            Err(CoreError::Distance(raw))
        }
    }

    #[inline]
    pub fn raw(self) -> f32 {
        self.0
    }

    /// `self - other`, failing if the result would be negative.
    pub fn checked_sub(self, other: Distance) -> CoreResult<Distance> {
        Distance::new(self.0 - other.0)
    }
}

impl Eq for Distance {}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

// ── Positions ─────────────────────────────────────────────────────────────────

/// A displacement between two world positions.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionDelta {
    pub dx: f32,
    pub dy: f32,
}

impl PositionDelta {
    #[inline]
    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

/// A point in the world.  Bounds are enforced by the behavior code at the
/// moment an agent moves, not here.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldPosition {
    pub x: f32,
    pub y: f32,
}

impl WorldPosition {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add<PositionDelta> for WorldPosition {
    type Output = WorldPosition;
    #[inline]
    fn add(self, d: PositionDelta) -> WorldPosition {
        WorldPosition::new(self.x + d.dx, self.y + d.dy)
    }
}

impl Sub for WorldPosition {
    type Output = PositionDelta;
    #[inline]
    fn sub(self, other: WorldPosition) -> PositionDelta {
        PositionDelta::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Display for WorldPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

// ── Movement math ─────────────────────────────────────────────────────────────

/// Displacement produced by travelling `by` along `orientation`.
///
/// The circle is split into sectors so the four axis-aligned headings come
/// out exact (no `cos(90°)` residue).  The sign of each axis comes from the
/// half of the circle the heading falls in: right half → `+x`, lower half
/// (90°..270°) → `+y`.
pub fn movement(orientation: Orientation, by: Distance) -> PositionDelta {
    let degrees = orientation.degrees();
    let raw = by.raw();

    let dx = if degrees == 0.0 || degrees == 180.0 {
        0.0
    } else if degrees < 180.0 {
        raw * (90.0 - degrees).to_radians().cos()
    } else {
        raw * (270.0 - degrees).abs().to_radians().cos()
    };
    let sign_x = if degrees < 180.0 { 1.0 } else { -1.0 };

    let dy = if degrees == 90.0 || degrees == 270.0 {
        0.0
    } else if degrees < 90.0 || degrees > 270.0 {
        raw * (90.0 - degrees).to_radians().sin()
    } else {
        raw * (270.0 - degrees).abs().to_radians().sin()
    };
    let sign_y = if degrees > 90.0 && degrees < 270.0 { 1.0 } else { -1.0 };

    PositionDelta::new(sign_x * dx, sign_y * dy)
}

/// Heading from `from` towards `to`.
///
/// Straight up/right/down/left are returned exactly; everything else goes
/// through `atan(dy / dx)` offset by 90° (target to the right) or 270°
/// (target to the left).
pub fn bearing_to(from: WorldPosition, to: WorldPosition) -> CoreResult<Orientation> {
    if from == to {
        return Err(CoreError::IdenticalPoints(from));
    }
    let PositionDelta { dx, dy } = to - from;

    if dx == 0.0 && dy < 0.0 {
        Ok(Orientation::NORTH)
    } else if dx > 0.0 && dy == 0.0 {
        Ok(Orientation::EAST)
    } else if dx == 0.0 && dy > 0.0 {
        Ok(Orientation::SOUTH)
    } else if dx < 0.0 && dy == 0.0 {
        Ok(Orientation::WEST)
    } else {
        let offset = if dx < 0.0 { 270.0 } else { 90.0 };
        Orientation::wrapped((dy / dx).atan().to_degrees() + offset)
    }
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: WorldPosition, b: WorldPosition) -> Distance {
    Distance((b.x - a.x).hypot(b.y - a.y))
}

/// Shortest distance from `point` to the segment `a → b`.
///
/// The projection of `point` onto the segment's line is clamped to the
/// segment.  Segments with a squared length below 0.001 are treated as the
/// single point `a`.
pub fn segment_distance(segment: (WorldPosition, WorldPosition), point: WorldPosition) -> Distance {
    let (a, b) = segment;
    let length_sq = f64::from(distance(a, b).raw()).powi(2);

    if length_sq < 0.001 {
        return distance(a, point);
    }

    let (ax, ay) = (f64::from(a.x), f64::from(a.y));
    let (bx, by) = (f64::from(b.x), f64::from(b.y));
    let (px, py) = (f64::from(point.x), f64::from(point.y));

    let t = (((px - ax) * (bx - ax) + (py - ay) * (by - ay)) / length_sq).clamp(0.0, 1.0);
    let closest = WorldPosition::new((ax + t * (bx - ax)) as f32, (ay + t * (by - ay)) as f32);
    distance(point, closest)
}
