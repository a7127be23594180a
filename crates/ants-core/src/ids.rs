//! Strongly typed identifier wrappers.
//!
//! Both ids are `Copy + Ord + Hash` so they can key the ordered maps of the
//! world state without ceremony.  Ids start at 1; there is no "zero" agent or
//! pheromone.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The first id handed out in a run.
            pub const FIRST: $name = $name(1);

            /// The id directly after `self`.
            #[inline(always)]
            pub fn next(self) -> $name {
                $name(self.0 + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for u32 {
            #[inline(always)]
            fn from(id: $name) -> u32 {
                id.0
            }
        }
    };
}

typed_id! {
    /// Identity of an agent.  Agents are numbered `1..=agents` at start.
    pub struct AgentId(u32);
}

typed_id! {
    /// Identity of a pheromone.  Allocated as one more than the largest live
    /// id, so ids of removed pheromones may be reused.
    pub struct PheromoneId(u32);
}
