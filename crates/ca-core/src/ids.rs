//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub`; ids
//! double as arena indices (`SceneryId` into the map's scenery arena,
//! `BuildingId` into the building store), so prefer `.index()` for clarity.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as an arena index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of an agent in the simulation's agent list.
    pub struct AgentId(u32);
}

typed_id! {
    /// Index of a building in the `BuildingStore`.
    pub struct BuildingId(u32);
}

typed_id! {
    /// Slot of a scenery object in the map's scenery arena.
    ///
    /// Tiles reference scenery by this id only; the slot may have been
    /// emptied (scenery destroyed) by the time the id is resolved.
    pub struct SceneryId(u32);
}

typed_id! {
    /// Handle of a sound sample owned by the host's audio layer.
    pub struct SampleId(u16);
}
