//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` to allow
//! direct indexing into `Vec`s via `id.0 as usize`, but callers should prefer
//! the `.index()` helpers for clarity.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[derive(serde::Serialize, serde::Deserialize)]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — the type's max value.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }
    };
}

typed_id! {
    /// Identity of a rider.  Minted monotonically by the service for the whole
    /// run and never reused, so one arrival fanned out to several simulation
    /// instances keeps a single identity everywhere.
    pub struct PersonId(u64);
}

typed_id! {
    /// Index of an elevator within its building.  Stable for the elevator's
    /// lifetime; shrinking a building truncates from the highest index.
    pub struct ElevatorId(u32);
}

typed_id! {
    /// Identity of a workload burst descriptor.
    pub struct BurstId(u32);
}
