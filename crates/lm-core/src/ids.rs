//! Lane identifiers: the map store's opaque string id and the zero-cost
//! arena handle used everywhere past the lookup boundary.
//!
//! `LaneId` is what the outside world speaks (`"l20"`); `LaneHandle` is what
//! the query engine speaks.  Interning happens exactly once, at map build
//! time; every hot-path structure stores handles and indexes `Vec`s via
//! `handle.index()`.

use std::borrow::Borrow;
use std::fmt;

/// Generate a typed handle wrapper around a primitive integer.
macro_rules! typed_handle {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid handle" — equivalent to `u32::MAX`.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized handles are
            /// visibly invalid.
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
            fn from(h: $name) -> usize {
                h.0 as usize
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

typed_handle! {
    /// Index of a lane in the map's lane arena.  Max ~4.3 billion lanes.
    pub struct LaneHandle(u32);
}

// ── LaneId ────────────────────────────────────────────────────────────────────

/// Opaque string identifier assigned by the map store (e.g. `"l20"`).
///
/// Unique within a loaded map.  Cheap to clone relative to lane geometry;
/// still, prefer [`LaneHandle`] anywhere a lookup has already happened.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LaneId(String);

impl LaneId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LaneId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for LaneId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Allows `HashMap<LaneId, _>` lookup by `&str` without allocating.
impl Borrow<str> for LaneId {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
