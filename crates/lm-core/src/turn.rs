//! Lane maneuver classification.
//!
//! The numeric values mirror the map store's wire convention, so a
//! `TurnType` can round-trip through `as u8` when exchanged with the loader
//! or logged as a raw column value.

/// What a lane does geometrically: go straight, turn, or reverse direction.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
#[repr(u8)]
pub enum TurnType {
    /// Classification missing from the source map.
    Unknown = 0,
    /// Straight-through lane.  Also the default for unresolvable lane ids:
    /// downstream prediction always needs a usable value, and "go forward"
    /// is the least-surprising assumption.
    #[default]
    Straight = 1,
    /// Left-turn lane.
    Left = 2,
    /// Right-turn lane.
    Right = 3,
    /// U-turn lane.
    UTurn = 4,
}

impl TurnType {
    /// Human-readable label, useful for debug output and CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            TurnType::Unknown  => "unknown",
            TurnType::Straight => "straight",
            TurnType::Left     => "left",
            TurnType::Right    => "right",
            TurnType::UTurn    => "u-turn",
        }
    }
}

impl std::fmt::Display for TurnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
