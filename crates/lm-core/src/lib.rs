//! `lm-core` — foundational types for the lane-map query engine.
//!
//! This crate is a dependency of every other `lm-*` crate.  It intentionally
//! has no `lm-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                                  |
//! |-----------|-----------------------------------------------------------|
//! | [`ids`]   | `LaneId` (map-store string id), `LaneHandle` (arena index)|
//! | [`point`] | `Point2`, angle normalisation/interpolation helpers       |
//! | [`turn`]  | `TurnType` maneuver classification                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod ids;
pub mod point;
pub mod turn;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{LaneHandle, LaneId};
pub use point::{angle_diff, lerp_angle, normalize_angle, Point2};
pub use turn::TurnType;
