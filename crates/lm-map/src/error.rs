//! Map-construction error type.
//!
//! Queries against a built map never error — absence is expressed as
//! `Option`/empty collections.  Errors exist only at the builder boundary,
//! where a malformed centerline must be rejected before it can poison every
//! later projection.

use thiserror::Error;

use lm_core::LaneId;

/// Errors produced when building a [`LaneMap`](crate::LaneMap).
#[derive(Debug, Error)]
pub enum MapError {
    #[error("duplicate lane id {0}")]
    DuplicateLane(LaneId),

    #[error("lane {id}: centerline needs at least 2 samples, got {got}")]
    TooFewSamples { id: LaneId, got: usize },

    #[error("lane {id}: first sample must have s = 0, got {s}")]
    NonZeroStart { id: LaneId, s: f64 },

    #[error("lane {id}: arc length not strictly increasing at sample {index}")]
    NonIncreasingArcLength { id: LaneId, index: usize },

    #[error("lane {id}: negative width {width} at sample {index}")]
    NegativeWidth { id: LaneId, index: usize, width: f64 },
}

pub type MapResult<T> = Result<T, MapError>;
