//! Query tunables.

use std::f64::consts::FRAC_PI_3;

/// Knobs shared by the occupancy, neighbor-search, and relation queries.
///
/// Defaults match the values the surrounding prediction system was tuned
/// for; applications with unusual map geometry (very tight junctions, long
/// merge chains) adjust per instance rather than recompiling.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryConfig {
    /// Largest absolute difference between an object's heading and the lane
    /// heading at its projection for the lane to count as a candidate.
    /// Filters out opposite-direction and cross traffic.
    pub max_heading_diff: f64,

    /// Hop bound for the transitive successor/predecessor closure.  A lane
    /// `n` successor edges away counts as a successor iff `n <=
    /// max_relation_hops`.  Bounded so a lane across town never counts.
    pub max_relation_hops: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            max_heading_diff: FRAC_PI_3,
            max_relation_hops: 3,
        }
    }
}
