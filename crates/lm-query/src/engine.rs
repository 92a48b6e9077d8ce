//! The query engine: occupancy resolution and neighbor search.
//!
//! `LaneQuery` borrows a built [`LaneMap`] — no singletons, no hidden
//! globals; tests hand it a fixture map, production hands it the loaded one.
//! Every method is a pure read: absence comes back as `None` or an empty
//! `Vec`, never as an error.
//!
//! # Result ordering
//!
//! Spatial results are ordered by ascending distance from the query point to
//! the lane's nearest centerline point, ties broken by lane id, so repeated
//! queries against the same map are byte-for-byte reproducible.

use std::cmp::Ordering;

use rustc_hash::FxHashSet;

use lm_core::{angle_diff, LaneHandle, Point2, TurnType};
use lm_map::{Lane, LaneMap, LanePoint};

use crate::config::QueryConfig;

/// Read-only query handle over a loaded lane map.
///
/// Cheap to construct (two words); make one per call site or share one —
/// either way it is `Send + Sync` because the underlying map is immutable.
#[derive(Copy, Clone)]
pub struct LaneQuery<'m> {
    map: &'m LaneMap,
    cfg: QueryConfig,
}

impl<'m> LaneQuery<'m> {
    pub fn new(map: &'m LaneMap) -> Self {
        Self { map, cfg: QueryConfig::default() }
    }

    pub fn with_config(map: &'m LaneMap, cfg: QueryConfig) -> Self {
        Self { map, cfg }
    }

    #[inline]
    pub fn map(&self) -> &'m LaneMap {
        self.map
    }

    #[inline]
    pub fn config(&self) -> &QueryConfig {
        &self.cfg
    }

    // ── Occupancy resolution ──────────────────────────────────────────────

    /// Which lanes does a point with the given heading currently occupy?
    ///
    /// Candidates are lanes whose centerline passes within `radius` of
    /// `point` and whose heading at the projection is within the configured
    /// tolerance of `heading`.  When `prev` is non-empty, only candidates
    /// that are the same lane as — or a (bounded-transitively) successor of —
    /// some previous lane survive: a tracked object cannot teleport to an
    /// unrelated lane between consecutive time steps.  When `prev` is empty
    /// no topological filter applies.
    ///
    /// Returns an empty vec when nothing qualifies; handles come back in
    /// ascending order.
    pub fn on_lane(
        &self,
        prev: &[LaneHandle],
        point: Point2,
        heading: f64,
        radius: f64,
    ) -> Vec<LaneHandle> {
        self.map
            .lanes_near(point, radius)
            .into_iter()
            .filter(|&h| {
                let Some(lane) = self.map.lane(h) else {
                    return false;
                };
                if !self.heading_matches(lane, point, heading) {
                    return false;
                }
                prev.is_empty() || self.is_identical(h, prev) || self.is_successor(h, prev)
            })
            .collect()
    }

    // ── Neighbor search ───────────────────────────────────────────────────

    /// Lanes near `point` that an object could be in or change into.
    ///
    /// With `curr` empty this is an unrestricted spatial search: every lane
    /// within `radius` whose heading matches, ordered by distance.  With
    /// `curr` non-empty, candidates are restricted to lateral neighbors
    /// (left or right, evaluated symmetrically) of some current lane —
    /// succession does not count; that is [`on_lane`](Self::on_lane)'s job.
    ///
    /// Lanes already in `curr` are never returned.
    pub fn nearby_lanes(
        &self,
        point: Point2,
        heading: f64,
        radius: f64,
        curr: &[LaneHandle],
    ) -> Vec<LaneHandle> {
        let curr_set: FxHashSet<LaneHandle> = curr.iter().copied().collect();
        let mut hits: Vec<(f64, &Lane)> = self
            .map
            .lanes_near(point, radius)
            .into_iter()
            .filter_map(|h| {
                if curr_set.contains(&h) {
                    return None;
                }
                let lane = self.map.lane(h)?;
                if !self.heading_matches(lane, point, heading) {
                    return None;
                }
                if !curr.is_empty()
                    && !self.is_left_neighbor(h, curr)
                    && !self.is_right_neighbor(h, curr)
                {
                    return None;
                }
                Some((lane.distance_to(point), lane))
            })
            .collect();

        hits.sort_by(|a, b| {
            a.0.partial_cmp(&b.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.id().cmp(b.1.id()))
        });
        hits.into_iter().map(|(_, lane)| lane.handle()).collect()
    }

    // ── Geometry pass-throughs ────────────────────────────────────────────

    /// Position, heading, and width on the lane at arc length `s`
    /// (extrapolated past either end).  `None` only when the handle does not
    /// resolve.
    pub fn project_from_lane(&self, handle: LaneHandle, s: f64) -> Option<LanePoint> {
        self.map.lane(handle).map(|lane| lane.sample_at(s))
    }

    /// Longitudinal/lateral offset of `point` relative to the lane.
    pub fn project(&self, point: Point2, handle: LaneHandle) -> Option<(f64, f64)> {
        self.map.lane(handle).map(|lane| lane.project(point))
    }

    /// Centerline heading at the projection of `point` onto the lane.
    pub fn path_heading(&self, handle: LaneHandle, point: Point2) -> Option<f64> {
        self.map.lane(handle).map(|lane| lane.path_heading(point))
    }

    /// Map-frame position and heading for lane-frame coordinates `(s, l)`:
    /// the centerline point at `s`, displaced `l` metres to its left
    /// (negative `l` → right).
    pub fn smooth_point_from_lane(&self, id: &str, s: f64, l: f64) -> Option<(Point2, f64)> {
        let lane = self.map.lane_by_id(id)?;
        let lp = lane.sample_at(s);
        let left = Point2::new(-lp.heading.sin(), lp.heading.cos());
        Some((lp.pos + left.scale(l), lp.heading))
    }

    /// Turn classification by string id, with the Straight default for
    /// unresolvable ids.
    #[inline]
    pub fn lane_turn_type(&self, id: &str) -> TurnType {
        self.map.lane_turn_type(id)
    }

    // ── Internal ──────────────────────────────────────────────────────────

    fn heading_matches(&self, lane: &Lane, point: Point2, heading: f64) -> bool {
        angle_diff(lane.path_heading(point), heading).abs() <= self.cfg.max_heading_diff
    }
}
