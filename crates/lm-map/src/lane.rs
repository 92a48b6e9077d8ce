//! Lane record, centerline sampling, and point projection.
//!
//! # Geometry conventions
//!
//! A lane's reference path is the ordered polyline of its centerline
//! samples.  Arc length `s` starts at 0 on the first sample and is strictly
//! increasing.  Lateral offset `l` is **left-positive**: a point to the left
//! of the direction of travel has `l > 0`.
//!
//! # Extrapolation policy
//!
//! Sampling and projection both extend the path as a straight line beyond
//! either physical end:
//!
//! - `s > total_s`: position advances along the final sample's heading by
//!   `s - total_s`; heading stays at the final heading; **width freezes** at
//!   the final sample's value.
//! - `s < 0`: mirrored using the first sample.
//!
//! The asymmetry (linear position, frozen width) is the map store's own
//! convention and must not be "fixed".  Projection selects end segments
//! without clamping the along-segment fraction, so
//! `sample_at(project(p).0)` recovers the same extended line.

use lm_core::{lerp_angle, LaneHandle, LaneId, Point2, TurnType};

// ── Samples ───────────────────────────────────────────────────────────────────

/// One point of a lane's reference path.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CenterlineSample {
    /// Accumulated arc length from the lane start, metres.  `>= 0`, strictly
    /// increasing within a lane, `0` on the first sample.
    pub s: f64,
    /// Position in the projected map frame.
    pub pos: Point2,
    /// Direction of travel at this sample, radians CCW from +x.
    pub heading: f64,
    /// Total lane width at this sample, metres.  `>= 0`.
    pub width: f64,
}

/// The result of sampling a lane at an arc-length offset: where the
/// centerline is, which way it points, and how wide the lane is there.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LanePoint {
    pub pos: Point2,
    pub heading: f64,
    pub width: f64,
}

// ── Lane ──────────────────────────────────────────────────────────────────────

/// An immutable lane record: centerline geometry plus resolved topology
/// edges.
///
/// Built only by [`LaneMapBuilder`](crate::LaneMapBuilder), which guarantees
/// at least two samples and the arc-length invariants, so the geometry
/// methods below never need to signal absence.  Topology edges are stored as
/// [`LaneHandle`]s resolved at build time; ids that did not resolve were
/// dropped there (an unresolvable reference is "not present," not an error).
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lane {
    pub(crate) handle: LaneHandle,
    pub(crate) id: LaneId,
    pub(crate) samples: Vec<CenterlineSample>,
    pub(crate) predecessors: Vec<LaneHandle>,
    pub(crate) successors: Vec<LaneHandle>,
    pub(crate) left_neighbors: Vec<LaneHandle>,
    pub(crate) right_neighbors: Vec<LaneHandle>,
    pub(crate) turn: TurnType,
}

impl Lane {
    #[inline]
    pub fn handle(&self) -> LaneHandle {
        self.handle
    }

    #[inline]
    pub fn id(&self) -> &LaneId {
        &self.id
    }

    #[inline]
    pub fn samples(&self) -> &[CenterlineSample] {
        &self.samples
    }

    #[inline]
    pub fn predecessors(&self) -> &[LaneHandle] {
        &self.predecessors
    }

    #[inline]
    pub fn successors(&self) -> &[LaneHandle] {
        &self.successors
    }

    #[inline]
    pub fn left_neighbors(&self) -> &[LaneHandle] {
        &self.left_neighbors
    }

    #[inline]
    pub fn right_neighbors(&self) -> &[LaneHandle] {
        &self.right_neighbors
    }

    #[inline]
    pub fn turn(&self) -> TurnType {
        self.turn
    }

    /// Arc length of the whole lane (the last sample's `s`).
    #[inline]
    pub fn total_s(&self) -> f64 {
        self.samples[self.samples.len() - 1].s
    }

    // ── Sampling ──────────────────────────────────────────────────────────

    /// Position, heading, and width at arc-length offset `s`.
    ///
    /// Within `[0, total_s]`, position and width are linearly interpolated
    /// between the bracketing samples and heading is interpolated along the
    /// shortest arc.  Outside that range the path is extended per the module
    /// extrapolation policy.  A valid lane yields a sample for any finite
    /// `s`.
    pub fn sample_at(&self, s: f64) -> LanePoint {
        let last = self.samples[self.samples.len() - 1];
        if s >= last.s {
            return LanePoint {
                pos: last.pos + Point2::from_heading(last.heading).scale(s - last.s),
                heading: last.heading,
                width: last.width,
            };
        }
        let first = self.samples[0];
        if s <= first.s {
            return LanePoint {
                pos: first.pos + Point2::from_heading(first.heading).scale(s - first.s),
                heading: first.heading,
                width: first.width,
            };
        }

        // Invariant: first.s < s < last.s, so 1 <= hi <= len - 1.
        let hi = self.samples.partition_point(|smp| smp.s <= s);
        let a = self.samples[hi - 1];
        let b = self.samples[hi];
        let t = (s - a.s) / (b.s - a.s);
        LanePoint {
            pos: a.pos + (b.pos - a.pos).scale(t),
            heading: lerp_angle(a.heading, b.heading, t),
            width: a.width + (b.width - a.width) * t,
        }
    }

    /// Centerline position at `s`.
    #[inline]
    pub fn position_at(&self, s: f64) -> Point2 {
        self.sample_at(s).pos
    }

    /// Direction of travel at `s`.
    #[inline]
    pub fn heading_at(&self, s: f64) -> f64 {
        self.sample_at(s).heading
    }

    /// Total lane width at `s`.
    #[inline]
    pub fn width_at(&self, s: f64) -> f64 {
        self.sample_at(s).width
    }

    // ── Projection ────────────────────────────────────────────────────────

    /// Project `p` onto the lane's reference path, returning `(s, l)`.
    ///
    /// `s` is the arc length of the foot of the projection — negative when
    /// `p` lies before the lane start, greater than `total_s` when past the
    /// end.  `l` is the signed perpendicular distance to the selected
    /// segment's line, left-positive.
    pub fn project(&self, p: Point2) -> (f64, f64) {
        let hit = self.scan_segments(p, false);
        let a = self.samples[hit.seg];
        let b = self.samples[hit.seg + 1];
        let d = b.pos - a.pos;
        let s = a.s + hit.t * (b.s - a.s);
        let l = d.scale(1.0 / d.norm()).cross(p - a.pos);
        (s, l)
    }

    /// Nearest point on the (non-extended) polyline, and its distance to
    /// `p`.  Unlike [`project`](Self::project), the result never leaves the
    /// lane's physical extent.
    pub fn nearest_point(&self, p: Point2) -> (Point2, f64) {
        let hit = self.scan_segments(p, true);
        (hit.foot, hit.dist_sq.sqrt())
    }

    /// Distance from `p` to the lane's reference path.
    #[inline]
    pub fn distance_to(&self, p: Point2) -> f64 {
        self.nearest_point(p).1
    }

    /// Direction of travel at the projection of `p` onto the lane.
    pub fn path_heading(&self, p: Point2) -> f64 {
        let (s, _) = self.project(p);
        self.heading_at(s)
    }

    /// Walk all segments, tracking the one whose foot of projection is
    /// closest to `p`.  Interior segments clamp the along-segment fraction
    /// to `[0, 1]`; when `clamp_ends` is false the first segment admits
    /// `t < 0` and the last admits `t > 1`, extending the path as a line.
    fn scan_segments(&self, p: Point2, clamp_ends: bool) -> SegmentHit {
        let nseg = self.samples.len() - 1;
        let mut best = SegmentHit {
            seg: 0,
            t: 0.0,
            foot: self.samples[0].pos,
            dist_sq: f64::INFINITY,
        };
        for seg in 0..nseg {
            let a = self.samples[seg].pos;
            let b = self.samples[seg + 1].pos;
            let d = b - a;
            let len_sq = d.norm_sq();
            if len_sq == 0.0 {
                continue;
            }
            let mut t = (p - a).dot(d) / len_sq;
            if clamp_ends || seg > 0 {
                t = t.max(0.0);
            }
            if clamp_ends || seg + 1 < nseg {
                t = t.min(1.0);
            }
            let foot = a + d.scale(t);
            let dist_sq = p.distance_sq(foot);
            if dist_sq < best.dist_sq {
                best = SegmentHit { seg, t, foot, dist_sq };
            }
        }
        best
    }
}

struct SegmentHit {
    seg: usize,
    t: f64,
    foot: Point2,
    dist_sq: f64,
}
