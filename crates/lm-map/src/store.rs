//! Lane arena, id interning, and spatial lookup.
//!
//! # Data layout
//!
//! Lanes live in a single `Vec<Lane>` indexed by `LaneHandle` — shared,
//! read-only access with no per-query copying.  A `FxHashMap<LaneId,
//! LaneHandle>` interns the map store's string ids once, at build time.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) over every centerline sample point answers "which
//! lanes pass near P".  Because the index holds discrete samples rather than
//! segments, radius queries are padded by the map-wide maximum sample
//! spacing before the exact polyline-distance check, so a lane whose
//! centerline passes between two samples is never missed.
//!
//! # Immutability
//!
//! `LaneMap` never mutates after `build()`; it is `Send + Sync` and safe to
//! query from any number of threads.  Swapping in a freshly loaded map is
//! the caller's concern (e.g. an `Arc<LaneMap>` replaced atomically) —
//! readers must see either the whole old map or the whole new one.

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rustc_hash::{FxHashMap, FxHashSet};

use lm_core::{LaneHandle, LaneId, Point2, TurnType};

use crate::error::{MapError, MapResult};
use crate::lane::{CenterlineSample, Lane};

// ── R-tree sample entry ───────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: one centerline sample point and
/// the lane it belongs to.
#[derive(Clone)]
struct SampleEntry {
    point: [f64; 2],
    lane: LaneHandle,
}

impl RTreeObject for SampleEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for SampleEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── LaneMap ───────────────────────────────────────────────────────────────────

/// The loaded, immutable lane map: arena + id table + spatial index.
///
/// Do not construct directly; use [`LaneMapBuilder`].
pub struct LaneMap {
    lanes: Vec<Lane>,
    by_id: FxHashMap<LaneId, LaneHandle>,
    spatial_idx: RTree<SampleEntry>,
    /// Largest gap between consecutive samples of any lane; pads radius
    /// queries against the sample-point index.
    max_sample_spacing: f64,
}

impl LaneMap {
    /// A map with no lanes.  Every lookup returns absence, every spatial
    /// query returns empty.
    pub fn empty() -> Self {
        Self {
            lanes: Vec::new(),
            by_id: FxHashMap::default(),
            spatial_idx: RTree::new(),
            max_sample_spacing: 0.0,
        }
    }

    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// Resolve an arena handle.  `None` only for a handle that never came
    /// from this map (stale or `INVALID`).
    #[inline]
    pub fn lane(&self, handle: LaneHandle) -> Option<&Lane> {
        self.lanes.get(handle.index())
    }

    /// Resolve a map-store string id.  Absence is a normal outcome for
    /// never-seen or malformed ids, not an error.
    #[inline]
    pub fn lane_by_id(&self, id: &str) -> Option<&Lane> {
        self.handle_of(id).and_then(|h| self.lane(h))
    }

    #[inline]
    pub fn handle_of(&self, id: &str) -> Option<LaneHandle> {
        self.by_id.get(id).copied()
    }

    /// Iterate all lanes in handle order.
    pub fn lanes(&self) -> impl Iterator<Item = &Lane> {
        self.lanes.iter()
    }

    /// Turn classification for a lane id; unresolvable ids yield the
    /// [`TurnType::Straight`] default so downstream consumers always get a
    /// usable value.
    pub fn lane_turn_type(&self, id: &str) -> TurnType {
        self.lane_by_id(id).map(|l| l.turn()).unwrap_or_default()
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Handles of all lanes whose centerline passes within `radius` of `p`,
    /// sorted ascending for determinism.
    pub fn lanes_near(&self, p: Point2, radius: f64) -> Vec<LaneHandle> {
        let pad = radius + self.max_sample_spacing;
        let mut seen: FxHashSet<LaneHandle> = FxHashSet::default();
        for entry in self
            .spatial_idx
            .locate_within_distance([p.x, p.y], pad * pad)
        {
            seen.insert(entry.lane);
        }
        let mut near: Vec<LaneHandle> = seen
            .into_iter()
            .filter(|&h| {
                self.lane(h)
                    .is_some_and(|lane| lane.distance_to(p) <= radius)
            })
            .collect();
        near.sort_unstable();
        near
    }
}

// ── LaneSpec ──────────────────────────────────────────────────────────────────

/// One lane record as handed over by the external map store: raw centerline
/// samples plus topology edges as string ids.  Topology ids are resolved to
/// handles at build time; ids that resolve to nothing are silently dropped.
#[derive(Clone, Debug)]
pub struct LaneSpec {
    pub id: LaneId,
    pub samples: Vec<CenterlineSample>,
    pub predecessors: Vec<LaneId>,
    pub successors: Vec<LaneId>,
    pub left_neighbors: Vec<LaneId>,
    pub right_neighbors: Vec<LaneId>,
    pub turn: TurnType,
}

impl LaneSpec {
    pub fn new(id: impl Into<LaneId>, samples: Vec<CenterlineSample>) -> Self {
        Self {
            id: id.into(),
            samples,
            predecessors: Vec::new(),
            successors: Vec::new(),
            left_neighbors: Vec::new(),
            right_neighbors: Vec::new(),
            turn: TurnType::default(),
        }
    }

    /// Build a spec from raw polyline points and a constant width: `s` is
    /// accumulated chord length, each sample's heading is its outgoing
    /// segment direction (the last sample keeps the final segment's).
    pub fn from_polyline(id: impl Into<LaneId>, points: &[Point2], width: f64) -> Self {
        let mut samples = Vec::with_capacity(points.len());
        let mut s = 0.0;
        for (i, &pos) in points.iter().enumerate() {
            if i > 0 {
                s += points[i - 1].distance(pos);
            }
            // Outgoing segment direction; the last sample keeps the final
            // segment's.  A degenerate (< 2 point) polyline is rejected by
            // `build()`, not here.
            let dir = if i + 1 < points.len() {
                points[i + 1] - pos
            } else if i > 0 {
                pos - points[i - 1]
            } else {
                Point2::new(1.0, 0.0)
            };
            samples.push(CenterlineSample {
                s,
                pos,
                heading: dir.y.atan2(dir.x),
                width,
            });
        }
        Self::new(id, samples)
    }

    pub fn with_predecessors(mut self, ids: &[&str]) -> Self {
        self.predecessors = ids.iter().map(|&s| LaneId::from(s)).collect();
        self
    }

    pub fn with_successors(mut self, ids: &[&str]) -> Self {
        self.successors = ids.iter().map(|&s| LaneId::from(s)).collect();
        self
    }

    pub fn with_left_neighbors(mut self, ids: &[&str]) -> Self {
        self.left_neighbors = ids.iter().map(|&s| LaneId::from(s)).collect();
        self
    }

    pub fn with_right_neighbors(mut self, ids: &[&str]) -> Self {
        self.right_neighbors = ids.iter().map(|&s| LaneId::from(s)).collect();
        self
    }

    pub fn with_turn(mut self, turn: TurnType) -> Self {
        self.turn = turn;
        self
    }
}

// ── LaneMapBuilder ────────────────────────────────────────────────────────────

/// Accumulate [`LaneSpec`]s in any order, then call [`build`](Self::build).
///
/// `build()` validates every centerline (≥ 2 samples, first `s` = 0,
/// strictly increasing `s`, non-negative widths), interns ids, resolves
/// topology edges, and bulk-loads the R-tree.  Handles are assigned in
/// insertion order.
pub struct LaneMapBuilder {
    specs: Vec<LaneSpec>,
}

impl LaneMapBuilder {
    pub fn new() -> Self {
        Self { specs: Vec::new() }
    }

    pub fn with_capacity(lanes: usize) -> Self {
        Self { specs: Vec::with_capacity(lanes) }
    }

    /// Add one lane record.  Validation happens in `build()`, so records can
    /// reference lanes that have not been added yet.
    pub fn add_lane(&mut self, spec: LaneSpec) -> &mut Self {
        self.specs.push(spec);
        self
    }

    pub fn lane_count(&self) -> usize {
        self.specs.len()
    }

    /// Consume the builder and produce a [`LaneMap`].
    ///
    /// # Errors
    ///
    /// Rejects duplicate ids and centerlines violating the sample
    /// invariants.  Unresolvable *topology* ids are not errors — they are
    /// dropped, matching the query-time contract that an unresolvable
    /// reference is simply absent.
    pub fn build(self) -> MapResult<LaneMap> {
        // Pass 1: validate geometry and intern ids.
        let mut by_id: FxHashMap<LaneId, LaneHandle> = FxHashMap::default();
        for (i, spec) in self.specs.iter().enumerate() {
            validate_samples(&spec.id, &spec.samples)?;
            let handle = LaneHandle(i as u32);
            if by_id.insert(spec.id.clone(), handle).is_some() {
                return Err(MapError::DuplicateLane(spec.id.clone()));
            }
        }

        // Pass 2: resolve topology and freeze lanes.
        let resolve = |ids: &[LaneId]| -> Vec<LaneHandle> {
            ids.iter()
                .filter_map(|id| by_id.get(id.as_str()).copied())
                .collect()
        };
        let mut max_sample_spacing = 0.0f64;
        let mut lanes = Vec::with_capacity(self.specs.len());
        for (i, spec) in self.specs.iter().enumerate() {
            for pair in spec.samples.windows(2) {
                max_sample_spacing = max_sample_spacing.max(pair[0].pos.distance(pair[1].pos));
            }
            lanes.push(Lane {
                handle: LaneHandle(i as u32),
                id: spec.id.clone(),
                samples: spec.samples.clone(),
                predecessors: resolve(&spec.predecessors),
                successors: resolve(&spec.successors),
                left_neighbors: resolve(&spec.left_neighbors),
                right_neighbors: resolve(&spec.right_neighbors),
                turn: spec.turn,
            });
        }

        // Bulk-load the R-tree: O(N log N), faster than N inserts.
        let entries: Vec<SampleEntry> = lanes
            .iter()
            .flat_map(|lane| {
                lane.samples.iter().map(|smp| SampleEntry {
                    point: [smp.pos.x, smp.pos.y],
                    lane: lane.handle,
                })
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        Ok(LaneMap { lanes, by_id, spatial_idx, max_sample_spacing })
    }
}

impl Default for LaneMapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_samples(id: &LaneId, samples: &[CenterlineSample]) -> MapResult<()> {
    if samples.len() < 2 {
        return Err(MapError::TooFewSamples { id: id.clone(), got: samples.len() });
    }
    if samples[0].s != 0.0 {
        return Err(MapError::NonZeroStart { id: id.clone(), s: samples[0].s });
    }
    for (index, smp) in samples.iter().enumerate() {
        if smp.width < 0.0 {
            return Err(MapError::NegativeWidth { id: id.clone(), index, width: smp.width });
        }
        if index > 0 && smp.s <= samples[index - 1].s {
            return Err(MapError::NonIncreasingArcLength { id: id.clone(), index });
        }
    }
    Ok(())
}
