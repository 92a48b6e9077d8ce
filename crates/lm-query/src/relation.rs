//! Pairwise lane-relation predicates.
//!
//! Five questions about a candidate lane versus a reference set: left
//! neighbor, right neighbor, successor, predecessor, identical.
//!
//! # Vacuous truth
//!
//! Every predicate returns `true` for an **empty** reference set.  This is
//! deliberate and load-bearing: downstream filters treat "no prior context"
//! as "no constraint", and the first tracking frame of every object goes
//! through that path.  Do not tighten it.
//!
//! # Unresolvable handles
//!
//! A reference handle that does not resolve is skipped — absent from the set
//! for that query, not an error.  A candidate that does not resolve matches
//! nothing (unless the reference set is empty, per the rule above).
//!
//! # Symmetry and bounds
//!
//! The map store may record a lateral adjacency on only one side, so the
//! left/right predicates check both directions: `lane` in a reference's
//! left-neighbor set, or the reference in `lane`'s right-neighbor set.
//! Succession is a bounded transitive closure — breadth-first over
//! successor (resp. predecessor) edges, at most
//! [`max_relation_hops`](crate::QueryConfig::max_relation_hops) deep.

use rustc_hash::FxHashSet;

use lm_core::LaneHandle;

use crate::engine::LaneQuery;

enum Side {
    Left,
    Right,
}

impl LaneQuery<'_> {
    /// Is `lane` the same lane as some reference?
    pub fn is_identical(&self, lane: LaneHandle, refs: &[LaneHandle]) -> bool {
        if refs.is_empty() {
            return true;
        }
        self.map().lane(lane).is_some() && refs.contains(&lane)
    }

    /// Is `lane` laterally adjacent on the left of some reference?
    pub fn is_left_neighbor(&self, lane: LaneHandle, refs: &[LaneHandle]) -> bool {
        self.is_lateral_neighbor(lane, refs, Side::Left)
    }

    /// Is `lane` laterally adjacent on the right of some reference?
    pub fn is_right_neighbor(&self, lane: LaneHandle, refs: &[LaneHandle]) -> bool {
        self.is_lateral_neighbor(lane, refs, Side::Right)
    }

    /// Is `lane` reachable from some reference by following successor edges
    /// forward, within the hop bound?
    pub fn is_successor(&self, lane: LaneHandle, refs: &[LaneHandle]) -> bool {
        self.reachable(lane, refs, true)
    }

    /// Is `lane` reachable from some reference by following predecessor
    /// edges backward, within the hop bound?
    pub fn is_predecessor(&self, lane: LaneHandle, refs: &[LaneHandle]) -> bool {
        self.reachable(lane, refs, false)
    }

    fn is_lateral_neighbor(&self, lane: LaneHandle, refs: &[LaneHandle], side: Side) -> bool {
        if refs.is_empty() {
            return true;
        }
        let Some(cand) = self.map().lane(lane) else {
            return false;
        };
        refs.iter()
            .filter_map(|&r| self.map().lane(r))
            .any(|r| match side {
                Side::Left => {
                    r.left_neighbors().contains(&lane)
                        || cand.right_neighbors().contains(&r.handle())
                }
                Side::Right => {
                    r.right_neighbors().contains(&lane)
                        || cand.left_neighbors().contains(&r.handle())
                }
            })
    }

    /// Bounded BFS over topology edges.  Identity does not count: a lane is
    /// not its own successor unless the map contains an actual cycle.
    fn reachable(&self, target: LaneHandle, refs: &[LaneHandle], forward: bool) -> bool {
        if refs.is_empty() {
            return true;
        }
        if self.map().lane(target).is_none() {
            return false;
        }

        let mut visited: FxHashSet<LaneHandle> = refs
            .iter()
            .copied()
            .filter(|&h| self.map().lane(h).is_some())
            .collect();
        let mut frontier: Vec<LaneHandle> = visited.iter().copied().collect();

        for _ in 0..self.config().max_relation_hops {
            let mut next = Vec::new();
            for &h in &frontier {
                let Some(lane) = self.map().lane(h) else {
                    continue;
                };
                let edges = if forward { lane.successors() } else { lane.predecessors() };
                for &e in edges {
                    if e == target {
                        return true;
                    }
                    if visited.insert(e) {
                        next.push(e);
                    }
                }
            }
            if next.is_empty() {
                break;
            }
            frontier = next;
        }
        false
    }
}
