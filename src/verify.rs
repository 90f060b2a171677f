//! Plane Verification
//!
//! Independent checks over any list of points, not just a full plane:
//! 1. no pair of lines occurs on two different points
//! 2. every two distinct points share exactly one line
//!
//! The checks read their input only. The cost is `O(n² · k)` for `n` points of
//! `k` lines each.

use std::collections::{HashMap, HashSet};

use rayon::prelude::*;

use crate::pair::Pair;
use crate::point::PlanePoint;
use crate::Line;

/// Outcome of a detailed verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification<L> {
    Valid,
    /// `pair` already appeared on an earlier point than `point`
    DuplicatePair { point: usize, pair: Pair<L> },
    /// Points `left` and `right` share `shared` lines instead of one
    IntersectionMismatch { left: usize, right: usize, shared: usize },
}

impl<L> Verification<L> {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verification::Valid)
    }
}

/// Verify that each pair of points has exactly one line in common and that no
/// line pair is repeated across points.
pub fn verify_point_lines<L: Line>(points: &[PlanePoint<L>]) -> bool {
    verify_detailed(points).is_valid()
}

/// Same as [`verify_point_lines`], reporting the first violation found.
///
/// Points are visited in order. Each point's pairs are checked before its
/// intersections with the points after it.
pub fn verify_detailed<L: Line>(points: &[PlanePoint<L>]) -> Verification<L> {
    let mut assigned_pairs: HashSet<Pair<L>> = HashSet::new();

    for (i, left) in points.iter().enumerate() {
        for pair in left.get_all_pairs() {
            if assigned_pairs.contains(&pair) {
                return Verification::DuplicatePair { point: i, pair };
            }
            assigned_pairs.insert(pair);
        }

        for (j, right) in points.iter().enumerate().skip(i + 1) {
            let shared = left.shared_with(right);
            if shared != 1 {
                return Verification::IntersectionMismatch { left: i, right: j, shared };
            }
        }
    }

    Verification::Valid
}

/// Parallel [`verify_point_lines`]. The pair-uniqueness pass stays serial; the
/// pairwise intersection pass is split across threads.
pub fn verify_point_lines_par<L: Line + Send + Sync>(points: &[PlanePoint<L>]) -> bool {
    let mut assigned_pairs: HashSet<Pair<L>> = HashSet::new();
    for point in points {
        for pair in point.get_all_pairs() {
            if !assigned_pairs.insert(pair) {
                return false;
            }
        }
    }

    (0..points.len()).into_par_iter().all(|i| {
        points[i + 1..]
            .iter()
            .all(|right| points[i].shared_with(right) == 1)
    })
}

/// How many of the given points hold each line
pub fn line_multiplicities<L: Line>(points: &[PlanePoint<L>]) -> HashMap<L, usize> {
    let mut counts = HashMap::new();
    for point in points {
        for line in &point.lines {
            *counts.entry(line.clone()).or_insert(0) += 1;
        }
    }
    counts
}
