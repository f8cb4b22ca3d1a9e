//! Nearest-point search over a candidate set.
//!
//! A deliberate full linear scan: no index, no pruning, no early exit. The
//! candidate set is supplied by the caller per call and never cached.

use crate::{haversine_distance, Coordinate};
use serde::{Deserialize, Serialize};

/// The winning candidate of a nearest-point search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NearestMatch {
    /// The closest candidate
    pub coordinate: Coordinate,
    /// Its great-circle distance to the target in kilometers
    pub distance: f64,
}

/// Finds the candidate closest to `target` by great-circle distance.
///
/// Scans `candidates` in order, keeping the current best under strict `<`
/// comparison: a later candidate at an equal distance never replaces an
/// earlier one. Runs in O(n) time and O(1) extra memory, and returns `None`
/// for an empty candidate slice.
///
/// # Example
/// ```
/// use waypoint_geo::{nearest, Coordinate};
///
/// let new_york = Coordinate::new(40.7128, -74.0060);
/// let candidates = [
///     Coordinate::new(37.7749, -122.4194), // San Francisco
///     Coordinate::new(34.0522, -118.2437), // Los Angeles
/// ];
///
/// let winner = nearest(&new_york, &candidates).unwrap();
/// assert_eq!(winner.coordinate, candidates[1]);
/// ```
#[must_use]
pub fn nearest(target: &Coordinate, candidates: &[Coordinate]) -> Option<NearestMatch> {
    let mut best: Option<NearestMatch> = None;

    for candidate in candidates {
        let distance = haversine_distance(target, candidate);
        let better = match &best {
            Some(current) => distance < current.distance,
            None => true,
        };
        if better {
            best = Some(NearestMatch {
                coordinate: *candidate,
                distance,
            });
        }
    }

    best
}
