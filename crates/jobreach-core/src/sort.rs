//! Ordering helpers for distance-sorted result sets.

use std::cmp::Ordering;

/// Compares optional distances ascending, with absent values always last.
///
/// An unknown distance means "unknown", not "infinitely far", for display —
/// but for ordering it compares as +infinity so unresolved jobs land at the
/// end of the list. Two absent distances compare equal, which keeps their
/// relative order stable under a stable sort.
#[must_use]
pub fn cmp_distance(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Compares optional distances descending; absent values still sort last.
///
/// Reversing [`cmp_distance`] wholesale would float the unknowns to the
/// front, so only the numeric branch flips.
#[must_use]
pub fn cmp_distance_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
