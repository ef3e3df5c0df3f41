//! Participant-to-job distance computation.

use crate::coords::{distance_miles, Coordinate};
use crate::resolve::{resolve, LocationHint};

/// Distance in miles between a resolved participant and a job's best
/// available coordinate.
///
/// `None` when either side is unresolved: the participant never resolved to
/// a coordinate, or the job carries no usable location data. Pure with
/// respect to its inputs — calling it repeatedly for the same job and the
/// same participant coordinate is deterministic and side-effect-free.
#[must_use]
pub fn job_distance(participant: Option<Coordinate>, job: &LocationHint<'_>) -> Option<f64> {
    let origin = participant?;
    let target = resolve(job)?;
    Some(distance_miles(origin, target))
}
