//! Result-set distance annotation and ordering.

use std::cmp::Ordering;

use jobreach_core::{cmp_distance, job_distance, Coordinate};

use crate::types::JobRecord;

/// A job plus its computed distance, valid for the lifetime of one result
/// set. Distances are recomputed whenever the participant coordinate or
/// the result set changes; nothing is persisted on the job itself.
#[derive(Debug, Clone)]
pub struct JobHit {
    pub job: JobRecord,
    pub distance: Option<f64>,
}

/// Computes distances for a whole result set in one synchronous pass.
///
/// No per-job network calls happen here: the participant side is already
/// resolved (or known absent), and each job side comes from the job's own
/// fields and the static reference tables.
#[must_use]
pub fn annotate_distances(participant: Option<Coordinate>, jobs: Vec<JobRecord>) -> Vec<JobHit> {
    jobs.into_iter()
        .map(|job| {
            let distance = job_distance(participant, &job.location_hint());
            JobHit { job, distance }
        })
        .collect()
}

/// Sort order for a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Newest first; jobs with no parseable posted date sort last.
    #[default]
    Date,
    Title,
    Company,
    /// Nearest first; jobs with unknown distance sort last.
    Distance,
}

/// Sorts hits in place. All orderings are stable, so ties — including
/// unknown distances — keep their API-returned order.
pub fn sort_hits(hits: &mut [JobHit], sort_by: SortBy) {
    match sort_by {
        SortBy::Date => hits.sort_by(|a, b| b.job.posted_at().cmp(&a.job.posted_at())),
        SortBy::Title => {
            hits.sort_by(|a, b| cmp_str(a.job.title.as_deref(), b.job.title.as_deref()));
        }
        SortBy::Company => {
            hits.sort_by(|a, b| cmp_str(a.job.company.as_deref(), b.job.company.as_deref()));
        }
        SortBy::Distance => hits.sort_by(|a, b| cmp_distance(a.distance, b.distance)),
    }
}

fn cmp_str(a: Option<&str>, b: Option<&str>) -> Ordering {
    a.unwrap_or_default()
        .to_lowercase()
        .cmp(&b.unwrap_or_default().to_lowercase())
}
