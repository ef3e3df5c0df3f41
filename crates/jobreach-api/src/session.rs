//! Search session state with request sequencing.

use crate::query::SearchQuery;
use crate::types::{JobRecord, SearchResults};

/// Mutable per-session search state: the active query, the most recently
/// accepted result set, and the generation counter that serializes
/// competing in-flight searches.
///
/// The host UI fires a new search without cancelling the previous one, so
/// without sequencing whichever response resolved last would win — a stale
/// result set could overwrite a fresher one. Generations close that hole:
/// [`SearchSession::begin_search`] stamps each request, and
/// [`SearchSession::accept`] installs a result set only while its stamp is
/// still current.
#[derive(Debug, Default)]
pub struct SearchSession {
    pub query: SearchQuery,
    jobs: Vec<JobRecord>,
    total_count: u32,
    total_pages: u32,
    generation: u64,
}

impl SearchSession {
    #[must_use]
    pub fn new(query: SearchQuery) -> Self {
        Self {
            query,
            ..Self::default()
        }
    }

    /// Stamps a new search attempt. The returned generation must be passed
    /// back to [`SearchSession::accept`] with the response; any previously
    /// issued stamp becomes stale immediately.
    pub fn begin_search(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Installs a result set if `generation` is still current. Returns
    /// whether the results were accepted; a stale response is dropped and
    /// the session state is left untouched.
    pub fn accept(&mut self, generation: u64, results: SearchResults) -> bool {
        if generation != self.generation {
            tracing::debug!(
                stale = generation,
                current = self.generation,
                "discarding superseded search response"
            );
            return false;
        }
        self.jobs = results.jobs;
        self.total_count = results.total_count;
        self.total_pages = results.total_pages.max(1);
        true
    }

    #[must_use]
    pub fn jobs(&self) -> &[JobRecord] {
        &self.jobs
    }

    /// Takes the accepted jobs out of the session, e.g. for annotation.
    pub fn take_jobs(&mut self) -> Vec<JobRecord> {
        std::mem::take(&mut self.jobs)
    }

    #[must_use]
    pub fn total_count(&self) -> u32 {
        self.total_count
    }

    #[must_use]
    pub fn total_pages(&self) -> u32 {
        self.total_pages.max(1)
    }

    /// Advances to the next page if one exists. Returns whether the page
    /// changed; the caller re-runs the search on `true`.
    pub fn next_page(&mut self) -> bool {
        if self.query.page < self.total_pages() {
            self.query.page += 1;
            return true;
        }
        false
    }

    /// Steps back to the previous page if one exists.
    pub fn prev_page(&mut self) -> bool {
        if self.query.page > 1 {
            self.query.page -= 1;
            return true;
        }
        false
    }
}
