//! Per-session participant location state.

use std::sync::OnceLock;

use crate::coords::Coordinate;
use crate::tables;

/// A participant's address fields plus the session-scoped resolution cache.
///
/// The resolved slot settles exactly once per address revision: the first
/// resolution writes it — even when resolution fails, so an unresolvable
/// address is not retried on every search — and later reads reuse the
/// settled value. Editing any address field replaces the slot, which is
/// what permits re-resolution after an address change. `OnceLock` keeps the
/// single-writer invariant intact if a caller moves to multiple threads.
#[derive(Debug, Default)]
pub struct ParticipantLocation {
    street: Option<String>,
    city: Option<String>,
    state: Option<String>,
    zip: Option<String>,
    resolved: OnceLock<Option<Coordinate>>,
}

impl ParticipantLocation {
    #[must_use]
    pub fn new(
        street: Option<String>,
        city: Option<String>,
        state: Option<String>,
        zip: Option<String>,
    ) -> Self {
        Self {
            street: non_empty(street),
            city: non_empty(city),
            state: non_empty(state),
            zip: non_empty(zip),
            resolved: OnceLock::new(),
        }
    }

    #[must_use]
    pub fn street(&self) -> Option<&str> {
        self.street.as_deref()
    }

    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    #[must_use]
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    #[must_use]
    pub fn zip(&self) -> Option<&str> {
        self.zip.as_deref()
    }

    pub fn set_street(&mut self, street: Option<String>) {
        self.street = non_empty(street);
        self.resolved = OnceLock::new();
    }

    pub fn set_city(&mut self, city: Option<String>) {
        self.city = non_empty(city);
        self.resolved = OnceLock::new();
    }

    pub fn set_state(&mut self, state: Option<String>) {
        self.state = non_empty(state);
        self.resolved = OnceLock::new();
    }

    pub fn set_zip(&mut self, zip: Option<String>) {
        self.zip = non_empty(zip);
        self.resolved = OnceLock::new();
    }

    /// True when street, city, and state are all present — the minimum an
    /// external geocoder needs to be reliable.
    #[must_use]
    pub fn has_full_address(&self) -> bool {
        self.street.is_some() && self.city.is_some() && self.state.is_some()
    }

    /// The settled resolution outcome, if resolution has run for the
    /// current address fields. The outer `Option` distinguishes "not yet
    /// resolved" from a settled "resolved to nothing".
    #[must_use]
    pub fn cached(&self) -> Option<Option<Coordinate>> {
        self.resolved.get().copied()
    }

    /// Settles the resolution slot, returning the value that actually
    /// stuck. A slot that already settled keeps its first value.
    pub fn settle(&self, outcome: Option<Coordinate>) -> Option<Coordinate> {
        *self.resolved.get_or_init(|| outcome)
    }

    /// Table-only resolution of the participant's own fields: zip centroid
    /// first, then city. Used as the non-network fallback when geocoding is
    /// unavailable or fails, and as the whole chain when no street address
    /// exists.
    #[must_use]
    pub fn fallback_coordinate(&self) -> Option<Coordinate> {
        self.zip
            .as_deref()
            .and_then(tables::lookup_zip)
            .or_else(|| self.city.as_deref().and_then(tables::lookup_city))
    }
}

/// Treats empty and whitespace-only strings as absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
