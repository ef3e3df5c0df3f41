//! Job-search API response types.
//!
//! The endpoint wraps every response in a `{ "success": bool, … }` envelope
//! with camelCase fields. Deserialization is deliberately tolerant: job
//! records vary by source, so everything beyond the envelope flags is
//! optional.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use jobreach_core::{Coordinate, LocationHint};

/// Top-level envelope for a search response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub success: bool,
    #[serde(default)]
    pub jobs: Vec<JobRecord>,
    #[serde(default)]
    pub total_count: u32,
    #[serde(default = "default_total_pages")]
    pub total_pages: u32,
    #[serde(default)]
    pub message: Option<String>,
}

fn default_total_pages() -> u32 {
    1
}

/// A successfully fetched page of results, with the envelope stripped.
#[derive(Debug, Clone)]
pub struct SearchResults {
    pub jobs: Vec<JobRecord>,
    pub total_count: u32,
    pub total_pages: u32,
}

/// A single job listing as returned by the search endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub job_number: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub employment_type: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Free-text location, e.g. `"Atlanta, Georgia, USA"`.
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub salary_min: Option<f64>,
    #[serde(default)]
    pub salary_max: Option<f64>,
    #[serde(default)]
    pub remote_friendly: bool,
    #[serde(default)]
    pub posted_date: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
}

impl JobRecord {
    /// Adapts this record to the core resolver's input. The job's own
    /// coordinate pair (when the source supplies both halves) outranks its
    /// zip, city, and free-text location, in that order.
    #[must_use]
    pub fn location_hint(&self) -> LocationHint<'_> {
        let coordinate = match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(Coordinate { lat, lng }),
            _ => None,
        };
        LocationHint {
            coordinate,
            zip: self.zip_code.as_deref(),
            city: self.city.as_deref(),
            free_text: self.location.as_deref(),
        }
    }

    /// Posted timestamp parsed for newest-first ordering. Accepts RFC 3339
    /// or a plain `YYYY-MM-DD` date; anything else is `None`.
    #[must_use]
    pub fn posted_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.posted_date.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
                    .map(|ndt| ndt.and_utc())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: serde_json::Value) -> JobRecord {
        serde_json::from_value(json).expect("record should deserialize")
    }

    #[test]
    fn minimal_record_deserializes() {
        let job = record(serde_json::json!({ "id": "a0x1" }));
        assert_eq!(job.id.as_deref(), Some("a0x1"));
        assert!(job.title.is_none());
        assert!(!job.remote_friendly);
    }

    #[test]
    fn location_hint_prefers_direct_coordinates() {
        let job = record(serde_json::json!({
            "latitude": 33.749,
            "longitude": -84.388,
            "zipCode": "02108",
            "city": "Boston"
        }));
        let hint = job.location_hint();
        let coord = hint.coordinate.expect("both halves present");
        assert!((coord.lat - 33.749).abs() < 1e-9);
        assert_eq!(hint.zip, Some("02108"));
    }

    #[test]
    fn half_a_coordinate_pair_is_no_coordinate() {
        let job = record(serde_json::json!({ "latitude": 33.749, "zipCode": "30301" }));
        assert!(job.location_hint().coordinate.is_none());
        assert_eq!(job.location_hint().zip, Some("30301"));
    }

    #[test]
    fn posted_at_parses_rfc3339_and_bare_dates() {
        let full = record(serde_json::json!({ "postedDate": "2025-06-01T12:30:00Z" }));
        let bare = record(serde_json::json!({ "postedDate": "2025-06-01" }));
        let junk = record(serde_json::json!({ "postedDate": "yesterday" }));
        assert!(full.posted_at().is_some());
        assert!(bare.posted_at().is_some());
        assert!(full.posted_at() > bare.posted_at());
        assert!(junk.posted_at().is_none());
    }

    #[test]
    fn envelope_defaults_total_pages_to_one() {
        let response: SearchResponse =
            serde_json::from_value(serde_json::json!({ "success": true, "jobs": [] }))
                .expect("envelope should deserialize");
        assert_eq!(response.total_pages, 1);
        assert_eq!(response.total_count, 0);
    }
}
