//! Best-effort resolution of partial location data to a coordinate.

use crate::coords::Coordinate;
use crate::tables;

/// Heterogeneous, partial location data in resolution priority order.
///
/// Sources are tried strictly in field order: a direct coordinate wins over
/// a zip, a zip over a city, and the free-text string is the last resort.
/// The chain short-circuits on the first hit, so coarser data never
/// overrides finer data even when both would resolve.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationHint<'a> {
    /// Precise coordinate supplied directly by an upstream data source.
    pub coordinate: Option<Coordinate>,
    pub zip: Option<&'a str>,
    pub city: Option<&'a str>,
    /// Free-text description of comma-separated segments, e.g.
    /// `"Atlanta, Georgia, USA"`.
    pub free_text: Option<&'a str>,
}

/// Resolves a hint to its best available coordinate.
///
/// Returns `None` when every source is absent or misses the reference
/// tables — an expected outcome for locations outside the covered areas.
#[must_use]
pub fn resolve(hint: &LocationHint<'_>) -> Option<Coordinate> {
    hint.coordinate
        .or_else(|| hint.zip.and_then(tables::lookup_zip))
        .or_else(|| hint.city.and_then(tables::lookup_city))
        .or_else(|| hint.free_text.and_then(resolve_free_text))
}

/// Tries each comma-separated segment against the city table, left to
/// right, returning the first hit. Segment normalization (trim + case
/// fold) happens inside [`tables::lookup_city`].
fn resolve_free_text(text: &str) -> Option<Coordinate> {
    text.split(',').find_map(tables::lookup_city)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_coordinate_wins_over_zip() {
        let direct = Coordinate {
            lat: 1.125,
            lng: 2.25,
        };
        let hint = LocationHint {
            coordinate: Some(direct),
            zip: Some("30301"),
            ..LocationHint::default()
        };
        assert_eq!(resolve(&hint), Some(direct));
    }

    #[test]
    fn zip_wins_over_city() {
        let hint = LocationHint {
            zip: Some("02108"),
            city: Some("Atlanta"),
            ..LocationHint::default()
        };
        let resolved = resolve(&hint).expect("zip should resolve");
        assert_eq!(Some(resolved), tables::lookup_zip("02108"));
    }

    #[test]
    fn unknown_zip_falls_through_to_city() {
        let hint = LocationHint {
            zip: Some("99999"),
            city: Some("Chicago"),
            ..LocationHint::default()
        };
        assert_eq!(resolve(&hint), tables::lookup_city("chicago"));
    }

    #[test]
    fn free_text_segments_are_tried_left_to_right() {
        let hint = LocationHint {
            free_text: Some("Atlanta, Georgia, USA"),
            ..LocationHint::default()
        };
        assert_eq!(resolve(&hint), tables::lookup_city("atlanta"));
    }

    #[test]
    fn free_text_skips_unknown_segments() {
        // "Buckhead" is not in the city table; the scan continues until a
        // segment matches.
        let hint = LocationHint {
            free_text: Some("Buckhead, Atlanta, GA"),
            ..LocationHint::default()
        };
        assert_eq!(resolve(&hint), tables::lookup_city("atlanta"));
    }

    #[test]
    fn all_sources_absent_is_none() {
        assert!(resolve(&LocationHint::default()).is_none());
    }

    #[test]
    fn nothing_matches_is_none() {
        let hint = LocationHint {
            zip: Some("99999"),
            city: Some("Nowhere"),
            free_text: Some("Somewhere, Else"),
            ..LocationHint::default()
        };
        assert!(resolve(&hint).is_none());
    }
}
