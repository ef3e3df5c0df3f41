//! Static coordinate reference tables and normalized lookups.
//!
//! Two tiers of reference data: zip-code centroids (finest) and major-city
//! centroids (coarsest). Both are compiled in, immutable, and shared
//! process-wide. Neither table is exhaustive — a miss is a normal outcome
//! for any caller, never an error.

mod city_data;
mod zip_data;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::coords::Coordinate;

static ZIP_INDEX: LazyLock<HashMap<&'static str, Coordinate>> =
    LazyLock::new(|| zip_data::ZIP_COORDS.iter().copied().collect());

static CITY_INDEX: LazyLock<HashMap<&'static str, Coordinate>> =
    LazyLock::new(|| city_data::CITY_COORDS.iter().copied().collect());

/// Looks up the centroid for a zip code.
///
/// Only the first five characters are significant, so ZIP+4 inputs like
/// `"30309-1234"` resolve via their 5-digit prefix. Returns `None` for
/// inputs with fewer than five usable characters or zips outside the
/// covered service areas.
#[must_use]
pub fn lookup_zip(code: &str) -> Option<Coordinate> {
    let zip5 = code.trim().get(..5)?;
    ZIP_INDEX.get(zip5).copied()
}

/// Looks up the centroid for a city by name, case- and
/// whitespace-insensitively.
#[must_use]
pub fn lookup_city(name: &str) -> Option<Coordinate> {
    let normalized = name.trim().to_lowercase();
    CITY_INDEX.get(normalized.as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zip_30301_is_downtown_atlanta() {
        let coord = lookup_zip("30301").expect("30301 should be in the table");
        assert!((coord.lat - 33.749).abs() < 1e-9);
        assert!((coord.lng + 84.388).abs() < 1e-9);
    }

    #[test]
    fn unknown_zip_is_none() {
        assert!(lookup_zip("99999").is_none());
    }

    #[test]
    fn zip_plus_four_truncates_to_prefix() {
        assert_eq!(lookup_zip("30309-1234"), lookup_zip("30309"));
        assert!(lookup_zip("30309-1234").is_some());
    }

    #[test]
    fn short_zip_is_none() {
        assert!(lookup_zip("303").is_none());
        assert!(lookup_zip("").is_none());
    }

    #[test]
    fn zip_with_surrounding_whitespace_resolves() {
        assert_eq!(lookup_zip(" 30301 "), lookup_zip("30301"));
    }

    #[test]
    fn city_lookup_ignores_case_and_whitespace() {
        let plain = lookup_city("Boston").expect("Boston should be in the table");
        assert_eq!(lookup_city("  boston  "), Some(plain));
        assert_eq!(lookup_city("BOSTON"), Some(plain));
    }

    #[test]
    fn unknown_city_is_none() {
        assert!(lookup_city("Springfield").is_none());
        assert!(lookup_city("").is_none());
    }

    #[test]
    fn every_zip_key_is_five_digits() {
        for (key, coord) in zip_data::ZIP_COORDS {
            assert_eq!(key.len(), 5, "bad key {key}");
            assert!(key.chars().all(|c| c.is_ascii_digit()), "bad key {key}");
            assert!(coord.lat.abs() <= 90.0 && coord.lng.abs() <= 180.0);
        }
    }

    #[test]
    fn every_city_key_is_pre_normalized() {
        for (key, _) in city_data::CITY_COORDS {
            assert_eq!(*key, key.trim().to_lowercase(), "bad key {key}");
        }
    }
}
