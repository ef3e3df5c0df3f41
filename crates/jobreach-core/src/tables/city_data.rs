//! Major-city centroid fallbacks, keyed by lower-cased city name.

use crate::coords::Coordinate;

pub(super) const CITY_COORDS: &[(&str, Coordinate)] = &[
    ("atlanta", Coordinate { lat: 33.749, lng: -84.388 }),
    ("boston", Coordinate { lat: 42.361, lng: -71.057 }),
    ("chicago", Coordinate { lat: 41.878, lng: -87.630 }),
    ("dallas", Coordinate { lat: 32.777, lng: -96.797 }),
    ("fort worth", Coordinate { lat: 32.755, lng: -97.331 }),
    ("los angeles", Coordinate { lat: 34.052, lng: -118.244 }),
    ("new york", Coordinate { lat: 40.713, lng: -74.006 }),
    ("new york city", Coordinate { lat: 40.713, lng: -74.006 }),
    ("oakland", Coordinate { lat: 37.805, lng: -122.271 }),
    ("philadelphia", Coordinate { lat: 39.953, lng: -75.164 }),
    ("richmond", Coordinate { lat: 37.929, lng: -122.353 }),
    ("san francisco", Coordinate { lat: 37.775, lng: -122.418 }),
];
