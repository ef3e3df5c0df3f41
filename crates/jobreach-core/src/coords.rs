//! Coordinate value type and great-circle distance.

use serde::{Deserialize, Serialize};

const EARTH_RADIUS_MILES: f64 = 3959.0;

/// A point on the Earth's surface in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, [-90, 90].
    pub lat: f64,
    /// Longitude in degrees, [-180, 180].
    pub lng: f64,
}

/// Great-circle distance between two points in miles, via the Haversine
/// formula.
///
/// Symmetric in its arguments and exactly zero when `a == b`. The formula
/// is numerically well-behaved across the full coordinate domain, so
/// degenerate and antipodal inputs return finite values rather than
/// panicking.
#[must_use]
pub fn distance_miles(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_MILES * c
}
