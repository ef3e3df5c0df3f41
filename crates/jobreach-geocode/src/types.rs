//! US Census geocoder response types.
//!
//! Models the JSON returned by the `locations/onelineaddress` endpoint:
//! `{ "result": { "addressMatches": [ { "coordinates": { "x": …, "y": … },
//! "matchedAddress": "…" }, … ] } }`.

use serde::Deserialize;

/// Top-level envelope for a geocoder response.
#[derive(Debug, Deserialize)]
pub struct CensusResponse {
    pub result: CensusResult,
}

/// The result body; an unmatched address comes back with an empty
/// `addressMatches` array rather than an error.
#[derive(Debug, Deserialize)]
pub struct CensusResult {
    #[serde(rename = "addressMatches", default)]
    pub address_matches: Vec<AddressMatch>,
}

/// A single candidate match for the submitted address.
#[derive(Debug, Deserialize)]
pub struct AddressMatch {
    /// The normalized address the service matched against.
    #[serde(rename = "matchedAddress", default)]
    pub matched_address: Option<String>,
    pub coordinates: MatchCoordinates,
}

/// Candidate coordinates. The Census API uses `x` for longitude and `y`
/// for latitude.
#[derive(Debug, Deserialize)]
pub struct MatchCoordinates {
    pub x: f64,
    pub y: f64,
}
