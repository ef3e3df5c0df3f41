//! Participant resolution: geocode once, fall back to the reference tables.

use jobreach_core::{Coordinate, ParticipantLocation};

use crate::client::GeocoderClient;

/// Resolves the participant's coordinate, settling the session cache.
///
/// Priority order: an already-settled cache slot; the external geocoder
/// when a full street address is present; the zip table; the city table.
/// Every geocoder failure — network error, non-2xx status, malformed body,
/// zero matches — is logged and falls through to the table lookups, so the
/// chain is total: the caller always gets a coordinate or an explicit
/// absent, never an error. The outcome (including absent) settles the
/// participant's slot, so the network is consulted at most once per
/// address revision.
pub async fn resolve_participant(
    client: &GeocoderClient,
    participant: &ParticipantLocation,
) -> Option<Coordinate> {
    if let Some(settled) = participant.cached() {
        return settled;
    }

    let geocoded = geocode_full_address(client, participant).await;
    let outcome = geocoded.or_else(|| participant.fallback_coordinate());
    participant.settle(outcome)
}

/// Invokes the external oracle only when street, city, and state are all
/// present; a partial address resolves to `None` without any network call.
async fn geocode_full_address(
    client: &GeocoderClient,
    participant: &ParticipantLocation,
) -> Option<Coordinate> {
    let (Some(street), Some(city), Some(state)) = (
        participant.street(),
        participant.city(),
        participant.state(),
    ) else {
        return None;
    };

    match client
        .geocode_address(street, city, state, participant.zip())
        .await
    {
        Ok(Some(coord)) => Some(coord),
        Ok(None) => {
            tracing::debug!("geocoder returned no matches, using table fallback");
            None
        }
        Err(err) => {
            tracing::warn!(error = %err, "geocoding failed, using table fallback");
            None
        }
    }
}
