//! Validity filter for cleaned trips.

use tracing::info;

use crate::pipeline::derive::EnrichedTrip;

/// Station label used for bike check/QA rides; never a real trip origin.
const MAINTENANCE_STATION: &str = "HQ QR";

/// Keeps a record iff its ride length is known and non-negative and it did
/// not originate from the maintenance station. A missing ride length fails
/// the test.
pub fn is_valid(trip: &EnrichedTrip) -> bool {
    matches!(trip.ride_length, Some(len) if len >= 0)
        && trip.trip.start_station_name != MAINTENANCE_STATION
}

/// Applies [`is_valid`] once over the whole record set.
pub fn retain_valid(trips: Vec<EnrichedTrip>) -> Vec<EnrichedTrip> {
    let before = trips.len();
    let out: Vec<EnrichedTrip> = trips.into_iter().filter(is_valid).collect();
    info!(
        row_count = out.len(),
        dropped = before - out.len(),
        "Invalid trips filtered"
    );
    out
}
