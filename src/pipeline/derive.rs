//! Calendar and ride-length feature derivation.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use tracing::debug;

use crate::schema::TripRecord;

/// A merged trip plus its derived features. Derived fields are missing when
/// the timestamp they depend on failed to parse.
#[derive(Debug, Clone)]
pub struct EnrichedTrip {
    pub trip: TripRecord,
    pub date: Option<NaiveDate>,
    pub month: Option<String>,
    pub day: Option<String>,
    pub year: Option<String>,
    pub day_of_week: Option<Weekday>,
    pub ride_length: Option<i64>,
}

/// Derives calendar fields and the signed ride length for every record.
/// Exactly one output record per input record; nothing is rejected here,
/// negative lengths included.
pub fn derive_features(trips: Vec<TripRecord>) -> Vec<EnrichedTrip> {
    let enriched: Vec<EnrichedTrip> = trips.into_iter().map(enrich).collect();
    let missing = enriched.iter().filter(|t| t.ride_length.is_none()).count();
    debug!(
        row_count = enriched.len(),
        missing_ride_length = missing,
        "Features derived"
    );
    enriched
}

fn enrich(trip: TripRecord) -> EnrichedTrip {
    let date = trip.started_at.map(|ts| ts.date());
    let ride_length = match (trip.started_at, trip.ended_at) {
        (Some(start), Some(end)) => Some(ride_length_secs(start, end)),
        _ => None,
    };

    EnrichedTrip {
        // Fixed-width components so string sorts agree with calendar order.
        month: date.map(|d| format!("{:02}", d.month())),
        day: date.map(|d| format!("{:02}", d.day())),
        year: date.map(|d| format!("{:04}", d.year())),
        day_of_week: date.map(|d| d.weekday()),
        date,
        ride_length,
        trip,
    }
}

/// End minus start in whole seconds. Signed: clock skew in the source data
/// produces negative values, which the filter stage rejects later.
pub fn ride_length_secs(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_seconds()
}
