//! Rider-category normalization stage.

use tracing::debug;

use crate::pipeline::derive::EnrichedTrip;
use crate::schema::canonical_rider_category;

/// Rewrites every record's rider-category label into the canonical domain.
/// Canonical labels are fixed points, so applying this stage twice is the
/// same as applying it once.
pub fn normalize_categories(trips: Vec<EnrichedTrip>) -> Vec<EnrichedTrip> {
    let mut remapped = 0usize;

    let out: Vec<EnrichedTrip> = trips
        .into_iter()
        .map(|mut t| {
            let canonical = canonical_rider_category(&t.trip.member_casual);
            if canonical != t.trip.member_casual {
                t.trip.member_casual = canonical.to_string();
                remapped += 1;
            }
            t
        })
        .collect();

    debug!(row_count = out.len(), remapped, "Rider categories normalized");
    out
}
