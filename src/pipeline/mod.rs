//! The trip-cleaning pipeline as a sequence of pure transformations.
//!
//! Each stage takes an owned table and returns a new one, so the stages can
//! be tested in isolation: merge, derive features, normalize categories,
//! filter, aggregate.

pub mod aggregate;
pub mod category;
pub mod derive;
pub mod filter;
pub mod utility;

use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::loader;
use crate::schema::TripRecord;
use derive::EnrichedTrip;

/// Unions the two quarters into one record set: legacy rows first, then
/// current rows. No deduplication, no sort.
pub fn merge_sources(legacy: Vec<TripRecord>, current: Vec<TripRecord>) -> Vec<TripRecord> {
    let mut merged = legacy;
    merged.extend(current);
    info!(row_count = merged.len(), "Quarters merged");
    merged
}

/// Loads both exports and runs every cleaning stage through the filter,
/// returning the record set the aggregator and statistics operate on.
#[tracing::instrument(skip_all, fields(
    legacy = %legacy_path.as_ref().display(),
    current = %current_path.as_ref().display(),
))]
pub fn run_pipeline(
    legacy_path: impl AsRef<Path>,
    current_path: impl AsRef<Path>,
) -> Result<Vec<EnrichedTrip>> {
    let legacy = loader::load_legacy(legacy_path)?;
    let current = loader::load_current(current_path)?;

    let merged = merge_sources(legacy, current);
    let derived = derive::derive_features(merged);
    let canonical = category::normalize_categories(derived);
    Ok(filter::retain_valid(canonical))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip(id: &str) -> TripRecord {
        TripRecord {
            ride_id: id.into(),
            rideable_type: "x".into(),
            started_at: None,
            ended_at: None,
            start_station_name: "A".into(),
            start_station_id: "1".into(),
            end_station_name: "B".into(),
            end_station_id: "2".into(),
            member_casual: "member".into(),
        }
    }

    #[test]
    fn test_merge_keeps_legacy_rows_first() {
        let merged = merge_sources(vec![trip("l1"), trip("l2")], vec![trip("c1")]);
        let ids: Vec<&str> = merged.iter().map(|t| t.ride_id.as_str()).collect();
        assert_eq!(ids, vec!["l1", "l2", "c1"]);
    }

    #[test]
    fn test_merge_does_not_deduplicate() {
        let merged = merge_sources(vec![trip("same")], vec![trip("same")]);
        assert_eq!(merged.len(), 2);
    }
}
