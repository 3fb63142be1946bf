//! CSV ingestion for the two source schemes.
//!
//! Header-driven serde deserialization enforces the column contract: a file
//! missing an expected column fails on the first row and aborts the run.
//! Value-level problems (unparseable timestamps or durations) become missing
//! values instead.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

use crate::schema::{CurrentTrip, LegacyTrip, TripRecord, parse_duration};

/// Loads a legacy-scheme export, renaming its columns onto the current
/// scheme and coercing field types.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_legacy(path: impl AsRef<Path>) -> Result<Vec<TripRecord>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("failed to open legacy trip export {}", path.display()))?;
    let trips = read_legacy(file)
        .with_context(|| format!("failed to read legacy trip export {}", path.display()))?;
    info!(row_count = trips.len(), "Legacy export loaded");
    Ok(trips)
}

/// Loads a current-scheme export.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_current(path: impl AsRef<Path>) -> Result<Vec<TripRecord>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("failed to open current trip export {}", path.display()))?;
    let trips = read_current(file)
        .with_context(|| format!("failed to read current trip export {}", path.display()))?;
    info!(row_count = trips.len(), "Current export loaded");
    Ok(trips)
}

pub fn read_legacy<R: Read>(reader: R) -> Result<Vec<TripRecord>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut trips = Vec::new();
    let mut malformed_durations = 0usize;

    for result in rdr.deserialize() {
        let raw: LegacyTrip = result.context("malformed legacy trip row")?;
        // The reported duration is redundant with the derived ride length and
        // is dropped at merge; parsing it here surfaces bad source data.
        if parse_duration(&raw.reported_duration).is_none() {
            malformed_durations += 1;
        }
        trips.push(raw.into());
    }

    if malformed_durations > 0 {
        warn!(malformed_durations, "Legacy rows with unparseable duration values");
    }

    Ok(trips)
}

pub fn read_current<R: Read>(reader: R) -> Result<Vec<TripRecord>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut trips = Vec::new();

    for result in rdr.deserialize() {
        let raw: CurrentTrip = result.context("malformed current trip row")?;
        trips.push(raw.into());
    }

    Ok(trips)
}
