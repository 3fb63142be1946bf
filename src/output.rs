//! Output formatting and persistence for trip summaries and statistics.
//!
//! Supports pretty-printing, JSON serialization, and summary CSV export.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

use crate::pipeline::aggregate::DaySummary;
use crate::schema::weekday_name;
use crate::stats::TripStats;
use csv::WriterBuilder;

/// Logs trip statistics using Rust's debug pretty-print format.
pub fn print_pretty(stats: &TripStats) {
    debug!("{:#?}", stats);
}

/// Prints trip statistics as pretty-printed JSON on stdout.
pub fn print_json(stats: &TripStats) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(stats)?);
    Ok(())
}

/// Exported row shape. Column names are a contract with downstream charting.
#[derive(Serialize)]
struct SummaryRow<'a> {
    #[serde(rename = "Member_Casual")]
    member_casual: &'a str,
    #[serde(rename = "Day_of_Week")]
    day_of_week: &'static str,
    #[serde(rename = "Average_Ride_Length_Seconds")]
    average_ride_length_seconds: f64,
}

/// Writes the aggregated summary to a CSV file, one row per observed
/// (category, weekday) pair in the order the aggregator produced them.
///
/// The file is created here, after all upstream stages have completed, so a
/// failed run leaves no partial output behind.
pub fn write_summary(path: impl AsRef<Path>, summaries: &[DaySummary]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("failed to create summary file {}", path.display()))?;

    let mut writer = WriterBuilder::new().from_writer(file);

    for summary in summaries {
        writer.serialize(SummaryRow {
            member_casual: &summary.member_casual,
            day_of_week: weekday_name(summary.day_of_week),
            average_ride_length_seconds: summary.avg_ride_length_secs,
        })?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows = summaries.len(), "Summary written");
    Ok(())
}
