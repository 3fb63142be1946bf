//! Source record schemas and field-level normalization.
//!
//! Two quarterly exports arrive with different column schemes. The legacy
//! scheme is mapped onto the current one at deserialization time via serde
//! renames, so a header that doesn't carry the expected columns fails to
//! deserialize and aborts the run.

use chrono::{NaiveDateTime, Weekday};
use serde::Deserialize;

/// A row from the legacy-scheme export, renamed onto the current naming
/// convention. Demographic columns (`gender`, `birthyear`) are present in the
/// file but intentionally not deserialized.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyTrip {
    #[serde(rename = "trip_id")]
    pub ride_id: String,
    #[serde(rename = "bikeid")]
    pub rideable_type: String,
    #[serde(rename = "start_time")]
    pub started_at: String,
    #[serde(rename = "end_time")]
    pub ended_at: String,
    #[serde(rename = "tripduration")]
    pub reported_duration: String,
    #[serde(rename = "from_station_id")]
    pub start_station_id: String,
    #[serde(rename = "from_station_name")]
    pub start_station_name: String,
    #[serde(rename = "to_station_id")]
    pub end_station_id: String,
    #[serde(rename = "to_station_name")]
    pub end_station_name: String,
    #[serde(rename = "usertype")]
    pub member_casual: String,
}

/// A row from the current-scheme export. Geo columns (`start_lat` etc.) are
/// present in the file but intentionally not deserialized.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentTrip {
    pub ride_id: String,
    pub rideable_type: String,
    pub started_at: String,
    pub ended_at: String,
    pub start_station_name: String,
    pub start_station_id: String,
    pub end_station_name: String,
    pub end_station_id: String,
    pub member_casual: String,
}

/// A trip in the unified post-merge schema. Timestamps that failed to parse
/// are `None`; downstream stages treat the derived ride length of such rows
/// as missing and the filter drops them.
#[derive(Debug, Clone)]
pub struct TripRecord {
    pub ride_id: String,
    pub rideable_type: String,
    pub started_at: Option<NaiveDateTime>,
    pub ended_at: Option<NaiveDateTime>,
    pub start_station_name: String,
    pub start_station_id: String,
    pub end_station_name: String,
    pub end_station_id: String,
    pub member_casual: String,
}

impl From<LegacyTrip> for TripRecord {
    fn from(raw: LegacyTrip) -> Self {
        TripRecord {
            ride_id: raw.ride_id,
            rideable_type: raw.rideable_type,
            started_at: parse_timestamp(&raw.started_at),
            ended_at: parse_timestamp(&raw.ended_at),
            start_station_name: raw.start_station_name,
            start_station_id: raw.start_station_id,
            end_station_name: raw.end_station_name,
            end_station_id: raw.end_station_id,
            member_casual: raw.member_casual,
        }
    }
}

impl From<CurrentTrip> for TripRecord {
    fn from(raw: CurrentTrip) -> Self {
        TripRecord {
            ride_id: raw.ride_id,
            rideable_type: raw.rideable_type,
            started_at: parse_timestamp(&raw.started_at),
            ended_at: parse_timestamp(&raw.ended_at),
            start_station_name: raw.start_station_name,
            start_station_id: raw.start_station_id,
            end_station_name: raw.end_station_name,
            end_station_id: raw.end_station_id,
            member_casual: raw.member_casual,
        }
    }
}

/// Timestamp formats observed across the quarterly exports.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Parses a timestamp leniently. Unparseable input is a missing value, not
/// an error.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
}

/// Parses a duration expressed either as wall-clock time (`H:MM:SS`) or as a
/// plain number of seconds (possibly with thousands separators and a decimal
/// part, e.g. `"1,783.0"`). Malformed input yields `None` rather than a
/// nonsensical numeric result.
pub fn parse_duration(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.contains(':') {
        let parts: Vec<&str> = trimmed.split(':').collect();
        if parts.len() != 3 {
            return None;
        }
        let hours: i64 = parts[0].parse().ok()?;
        let minutes: i64 = parts[1].parse().ok()?;
        let seconds: i64 = parts[2].parse().ok()?;
        if !(0..60).contains(&minutes) || !(0..60).contains(&seconds) || hours < 0 {
            return None;
        }
        return Some(hours * 3600 + minutes * 60 + seconds);
    }

    let plain = trimmed.replace(',', "");
    plain.parse::<f64>().ok().filter(|s| s.is_finite()).map(|s| s as i64)
}

/// Maps legacy rider-category labels onto the canonical domain.
///
/// `Subscriber` becomes `member` and `Customer` becomes `casual`; every other
/// label (including the already-canonical ones) passes through unchanged, so
/// the mapping is total and idempotent.
pub fn canonical_rider_category(label: &str) -> &str {
    match label {
        "Subscriber" => "member",
        "Customer" => "casual",
        other => other,
    }
}

/// Full English weekday name, used for grouping keys and the exported CSV.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}
