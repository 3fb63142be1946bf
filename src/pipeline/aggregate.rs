//! Grouping cleaned trips by rider category and weekday.

use std::collections::BTreeMap;

use chrono::Weekday;
use tracing::debug;

use crate::pipeline::derive::EnrichedTrip;
use crate::pipeline::utility::mean;

/// One aggregated row: all surviving trips for a rider category on one
/// weekday.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub member_casual: String,
    pub day_of_week: Weekday,
    pub ride_count: u64,
    pub avg_ride_length_secs: f64,
}

/// Groups trips by (rider category, weekday) and computes the ride count and
/// mean ride length per group, ignoring missing lengths in the mean.
///
/// Rows come out sorted by category, then weekday in canonical
/// Sunday-through-Saturday order, so the result is reproducible for a fixed
/// input and downstream consumers see days in calendar order.
pub fn summarize_by_weekday(trips: &[EnrichedTrip]) -> Vec<DaySummary> {
    // Sunday-based index as the inner sort key gives calendar order for free.
    let mut groups: BTreeMap<(String, u32), Vec<&EnrichedTrip>> = BTreeMap::new();

    for trip in trips {
        let Some(day) = trip.day_of_week else {
            continue;
        };
        groups
            .entry((trip.trip.member_casual.clone(), day.num_days_from_sunday()))
            .or_default()
            .push(trip);
    }

    let summaries: Vec<DaySummary> = groups
        .into_iter()
        .map(|((category, day_index), members)| {
            let lengths: Vec<f64> = members
                .iter()
                .filter_map(|t| t.ride_length)
                .map(|l| l as f64)
                .collect();

            DaySummary {
                member_casual: category,
                day_of_week: weekday_from_sunday_index(day_index),
                ride_count: members.len() as u64,
                avg_ride_length_secs: mean(&lengths),
            }
        })
        .collect();

    debug!(group_count = summaries.len(), "Trips aggregated by weekday");
    summaries
}

fn weekday_from_sunday_index(index: u32) -> Weekday {
    match index {
        0 => Weekday::Sun,
        1 => Weekday::Mon,
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        _ => Weekday::Sat,
    }
}
