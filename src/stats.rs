use serde::Serialize;

use crate::pipeline::derive::EnrichedTrip;
use crate::pipeline::utility::{mean, median, stddev};

/// Descriptive statistics over a cleaned trip set.
#[derive(Debug, Default, Serialize)]
pub struct TripStats {
    pub total_trips: usize,
    pub member_trips: usize,
    pub casual_trips: usize,
    pub other_category_trips: usize,
    pub missing_ride_length: usize,

    pub mean_ride_length_secs: f64,
    pub median_ride_length_secs: f64,
    pub stddev_ride_length_secs: f64,
    pub min_ride_length_secs: i64,
    pub max_ride_length_secs: i64,
}

impl TripStats {
    pub fn from_trips(trips: &[EnrichedTrip]) -> Self {
        let mut s = TripStats {
            total_trips: trips.len(),
            ..Default::default()
        };

        let mut lengths = Vec::with_capacity(trips.len());

        for t in trips {
            match t.trip.member_casual.as_str() {
                "member" => s.member_trips += 1,
                "casual" => s.casual_trips += 1,
                _ => s.other_category_trips += 1,
            }

            match t.ride_length {
                Some(len) => lengths.push(len as f64),
                None => s.missing_ride_length += 1,
            }
        }

        if !lengths.is_empty() {
            s.mean_ride_length_secs = mean(&lengths);
            s.median_ride_length_secs = median(&lengths);
            s.stddev_ride_length_secs = stddev(&lengths, s.mean_ride_length_secs);
            s.min_ride_length_secs = lengths.iter().fold(f64::INFINITY, |a, &b| a.min(b)) as i64;
            s.max_ride_length_secs =
                lengths.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b)) as i64;
        }

        s
    }
}
