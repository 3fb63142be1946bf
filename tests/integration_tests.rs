use bikeshare_trips::output::write_summary;
use bikeshare_trips::pipeline::aggregate::summarize_by_weekday;
use bikeshare_trips::pipeline::run_pipeline;
use bikeshare_trips::stats::TripStats;
use chrono::Weekday;

const LEGACY_FIXTURE: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/fixtures/legacy_q1.csv"
);
const CURRENT_FIXTURE: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/fixtures/current_q2.csv"
);

// The fixtures carry nine trips: five legacy, four current. One legacy trip
// starts at the maintenance station, one current trip has a negative ride
// length, and one current trip has a missing start timestamp, so six survive
// the filter.
#[test]
fn test_full_pipeline_counts() {
    let cleaned = run_pipeline(LEGACY_FIXTURE, CURRENT_FIXTURE).expect("pipeline failed");

    assert_eq!(cleaned.len(), 6);
    assert!(cleaned.iter().all(|t| t.ride_length.unwrap() >= 0));
    assert!(
        cleaned
            .iter()
            .all(|t| t.trip.start_station_name != "HQ QR")
    );
    // Legacy labels are gone after normalization
    assert!(
        cleaned
            .iter()
            .all(|t| t.trip.member_casual == "member" || t.trip.member_casual == "casual")
    );
}

#[test]
fn test_full_pipeline_legacy_scenario() {
    let cleaned = run_pipeline(LEGACY_FIXTURE, CURRENT_FIXTURE).expect("pipeline failed");

    let first = cleaned.iter().find(|t| t.trip.ride_id == "1").unwrap();
    assert_eq!(first.trip.member_casual, "member");
    assert_eq!(first.ride_length, Some(600));
    assert_eq!(first.day_of_week, Some(Weekday::Tue));
    assert_eq!(first.month.as_deref(), Some("01"));
    assert_eq!(first.year.as_deref(), Some("2019"));
}

#[test]
fn test_full_pipeline_summary_rows() {
    let cleaned = run_pipeline(LEGACY_FIXTURE, CURRENT_FIXTURE).expect("pipeline failed");
    let summaries = summarize_by_weekday(&cleaned);

    let rows: Vec<(&str, Weekday, u64, f64)> = summaries
        .iter()
        .map(|s| {
            (
                s.member_casual.as_str(),
                s.day_of_week,
                s.ride_count,
                s.avg_ride_length_secs,
            )
        })
        .collect();

    assert_eq!(
        rows,
        vec![
            ("casual", Weekday::Sun, 1, 1800.0),
            ("casual", Weekday::Tue, 1, 2400.0),
            ("member", Weekday::Sun, 1, 300.0),
            ("member", Weekday::Tue, 2, 700.0),
            ("member", Weekday::Thu, 1, 300.0),
        ]
    );

    let total: u64 = summaries.iter().map(|s| s.ride_count).sum();
    assert_eq!(total, cleaned.len() as u64);
}

#[test]
fn test_full_pipeline_written_summary() {
    let cleaned = run_pipeline(LEGACY_FIXTURE, CURRENT_FIXTURE).expect("pipeline failed");
    let summaries = summarize_by_weekday(&cleaned);

    let out_path = format!(
        "{}/bikeshare_trips_integration_summary.csv",
        std::env::temp_dir().display()
    );
    let _ = std::fs::remove_file(&out_path);

    write_summary(&out_path, &summaries).expect("write failed");

    let content = std::fs::read_to_string(&out_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines[0],
        "Member_Casual,Day_of_Week,Average_Ride_Length_Seconds"
    );
    assert_eq!(lines[1], "casual,Sunday,1800.0");
    assert_eq!(lines[4], "member,Tuesday,700.0");
    assert_eq!(lines.len(), summaries.len() + 1);

    std::fs::remove_file(&out_path).unwrap();
}

#[test]
fn test_full_pipeline_descriptive_stats() {
    let cleaned = run_pipeline(LEGACY_FIXTURE, CURRENT_FIXTURE).expect("pipeline failed");
    let stats = TripStats::from_trips(&cleaned);

    assert_eq!(stats.total_trips, 6);
    assert_eq!(stats.member_trips, 4);
    assert_eq!(stats.casual_trips, 2);
    assert_eq!(stats.other_category_trips, 0);
    assert_eq!(stats.missing_ride_length, 0);
    assert_eq!(stats.min_ride_length_secs, 300);
    assert_eq!(stats.max_ride_length_secs, 2400);
}

#[test]
fn test_missing_input_file_is_fatal() {
    let result = run_pipeline("/nonexistent/legacy.csv", CURRENT_FIXTURE);
    assert!(result.is_err());
}
