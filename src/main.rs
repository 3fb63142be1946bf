//! CLI entry point for the bike-share trip summarizer.
//!
//! Provides subcommands for running the full harmonize-and-summarize
//! pipeline over two quarterly exports and for printing descriptive
//! statistics about the cleaned trips.

use anyhow::Result;
use bikeshare_trips::{
    output::{print_json, write_summary},
    pipeline::{aggregate::summarize_by_weekday, run_pipeline},
    stats::TripStats,
};
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare_trips")]
#[command(about = "A tool to harmonize and summarize quarterly bike-share trip exports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean both quarters and write the per-(category, weekday) summary CSV
    Summarize {
        /// Path to the legacy-scheme quarterly export
        #[arg(long, value_name = "FILE")]
        legacy: String,

        /// Path to the current-scheme quarterly export
        #[arg(long, value_name = "FILE")]
        current: String,

        /// CSV file to write the summary to
        #[arg(short, long, default_value = "avg_ride_length.csv")]
        output: String,
    },
    /// Clean both quarters and print descriptive statistics as JSON
    Describe {
        /// Path to the legacy-scheme quarterly export
        #[arg(long, value_name = "FILE")]
        legacy: String,

        /// Path to the current-scheme quarterly export
        #[arg(long, value_name = "FILE")]
        current: String,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/bikeshare_trips.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_trips.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Summarize {
            legacy,
            current,
            output,
        } => {
            let cleaned = run_pipeline(&legacy, &current)?;

            let stats = TripStats::from_trips(&cleaned);
            info!(
                total_trips = stats.total_trips,
                member_trips = stats.member_trips,
                casual_trips = stats.casual_trips,
                mean_ride_length_secs = stats.mean_ride_length_secs,
                "Cleaned trips ready"
            );

            let summaries = summarize_by_weekday(&cleaned);
            write_summary(&output, &summaries)?;
        }
        Commands::Describe { legacy, current } => {
            let cleaned = run_pipeline(&legacy, &current)?;
            let stats = TripStats::from_trips(&cleaned);
            print_json(&stats)?;
        }
    }

    Ok(())
}
