//! Heartbeat segmentation and weekly occupancy.
//!
//! Heartbeats (a category plus a local timestamp) are appended to an
//! [`EventStore`]. Two passes derive the visual summaries from it: per-day
//! runs of one category ([`segment_durations`]) and a weekday × second
//! occupancy matrix ([`accumulate_occupancy`]). Both are pure recomputes
//! driven by a gap `timeout`.

pub mod cli;
pub mod error;
pub mod heartbeat_data;
pub mod ingest;
pub mod models;
pub mod occupancy;
pub mod report;
pub mod segmentation;
pub mod settings;
pub mod store;
pub mod timeout;
pub mod utils;

use std::io::Write;

use anyhow::Result;
use clap::Parser;

pub use error::HeartbeatError;
pub use heartbeat_data::{HeartbeatData, LegendEntry, DEFAULT_LEGEND_LENGTH};
pub use models::{DayDurations, Duration, DurationMap, HeartbeatInput};
pub use occupancy::{accumulate_occupancy, OccupancyConfig, OccupancyCount, OccupancyMatrix};
pub use segmentation::{segment_durations, SegmentationConfig, DEFAULT_TIMEOUT_SECS};
pub use store::{CategoryCounter, EventStore, OTHER_CATEGORY};
pub use timeout::{RecomputeTarget, RecomputedEvent, RedrawSink, TimeoutController};

use cli::{Cli, OutputFormat, View};
use settings::{SettingsStore, UserSettings};

pub fn run() -> Result<()> {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&cli, &mut out)
}

fn resolve_settings(cli: &Cli) -> Result<UserSettings> {
    let persisted = match &cli.settings {
        Some(path) => SettingsStore::new(path.clone())?.settings()?,
        None => UserSettings::default(),
    };

    let mut settings = persisted.with_env_overrides();
    if let Some(timeout) = cli.timeout {
        settings.timeout_secs = timeout;
    }
    if let Some(length) = cli.legend_length {
        settings.legend_length = length;
    }
    Ok(settings)
}

/// Loads the input named by `cli`, computes the requested view and writes it
/// to `out`.
pub fn execute(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let settings = resolve_settings(cli)?;

    let heartbeats = ingest::load_heartbeats(&cli.input)?;
    log::info!(
        "Loaded {} heartbeats from {}",
        heartbeats.len(),
        cli.input.display()
    );

    let mut data: HeartbeatData = HeartbeatData::new();
    data.extend(heartbeats);

    let legend = if cli.fold_legend {
        data.apply_legend(settings.legend_length, &settings.other_name)
    } else {
        data.legend(settings.legend_length, &settings.other_name)
    };

    let json = cli.format == OutputFormat::Json;
    match cli.view {
        View::Durations => {
            let durations = data.recompute_durations(settings.timeout_secs)?;
            if json {
                serde_json::to_writer_pretty(&mut *out, durations)?;
            } else {
                report::write_durations(out, durations)?;
            }
        }
        View::Occupancy => {
            let matrix = data.recompute_occupancy(settings.timeout_secs)?;
            if json {
                serde_json::to_writer(&mut *out, matrix)?;
            } else {
                report::write_occupancy(out, matrix)?;
            }
        }
        View::Daily | View::Weekly => {
            let matrix = data.recompute_occupancy(settings.timeout_secs)?;
            let weekly = cli.view == View::Weekly;
            let profile = if weekly {
                matrix.weekly_profile()
            } else {
                matrix.daily_profile()
            };
            if json {
                serde_json::to_writer(&mut *out, &profile)?;
            } else {
                report::write_profile(out, &profile, weekly)?;
            }
        }
        View::Legend => {
            if json {
                serde_json::to_writer_pretty(&mut *out, &legend)?;
            } else {
                report::write_legend(out, &legend)?;
            }
        }
        View::Points => {
            if json {
                let points: Vec<_> = data.store().points().collect();
                serde_json::to_writer(&mut *out, &points)?;
            } else {
                report::write_points(out, data.store())?;
            }
        }
    }

    if json {
        writeln!(out)?;
    }
    Ok(())
}
