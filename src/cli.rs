//! CLI argument parsing for heartbeats

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Which summary to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum View {
    /// Merged runs per date (default)
    Durations,
    /// Per-weekday totals of the occupancy matrix
    Occupancy,
    /// Occupancy summed across weekdays
    Daily,
    /// Occupancy rows laid out Monday to Sunday
    Weekly,
    /// Most frequent categories
    Legend,
    /// Raw heartbeats as (date, second-of-day)
    Points,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "heartbeats")]
#[command(version)]
#[command(about = "Segment activity heartbeats into durations and weekly occupancy", long_about = None)]
pub struct Cli {
    /// Heartbeat file: a JSON array or JSON lines of {category, timestamp}
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Largest gap in seconds between heartbeats of one run
    #[arg(short, long, value_name = "SECS")]
    pub timeout: Option<u32>,

    /// Summary to print
    #[arg(long, value_enum, default_value = "durations")]
    pub view: View,

    /// Number of legend slots, including the catch-all
    #[arg(short = 'l', long = "legend-length", value_name = "N")]
    pub legend_length: Option<usize>,

    /// Fold categories outside the legend into the catch-all before segmenting
    #[arg(long = "fold-legend")]
    pub fold_legend: bool,

    /// Settings file holding persisted defaults
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["heartbeats", "beats.json"]);

        assert_eq!(cli.input, PathBuf::from("beats.json"));
        assert_eq!(cli.timeout, None);
        assert_eq!(cli.view, View::Durations);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.fold_legend);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "heartbeats",
            "beats.json",
            "--timeout",
            "300",
            "--view",
            "weekly",
            "-l",
            "5",
            "--format",
            "json",
        ]);

        assert_eq!(cli.timeout, Some(300));
        assert_eq!(cli.view, View::Weekly);
        assert_eq!(cli.legend_length, Some(5));
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
