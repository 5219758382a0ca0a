//! Plain-text renderings of the engine's outputs.

use std::cmp::Reverse;
use std::io::Write;

use anyhow::Result;

use crate::heartbeat_data::LegendEntry;
use crate::models::DurationMap;
use crate::occupancy::{OccupancyCount, OccupancyMatrix};
use crate::store::EventStore;
use crate::utils::time::format_time_of_day;

const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub fn write_durations(out: &mut impl Write, durations: &DurationMap) -> Result<()> {
    for day in durations.iter() {
        writeln!(out, "{}", day.date.format("%d/%m/%y"))?;
        for duration in &day.durations {
            writeln!(
                out,
                "  {}-{}  {:>6}s  {}",
                format_time_of_day(u64::from(duration.start_second), false),
                format_time_of_day(u64::from(duration.end_second()), false),
                duration.length_seconds,
                duration.category
            )?;
        }
    }
    Ok(())
}

/// Writes each maximal stretch of equal, non-zero counts as one line.
pub fn write_profile(out: &mut impl Write, profile: &[u64], weekly: bool) -> Result<()> {
    let mut start = 0;
    while start < profile.len() {
        let count = profile[start];
        let mut end = start;
        while end + 1 < profile.len() && profile[end + 1] == count {
            end += 1;
        }
        if count > 0 {
            writeln!(
                out,
                "{}-{}  {}",
                format_time_of_day(start as u64, weekly),
                format_time_of_day(end as u64, weekly),
                count
            )?;
        }
        start = end + 1;
    }
    Ok(())
}

pub fn write_occupancy<C: OccupancyCount>(
    out: &mut impl Write,
    matrix: &OccupancyMatrix<C>,
) -> Result<()> {
    for (name, row) in WEEKDAY_NAMES.iter().zip(matrix.rows()) {
        let total: u64 = row.iter().map(|count| count.as_u64()).sum();
        let peak = row
            .iter()
            .enumerate()
            .map(|(second, count)| (second, count.as_u64()))
            .max_by_key(|&(second, count)| (count, Reverse(second)));

        match peak {
            Some((second, count)) if count > 0 => writeln!(
                out,
                "{:<9}  total {:>8}  peak {} at {}",
                name,
                total,
                count,
                format_time_of_day(second as u64, false)
            )?,
            _ => writeln!(out, "{:<9}  total {:>8}", name, total)?,
        }
    }
    Ok(())
}

pub fn write_legend(out: &mut impl Write, legend: &[LegendEntry]) -> Result<()> {
    for entry in legend {
        match entry.count {
            Some(count) => writeln!(out, "{:<24} {}", entry.category, count)?,
            None => writeln!(out, "{}", entry.category)?,
        }
    }
    Ok(())
}

pub fn write_points(out: &mut impl Write, store: &EventStore) -> Result<()> {
    for (second, date) in store.points() {
        writeln!(out, "{} {}", date, format_time_of_day(u64::from(second), false))?;
    }
    Ok(())
}
