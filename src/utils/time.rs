//! Time-of-day constants and helpers shared by the segmentation and
//! occupancy passes.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

pub const SECS_IN_MIN: u32 = 60;
pub const MINS_IN_HOUR: u32 = 60;
pub const SECS_IN_HOUR: u32 = MINS_IN_HOUR * SECS_IN_MIN;
pub const HOURS_IN_DAY: u32 = 24;
pub const SECS_IN_DAY: u32 = SECS_IN_HOUR * HOURS_IN_DAY;
pub const DAYS_IN_WEEK: usize = 7;

/// Number of second-of-day columns in the occupancy matrix.
///
/// One short of a full day: second 86399 has no column and is clipped.
pub const OCCUPANCY_COLUMNS: usize = (SECS_IN_DAY - 1) as usize;

const DAY_ABBR: [&str; DAYS_IN_WEEK] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Seconds elapsed since midnight, ignoring sub-second precision.
pub fn seconds_since_midnight(timestamp: &NaiveDateTime) -> u32 {
    timestamp.hour() * SECS_IN_HOUR + timestamp.minute() * SECS_IN_MIN + timestamp.second()
}

/// Row index for `date`: 0 = Monday .. 6 = Sunday.
pub fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_monday() as usize
}

/// Formats a time-of-day position as `HH:MM`.
///
/// With `weekly` set, `position` indexes into the weekly profile, whose rows
/// are [`OCCUPANCY_COLUMNS`] wide, and the label is prefixed with the
/// abbreviated weekday (`Tue 13:05`).
pub fn format_time_of_day(position: u64, weekly: bool) -> String {
    let secs_in_hour = u64::from(SECS_IN_HOUR);
    let minutes_of = |second: u64| (second % secs_in_hour) / u64::from(SECS_IN_MIN);

    if weekly {
        let row_width = OCCUPANCY_COLUMNS as u64;
        let day = (position / row_width) as usize % DAYS_IN_WEEK;
        let second = position % row_width;
        format!(
            "{} {:02}:{:02}",
            DAY_ABBR[day],
            second / secs_in_hour,
            minutes_of(second)
        )
    } else {
        format!("{:02}:{:02}", position / secs_in_hour, minutes_of(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(date: &str, time: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{date} {time}"), "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_seconds_since_midnight() {
        assert_eq!(seconds_since_midnight(&at("2024-01-01", "00:00:00")), 0);
        assert_eq!(seconds_since_midnight(&at("2024-01-01", "09:00:00")), 32_400);
        assert_eq!(seconds_since_midnight(&at("2024-01-01", "23:59:59")), 86_399);
    }

    #[test]
    fn test_weekday_index_starts_on_monday() {
        // 2024-01-01 was a Monday
        assert_eq!(weekday_index(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()), 0);
        assert_eq!(weekday_index(NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()), 6);
    }

    #[test]
    fn test_format_time_of_day() {
        assert_eq!(format_time_of_day(0, false), "00:00");
        assert_eq!(format_time_of_day(13 * 3600 + 5 * 60 + 59, false), "13:05");
        assert_eq!(
            format_time_of_day(OCCUPANCY_COLUMNS as u64 + 13 * 3600 + 5 * 60, true),
            "Tue 13:05"
        );
    }

    #[test]
    fn test_weekly_labels_follow_matrix_rows() {
        let row_width = OCCUPANCY_COLUMNS as u64;

        assert_eq!(format_time_of_day(6 * row_width, true), "Sun 00:00");
        assert_eq!(format_time_of_day(6 * row_width - 1, true), "Sat 23:59");
        assert_eq!(format_time_of_day(7 * row_width - 1, true), "Sun 23:59");
    }
}
