use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

/// One merged run of heartbeats within a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Duration {
    pub category: String,
    pub start_second: u32,
    pub length_seconds: u32,
}

impl Duration {
    /// Last second covered by the run (inclusive).
    pub fn end_second(&self) -> u32 {
        self.start_second + self.length_seconds
    }
}

/// All runs recorded for one calendar date, in start order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayDurations {
    pub date: NaiveDate,
    pub durations: Vec<Duration>,
}

/// Date → runs, iterated in the order each date was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DurationMap {
    days: Vec<DayDurations>,
    #[serde(skip)]
    index: HashMap<NaiveDate, usize>,
}

impl DurationMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, date: NaiveDate, duration: Duration) {
        match self.index.get(&date) {
            Some(&slot) => self.days[slot].durations.push(duration),
            None => {
                self.index.insert(date, self.days.len());
                self.days.push(DayDurations {
                    date,
                    durations: vec![duration],
                });
            }
        }
    }

    pub fn get(&self, date: &NaiveDate) -> Option<&[Duration]> {
        self.index
            .get(date)
            .map(|&slot| self.days[slot].durations.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &DayDurations> {
        self.days.iter()
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().map(|day| day.date)
    }

    /// Number of distinct dates.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of runs across every date.
    pub fn total_durations(&self) -> usize {
        self.days.iter().map(|day| day.durations.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(category: &str, start_second: u32, length_seconds: u32) -> Duration {
        Duration {
            category: category.to_string(),
            start_second,
            length_seconds,
        }
    }

    #[test]
    fn test_dates_keep_first_occurrence_order() {
        let later = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let earlier = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let mut map = DurationMap::new();
        map.push(later, run("A", 10, 0));
        map.push(earlier, run("B", 20, 5));
        map.push(later, run("C", 30, 1));

        let dates: Vec<_> = map.dates().collect();
        assert_eq!(dates, vec![later, earlier]);
        assert_eq!(map.get(&later).unwrap().len(), 2);
        assert_eq!(map.total_durations(), 3);
    }

    #[test]
    fn test_serializes_as_day_list() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut map = DurationMap::new();
        map.push(date, run("A", 32_400, 600));

        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "date": "2024-01-01",
                "durations": [{"category": "A", "startSecond": 32400, "lengthSeconds": 600}]
            }])
        );
    }
}
