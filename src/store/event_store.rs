use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime};

use crate::log_debug;
use crate::models::HeartbeatInput;
use crate::store::CategoryCounter;
use crate::utils::time::seconds_since_midnight;

const ENABLE_LOGS: bool = true;

/// Category recorded for heartbeats that arrive without one.
pub const OTHER_CATEGORY: &str = "Other";

/// Append-only record of heartbeats, kept as three parallel sequences in
/// arrival order.
///
/// Arrival order is assumed to be chronological; nothing here sorts or
/// rejects out-of-order heartbeats.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    categories: Vec<String>,
    dates: Vec<NaiveDate>,
    seconds: Vec<u32>,
    counter: CategoryCounter,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one heartbeat. An empty category is stored as [`OTHER_CATEGORY`]
    /// and left out of the category counts.
    pub fn append(&mut self, category: &str, timestamp: NaiveDateTime) {
        let category = if category.is_empty() {
            OTHER_CATEGORY
        } else {
            self.counter.increment(category);
            category
        };

        let date = timestamp.date();
        let second = seconds_since_midnight(&timestamp);

        let out_of_order = matches!(
            (self.dates.last(), self.seconds.last()),
            (Some(&last_date), Some(&last_second)) if (date, second) < (last_date, last_second)
        );
        if out_of_order {
            log_debug!("Heartbeat at {} {}s arrived before the previous one", date, second);
        }

        self.categories.push(category.to_string());
        self.dates.push(date);
        self.seconds.push(second);
    }

    pub fn append_input(&mut self, input: &HeartbeatInput) {
        self.append(&input.category, input.timestamp);
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn seconds(&self) -> &[u32] {
        &self.seconds
    }

    /// Counts of every non-empty category ever appended.
    pub fn category_counts(&self) -> &CategoryCounter {
        &self.counter
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Iterates `(category, date, second_of_day)` in arrival order.
    pub fn events(&self) -> impl Iterator<Item = (&str, NaiveDate, u32)> + '_ {
        self.categories
            .iter()
            .zip(&self.dates)
            .zip(&self.seconds)
            .map(|((category, &date), &second)| (category.as_str(), date, second))
    }

    /// `(second_of_day, date)` pairs for plotting raw heartbeats.
    pub fn points(&self) -> impl Iterator<Item = (u32, NaiveDate)> + '_ {
        self.seconds.iter().copied().zip(self.dates.iter().copied())
    }

    /// Replaces every stored category outside `keep` with `other_name`.
    /// Category counts are left untouched. Returns how many heartbeats
    /// were relabeled.
    pub fn relabel_outside(&mut self, keep: &HashSet<&str>, other_name: &str) -> usize {
        let mut relabeled = 0;
        for category in self.categories.iter_mut() {
            if !keep.contains(category.as_str()) {
                *category = other_name.to_string();
                relabeled += 1;
            }
        }
        relabeled
    }
}

impl Extend<HeartbeatInput> for EventStore {
    fn extend<I: IntoIterator<Item = HeartbeatInput>>(&mut self, iter: I) {
        for input in iter {
            self.append_input(&input);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(text: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_append_fills_parallel_sequences() {
        let mut store = EventStore::new();
        store.append("editor", at("2024-01-01 09:00:00"));
        store.append("browser", at("2024-01-01 09:00:30"));

        assert_eq!(store.len(), 2);
        assert_eq!(store.categories(), ["editor", "browser"]);
        assert_eq!(
            store.dates(),
            [NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(); 2]
        );
        assert_eq!(store.seconds(), [32_400, 32_430]);
    }

    #[test]
    fn test_empty_category_becomes_other_and_is_not_counted() {
        let mut store = EventStore::new();
        store.append("", at("2024-01-01 09:00:00"));
        store.append("editor", at("2024-01-01 09:01:00"));

        assert_eq!(store.categories()[0], OTHER_CATEGORY);
        assert_eq!(store.category_counts().get(OTHER_CATEGORY), 0);
        assert_eq!(store.category_counts().get("editor"), 1);
        assert_eq!(store.category_counts().len(), 1);
    }

    #[test]
    fn test_stores_are_independent() {
        let mut first = EventStore::new();
        first.append("editor", at("2024-01-01 09:00:00"));

        let second = EventStore::new();
        assert!(second.is_empty());
        assert!(second.category_counts().is_empty());
    }

    #[test]
    fn test_relabel_outside_keeps_counts() {
        let mut store = EventStore::new();
        store.append("editor", at("2024-01-01 09:00:00"));
        store.append("chat", at("2024-01-01 09:01:00"));
        store.append("", at("2024-01-01 09:02:00"));

        let keep: HashSet<&str> = ["editor", OTHER_CATEGORY].into_iter().collect();
        let relabeled = store.relabel_outside(&keep, OTHER_CATEGORY);

        assert_eq!(relabeled, 1);
        assert_eq!(store.categories(), ["editor", "Other", "Other"]);
        assert_eq!(store.category_counts().get("chat"), 1);
    }

    #[test]
    fn test_out_of_order_heartbeat_is_still_recorded() {
        let mut store = EventStore::new();
        store.append("editor", at("2024-01-02 09:00:00"));
        store.append("editor", at("2024-01-01 10:00:00"));

        assert_eq!(store.len(), 2);
        assert_eq!(store.dates()[1], NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(store.seconds(), [32_400, 36_000]);
    }
}
