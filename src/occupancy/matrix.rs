use std::fmt::Debug;

use serde::Serialize;

use crate::error::{HeartbeatError, Result};
use crate::utils::time::{DAYS_IN_WEEK, OCCUPANCY_COLUMNS};

/// Integer width used for occupancy cells.
pub trait OccupancyCount: Copy + Default + Eq + Debug + Serialize + Into<u64> {
    fn checked_increment(self) -> Option<Self>;

    fn as_u64(self) -> u64 {
        self.into()
    }
}

macro_rules! impl_occupancy_count {
    ($($ty:ty),*) => {
        $(
            impl OccupancyCount for $ty {
                fn checked_increment(self) -> Option<Self> {
                    self.checked_add(1)
                }
            }
        )*
    };
}

impl_occupancy_count!(u16, u32, u64);

pub type DefaultCount = u32;

/// Dense weekday × second-of-day counts of how many runs cover each second.
///
/// Rows are weekdays (0 = Monday), columns are seconds 0..=86398.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyMatrix<C: OccupancyCount = DefaultCount> {
    weekdays: usize,
    columns: usize,
    counts: Vec<C>,
}

impl<C: OccupancyCount> Default for OccupancyMatrix<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: OccupancyCount> OccupancyMatrix<C> {
    pub fn new() -> Self {
        Self {
            weekdays: DAYS_IN_WEEK,
            columns: OCCUPANCY_COLUMNS,
            counts: vec![C::default(); DAYS_IN_WEEK * OCCUPANCY_COLUMNS],
        }
    }

    pub fn weekdays(&self) -> usize {
        self.weekdays
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn get(&self, weekday: usize, second: usize) -> Option<C> {
        if weekday >= self.weekdays || second >= self.columns {
            return None;
        }
        Some(self.counts[weekday * self.columns + second])
    }

    pub fn row(&self, weekday: usize) -> &[C] {
        let start = weekday * self.columns;
        &self.counts[start..start + self.columns]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[C]> {
        self.counts.chunks(self.columns)
    }

    /// Adds one to every cell of `weekday` from `start` to `end` inclusive.
    /// Seconds past the last column are clipped.
    pub fn increment_span(&mut self, weekday: usize, start: u32, end: u32) -> Result<()> {
        if weekday >= self.weekdays {
            return Err(HeartbeatError::InvalidArgument(format!(
                "weekday {weekday} is out of range"
            )));
        }

        let start = start as usize;
        let end = (end as usize).min(self.columns - 1);
        if start > end {
            return Ok(());
        }

        let row_offset = weekday * self.columns;
        for second in start..=end {
            let cell = &mut self.counts[row_offset + second];
            *cell = cell
                .checked_increment()
                .ok_or(HeartbeatError::CountOverflow { weekday, second })?;
        }
        Ok(())
    }

    /// Sum of every cell.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|count| count.as_u64()).sum()
    }

    /// The seven rows laid end to end, Monday first.
    pub fn weekly_profile(&self) -> Vec<u64> {
        self.counts.iter().map(|count| count.as_u64()).collect()
    }

    /// Column sums across all weekdays.
    pub fn daily_profile(&self) -> Vec<u64> {
        let mut profile = vec![0u64; self.columns];
        for row in self.rows() {
            for (total, &count) in profile.iter_mut().zip(row) {
                *total += count.as_u64();
            }
        }
        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_span_is_inclusive() {
        let mut matrix: OccupancyMatrix = OccupancyMatrix::new();
        matrix.increment_span(2, 10, 12).unwrap();

        assert_eq!(matrix.get(2, 9), Some(0));
        assert_eq!(matrix.get(2, 10), Some(1));
        assert_eq!(matrix.get(2, 12), Some(1));
        assert_eq!(matrix.get(2, 13), Some(0));
        assert_eq!(matrix.total(), 3);
    }

    #[test]
    fn test_last_second_of_day_is_clipped() {
        let mut matrix: OccupancyMatrix = OccupancyMatrix::new();
        matrix.increment_span(0, 86_397, 86_399).unwrap();

        assert_eq!(matrix.total(), 2);
        assert_eq!(matrix.get(0, 86_399), None);
    }

    #[test]
    fn test_projections() {
        let mut matrix: OccupancyMatrix = OccupancyMatrix::new();
        matrix.increment_span(0, 5, 5).unwrap();
        matrix.increment_span(6, 5, 6).unwrap();

        let daily = matrix.daily_profile();
        assert_eq!(daily.len(), OCCUPANCY_COLUMNS);
        assert_eq!(daily[5], 2);
        assert_eq!(daily[6], 1);

        let weekly = matrix.weekly_profile();
        assert_eq!(weekly.len(), DAYS_IN_WEEK * OCCUPANCY_COLUMNS);
        assert_eq!(weekly[5], 1);
        assert_eq!(weekly[6 * OCCUPANCY_COLUMNS + 6], 1);
    }

    #[test]
    fn test_overflow_is_reported() {
        let mut matrix: OccupancyMatrix<u16> = OccupancyMatrix::new();
        for _ in 0..u16::MAX {
            matrix.increment_span(1, 0, 0).unwrap();
        }

        assert_eq!(
            matrix.increment_span(1, 0, 0),
            Err(HeartbeatError::CountOverflow {
                weekday: 1,
                second: 0
            })
        );
    }
}
