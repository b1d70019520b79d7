//! Week-grid time model.
//!
//! Translates between external time labels (day name, hour-of-day) and
//! dense internal integer coordinates (day index, block index), and
//! validates that a duration-block run fits inside the week grid.
//!
//! # Index Convention
//! Indices are dense, contiguous, and 1-based: days span
//! `1..=days_count`, blocks span `1..=blocks_per_day`. A span of
//! `duration` blocks starting at `start_block` is valid iff
//! `start_block + duration - 1 <= blocks_per_day` — spans never wrap
//! across days.

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// Immutable mapping between time labels and dense grid coordinates.
///
/// Built once from the observed day/hour labels; two runs over identical
/// input produce identical index assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeModel {
    /// Day labels in canonical week order. Position + 1 = day index.
    day_labels: Vec<String>,
    /// Hour labels in ascending numeric order. Position + 1 = block index.
    hour_labels: Vec<u32>,
}

impl TimeModel {
    /// Creates a time model from already-ordered label sequences.
    ///
    /// The caller supplies the canonical orders; duplicates are dropped,
    /// keeping the first occurrence.
    pub fn new(day_labels: Vec<String>, hour_labels: Vec<u32>) -> Self {
        let mut days: Vec<String> = Vec::with_capacity(day_labels.len());
        for day in day_labels {
            if !days.contains(&day) {
                days.push(day);
            }
        }
        let mut hours: Vec<u32> = Vec::with_capacity(hour_labels.len());
        for hour in hour_labels {
            if !hours.contains(&hour) {
                hours.push(hour);
            }
        }
        Self {
            day_labels: days,
            hour_labels: hours,
        }
    }

    /// Builds a time model from a raw availability relation.
    ///
    /// Collects the distinct day and hour labels observed, orders days by
    /// the supplied canonical week order and hours numerically, and assigns
    /// dense indices in that order.
    ///
    /// # Errors
    /// `UnknownDayLabel` if an observed day is missing from `day_order`.
    pub fn from_availability<'a, I>(slots: I, day_order: &[&str]) -> Result<Self, ScheduleError>
    where
        I: IntoIterator<Item = (&'a str, u32)>,
    {
        let mut days: Vec<String> = Vec::new();
        let mut hours: Vec<u32> = Vec::new();

        for (day, hour) in slots {
            if !days.iter().any(|d| d == day) {
                if !day_order.contains(&day) {
                    return Err(ScheduleError::UnknownDayLabel(day.to_string()));
                }
                days.push(day.to_string());
            }
            if !hours.contains(&hour) {
                hours.push(hour);
            }
        }

        // Positions exist: every day was checked against day_order above.
        days.sort_by_key(|d| day_order.iter().position(|&c| c == d.as_str()));
        hours.sort_unstable();

        Ok(Self {
            day_labels: days,
            hour_labels: hours,
        })
    }

    /// Number of days in the week grid.
    #[inline]
    pub fn days_count(&self) -> usize {
        self.day_labels.len()
    }

    /// Number of blocks per day.
    #[inline]
    pub fn blocks_per_day(&self) -> usize {
        self.hour_labels.len()
    }

    /// Day labels in index order.
    pub fn day_labels(&self) -> &[String] {
        &self.day_labels
    }

    /// Hour labels in index order.
    pub fn hour_labels(&self) -> &[u32] {
        &self.hour_labels
    }

    /// Whether a `duration`-block span starting at (`day`, `start_block`)
    /// fits inside the grid.
    ///
    /// Holds iff `1 <= day <= days_count`, `1 <= start_block`, and
    /// `start_block + duration - 1 <= blocks_per_day`. Zero-duration
    /// spans are never valid.
    pub fn is_valid_slot(&self, day: usize, start_block: usize, duration: usize) -> bool {
        day >= 1
            && day <= self.days_count()
            && start_block >= 1
            && duration >= 1
            && start_block + duration - 1 <= self.blocks_per_day()
    }

    /// Maps external labels to internal `(day_index, block_index)`.
    ///
    /// # Errors
    /// `UnknownDayLabel` / `UnknownHourLabel` if the label was not part
    /// of the model's built label sets.
    pub fn to_internal(&self, day_label: &str, hour: u32) -> Result<(usize, usize), ScheduleError> {
        let day = self
            .day_labels
            .iter()
            .position(|d| d == day_label)
            .ok_or_else(|| ScheduleError::UnknownDayLabel(day_label.to_string()))?;
        let block = self
            .hour_labels
            .iter()
            .position(|&h| h == hour)
            .ok_or(ScheduleError::UnknownHourLabel(hour))?;
        Ok((day + 1, block + 1))
    }

    /// Maps internal `(day_index, block_index)` back to external labels.
    ///
    /// # Errors
    /// `DayIndexOutOfRange` / `BlockIndexOutOfRange` outside
    /// `[1, days_count]` / `[1, blocks_per_day]`.
    pub fn to_external(&self, day: usize, block: usize) -> Result<(&str, u32), ScheduleError> {
        if day < 1 || day > self.days_count() {
            return Err(ScheduleError::DayIndexOutOfRange {
                day,
                days: self.days_count(),
            });
        }
        if block < 1 || block > self.blocks_per_day() {
            return Err(ScheduleError::BlockIndexOutOfRange {
                block,
                blocks: self.blocks_per_day(),
            });
        }
        Ok((&self.day_labels[day - 1], self.hour_labels[block - 1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEEK: [&str; 5] = ["Mon", "Tue", "Wed", "Thu", "Fri"];

    fn sample_model() -> TimeModel {
        TimeModel::new(
            WEEK.iter().map(|d| d.to_string()).collect(),
            vec![7, 8, 9, 10],
        )
    }

    #[test]
    fn test_counts() {
        let tm = sample_model();
        assert_eq!(tm.days_count(), 5);
        assert_eq!(tm.blocks_per_day(), 4);
    }

    #[test]
    fn test_new_deduplicates() {
        let tm = TimeModel::new(
            vec!["Mon".into(), "Tue".into(), "Mon".into()],
            vec![7, 8, 7],
        );
        assert_eq!(tm.days_count(), 2);
        assert_eq!(tm.blocks_per_day(), 2);
    }

    #[test]
    fn test_round_trip() {
        let tm = sample_model();
        let (day, block) = tm.to_internal("Tue", 9).unwrap();
        assert_eq!((day, block), (2, 3));
        assert_eq!(tm.to_external(day, block).unwrap(), ("Tue", 9));
    }

    #[test]
    fn test_unknown_labels() {
        let tm = sample_model();
        assert_eq!(
            tm.to_internal("Sun", 7),
            Err(ScheduleError::UnknownDayLabel("Sun".into()))
        );
        assert_eq!(
            tm.to_internal("Mon", 23),
            Err(ScheduleError::UnknownHourLabel(23))
        );
    }

    #[test]
    fn test_indices_out_of_range() {
        let tm = sample_model();
        assert_eq!(
            tm.to_external(0, 1),
            Err(ScheduleError::DayIndexOutOfRange { day: 0, days: 5 })
        );
        assert_eq!(
            tm.to_external(6, 1),
            Err(ScheduleError::DayIndexOutOfRange { day: 6, days: 5 })
        );
        assert_eq!(
            tm.to_external(1, 5),
            Err(ScheduleError::BlockIndexOutOfRange { block: 5, blocks: 4 })
        );
    }

    #[test]
    fn test_valid_slot() {
        let tm = sample_model();
        assert!(tm.is_valid_slot(1, 1, 4)); // fills the whole day
        assert!(tm.is_valid_slot(5, 3, 2)); // ends exactly at the last block
        assert!(!tm.is_valid_slot(5, 3, 3)); // runs past the last block
        assert!(!tm.is_valid_slot(0, 1, 1)); // day below range
        assert!(!tm.is_valid_slot(6, 1, 1)); // day above range
        assert!(!tm.is_valid_slot(1, 0, 1)); // block below range
        assert!(!tm.is_valid_slot(1, 1, 0)); // zero duration
    }

    #[test]
    fn test_from_availability_orders_labels() {
        // Observed out of order; construction must sort deterministically.
        let slots = vec![("Wed", 9), ("Mon", 8), ("Wed", 7), ("Mon", 9)];
        let tm = TimeModel::from_availability(slots, &WEEK).unwrap();

        assert_eq!(tm.day_labels(), &["Mon".to_string(), "Wed".to_string()]);
        assert_eq!(tm.hour_labels(), &[7, 8, 9]);
        assert_eq!(tm.to_internal("Mon", 7).unwrap(), (1, 1));
        assert_eq!(tm.to_internal("Wed", 9).unwrap(), (2, 3));
    }

    #[test]
    fn test_from_availability_rejects_unknown_day() {
        let slots = vec![("Mon", 7), ("Funday", 8)];
        let err = TimeModel::from_availability(slots, &WEEK).unwrap_err();
        assert_eq!(err, ScheduleError::UnknownDayLabel("Funday".into()));
    }

    #[test]
    fn test_from_availability_deterministic() {
        let slots = || vec![("Tue", 8), ("Mon", 10), ("Tue", 7)];
        let a = TimeModel::from_availability(slots(), &WEEK).unwrap();
        let b = TimeModel::from_availability(slots(), &WEEK).unwrap();
        assert_eq!(a, b);
    }
}
