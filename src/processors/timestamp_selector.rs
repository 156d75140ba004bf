use chrono::{NaiveDateTime, Timelike};
use tracing::{info, warn};

use crate::models::ReadingTable;
use crate::utils::constants::{DEFAULT_FALLBACK_STRIDE, DEFAULT_SELECTION_HOUR};

/// Picks which timestamps get a rendered frame
pub struct TimestampSelector {
    hour: u32,
    fallback_stride: usize,
}

impl TimestampSelector {
    pub fn new() -> Self {
        Self {
            hour: DEFAULT_SELECTION_HOUR,
            fallback_stride: DEFAULT_FALLBACK_STRIDE,
        }
    }

    pub fn with_hour(mut self, hour: u32) -> Self {
        self.hour = hour;
        self
    }

    pub fn with_fallback_stride(mut self, stride: usize) -> Self {
        self.fallback_stride = stride.max(1);
        self
    }

    /// Distinct timestamps at the configured hour of day. When none match,
    /// every `fallback_stride`-th distinct timestamp is taken instead,
    /// starting with the first.
    pub fn select(&self, table: &ReadingTable) -> Vec<NaiveDateTime> {
        let distinct = table.distinct_timestamps();

        let at_hour: Vec<NaiveDateTime> = distinct
            .iter()
            .copied()
            .filter(|ts| ts.hour() == self.hour)
            .collect();

        if !at_hour.is_empty() {
            info!(hour = self.hour, selected = at_hour.len(), "selected timestamps");
            return at_hour;
        }

        let sampled: Vec<NaiveDateTime> = distinct
            .into_iter()
            .step_by(self.fallback_stride)
            .collect();

        if sampled.is_empty() {
            warn!("no timestamps available for rendering");
        } else {
            warn!(
                hour = self.hour,
                stride = self.fallback_stride,
                selected = sampled.len(),
                "no readings at the selection hour, sampling by stride"
            );
        }

        sampled
    }
}

impl Default for TimestampSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{DateRange, SyntheticGenerator};
    use crate::models::{Reading, Station};
    use crate::processors::TableAssembler;
    use chrono::NaiveDate;

    fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    fn generated_table(days: u32) -> ReadingTable {
        let generator = SyntheticGenerator::default();
        let batches = generator.generate_range(DateRange::new(june(1), june(days)), None);
        TableAssembler::new().assemble(batches)
    }

    #[test]
    fn test_selects_noon_each_day() {
        let table = generated_table(3);
        let selected = TimestampSelector::new().select(&table);

        assert_eq!(
            selected,
            vec![
                june(1).and_hms_opt(12, 0, 0).unwrap(),
                june(2).and_hms_opt(12, 0, 0).unwrap(),
                june(3).and_hms_opt(12, 0, 0).unwrap(),
            ]
        );
    }

    #[test]
    fn test_falls_back_to_stride() {
        let station = Station::new("ITO", 28.6186, 77.2307);
        // Two days of half-past readings with the 12:30 slots removed
        let rows: Vec<Vec<Reading>> = vec![(0..48)
            .filter(|h| h % 24 != 12)
            .map(|h| {
                let ts = june(1).and_hms_opt(0, 30, 0).unwrap() + chrono::Duration::hours(h);
                Reading::new(&station, ts, 100)
            })
            .collect()];
        let table = TableAssembler::new().assemble(rows);
        let distinct = table.distinct_timestamps();

        let selected = TimestampSelector::new().select(&table);
        assert_eq!(selected, vec![distinct[0], distinct[24]]);

        let selected = TimestampSelector::new()
            .with_fallback_stride(10)
            .select(&table);
        assert_eq!(selected.len(), 5);
        assert_eq!(selected[1], distinct[10]);
    }

    #[test]
    fn test_custom_hour() {
        let table = generated_table(2);
        let selected = TimestampSelector::new().with_hour(6).select(&table);

        assert_eq!(selected.len(), 2);
        assert!(selected.iter().all(|ts| ts.hour() == 6));
    }

    #[test]
    fn test_empty_table_selects_nothing() {
        let selected = TimestampSelector::new().select(&ReadingTable::default());
        assert!(selected.is_empty());
    }
}
