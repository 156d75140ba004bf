use tracing::info;

use crate::models::{Reading, ReadingTable};

/// Flattens per-day batches into one (timestamp, station)-ordered table
pub struct TableAssembler;

impl TableAssembler {
    pub fn new() -> Self {
        Self
    }

    /// Concatenate every batch and sort by timestamp, then station name.
    /// Every record is kept; duplicates are not merged.
    pub fn assemble(&self, batches: Vec<Vec<Reading>>) -> ReadingTable {
        let total: usize = batches.iter().map(Vec::len).sum();
        let mut rows = Vec::with_capacity(total);

        for batch in batches {
            rows.extend(batch);
        }

        rows.sort_by(|a, b| {
            a.timestamp
                .cmp(&b.timestamp)
                .then_with(|| a.station.cmp(&b.station))
        });

        info!(rows = rows.len(), "assembled reading table");
        ReadingTable::from_sorted(rows)
    }
}

impl Default for TableAssembler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{DateRange, SyntheticGenerator};
    use crate::models::Station;
    use chrono::{NaiveDate, NaiveDateTime};

    fn ts(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_assemble_sorts_by_timestamp_then_station() {
        let rohini = Station::new("Rohini", 28.7325, 77.1197);
        let ito = Station::new("ITO", 28.6186, 77.2307);

        let batches = vec![
            vec![
                Reading::new(&rohini, ts(2, 0), 1),
                Reading::new(&ito, ts(2, 0), 2),
            ],
            vec![
                Reading::new(&rohini, ts(1, 5), 3),
                Reading::new(&ito, ts(1, 5), 4),
            ],
        ];

        let table = TableAssembler::new().assemble(batches);
        let order: Vec<u32> = table.iter().map(|r| r.aqi).collect();
        assert_eq!(order, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_assemble_keeps_duplicates() {
        let ito = Station::new("ITO", 28.6186, 77.2307);
        let batches = vec![
            vec![Reading::new(&ito, ts(1, 0), 10)],
            vec![Reading::new(&ito, ts(1, 0), 10)],
        ];

        let table = TableAssembler::new().assemble(batches);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_assemble_generated_month() {
        let generator = SyntheticGenerator::default();
        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        );

        let table = TableAssembler::new().assemble(generator.generate_range(range, None));
        assert_eq!(table.len(), 30 * 5 * 24);

        for pair in table.rows().windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            assert!(prev.timestamp <= next.timestamp);
            if prev.timestamp == next.timestamp {
                assert!(prev.station < next.station);
            }
        }
    }

    #[test]
    fn test_assemble_nothing() {
        let table = TableAssembler::new().assemble(Vec::new());
        assert!(table.is_empty());
    }
}
