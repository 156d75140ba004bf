use chrono::NaiveDateTime;
use std::collections::BTreeMap;

use crate::models::{AqiScale, ReadingTable};

#[derive(Debug, Clone)]
pub struct TableReport {
    pub total_rows: usize,
    pub expected_rows: Option<usize>,
    pub distinct_timestamps: usize,
    pub ordering_violations: Vec<OrderingViolation>,
    pub station_statistics: BTreeMap<String, StationStatistics>,
    /// Row count per category label, in scale order
    pub category_counts: Vec<(String, usize)>,
}

impl TableReport {
    pub fn row_count_matches(&self) -> bool {
        self.expected_rows
            .map_or(true, |expected| expected == self.total_rows)
    }

    pub fn is_sorted(&self) -> bool {
        self.ordering_violations.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct OrderingViolation {
    pub row: usize,
    pub timestamp: NaiveDateTime,
    pub station: String,
    pub details: String,
}

#[derive(Debug, Clone, Default)]
pub struct StationStatistics {
    pub readings: usize,
    pub min_aqi: Option<u32>,
    pub max_aqi: Option<u32>,
    pub mean_aqi: f64,
}

/// Consistency checks over an assembled table
pub struct TableChecker {
    expected_rows: Option<usize>,
}

impl TableChecker {
    pub fn new() -> Self {
        Self {
            expected_rows: None,
        }
    }

    /// Expect `days x stations x hours_per_day` rows
    pub fn with_expected_rows(expected_rows: usize) -> Self {
        Self {
            expected_rows: Some(expected_rows),
        }
    }

    pub fn check(&self, table: &ReadingTable, scale: &AqiScale) -> TableReport {
        let mut report = TableReport {
            total_rows: table.len(),
            expected_rows: self.expected_rows,
            distinct_timestamps: table.distinct_timestamps().len(),
            ordering_violations: Vec::new(),
            station_statistics: BTreeMap::new(),
            category_counts: scale
                .labels()
                .into_iter()
                .map(|label| (label.to_string(), 0))
                .collect(),
        };

        for (i, pair) in table.rows().windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            let in_order = prev.timestamp < next.timestamp
                || (prev.timestamp == next.timestamp && prev.station <= next.station);

            if !in_order {
                report.ordering_violations.push(OrderingViolation {
                    row: i + 1,
                    timestamp: next.timestamp,
                    station: next.station.clone(),
                    details: format!(
                        "({}, {}) follows ({}, {})",
                        next.timestamp, next.station, prev.timestamp, prev.station
                    ),
                });
            }
        }

        let mut sums: BTreeMap<&str, u64> = BTreeMap::new();
        for reading in table {
            let stats = report
                .station_statistics
                .entry(reading.station.clone())
                .or_default();

            stats.readings += 1;
            stats.min_aqi = Some(stats.min_aqi.map_or(reading.aqi, |v| v.min(reading.aqi)));
            stats.max_aqi = Some(stats.max_aqi.map_or(reading.aqi, |v| v.max(reading.aqi)));
            *sums.entry(reading.station.as_str()).or_default() += reading.aqi as u64;

            let index = scale.index_of(reading.aqi as f64);
            report.category_counts[index].1 += 1;
        }

        for (station, stats) in report.station_statistics.iter_mut() {
            let sum = sums.get(station.as_str()).copied().unwrap_or(0);
            stats.mean_aqi = sum as f64 / stats.readings as f64;
        }

        report
    }

    /// Generate a summary report
    pub fn generate_summary(&self, report: &TableReport) -> String {
        let mut summary = String::new();

        summary.push_str("=== Reading Table Report ===\n");
        summary.push_str(&format!("Total Rows: {}\n", report.total_rows));
        if let Some(expected) = report.expected_rows {
            summary.push_str(&format!(
                "Expected Rows: {} ({})\n",
                expected,
                if report.row_count_matches() {
                    "ok"
                } else {
                    "MISMATCH"
                }
            ));
        }
        summary.push_str(&format!(
            "Distinct Timestamps: {}\n",
            report.distinct_timestamps
        ));
        summary.push_str(&format!(
            "Ordering Violations: {}\n",
            report.ordering_violations.len()
        ));

        if !report.station_statistics.is_empty() {
            summary.push_str("\nStations:\n");
            for (station, stats) in &report.station_statistics {
                summary.push_str(&format!(
                    "  {:<16} {:>5} readings, AQI min={} max={} mean={:.1}\n",
                    station,
                    stats.readings,
                    stats.min_aqi.unwrap_or(0),
                    stats.max_aqi.unwrap_or(0),
                    stats.mean_aqi
                ));
            }
        }

        if report.total_rows > 0 {
            summary.push_str("\nCategories:\n");
            for (label, count) in &report.category_counts {
                summary.push_str(&format!(
                    "  {:<13} {:>6} ({:.1}%)\n",
                    label,
                    count,
                    100.0 * *count as f64 / report.total_rows as f64
                ));
            }
        }

        if !report.ordering_violations.is_empty() {
            summary.push_str("\nTop 10 Ordering Violations:\n");
            for (i, violation) in report.ordering_violations.iter().take(10).enumerate() {
                summary.push_str(&format!(
                    "  {}. Row {}: {}\n",
                    i + 1,
                    violation.row,
                    violation.details
                ));
            }
        }

        summary
    }
}

impl Default for TableChecker {
    fn default() -> Self {
        Self::new()
    }
}
