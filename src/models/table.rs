use chrono::NaiveDateTime;
use serde::Serialize;

use crate::models::Reading;

/// Readings sorted by (timestamp, station). Read-only once assembled.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ReadingTable {
    rows: Vec<Reading>,
}

impl ReadingTable {
    /// Wrap rows that are already in (timestamp, station) order.
    /// Use `TableAssembler` to build a table from unsorted batches.
    pub(crate) fn from_sorted(rows: Vec<Reading>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Reading] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Reading> {
        self.rows.iter()
    }

    /// Sorted, unique timestamps present in the table
    pub fn distinct_timestamps(&self) -> Vec<NaiveDateTime> {
        let mut timestamps: Vec<NaiveDateTime> = self.rows.iter().map(|r| r.timestamp).collect();
        timestamps.dedup();
        timestamps
    }

    /// All readings sharing `timestamp`; empty when none match
    pub fn readings_at(&self, timestamp: NaiveDateTime) -> &[Reading] {
        let start = self.rows.partition_point(|r| r.timestamp < timestamp);
        let end = self.rows.partition_point(|r| r.timestamp <= timestamp);
        &self.rows[start..end]
    }

    /// Sorted, unique station names present in the table
    pub fn station_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rows.iter().map(|r| r.station.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}

impl<'a> IntoIterator for &'a ReadingTable {
    type Item = &'a Reading;
    type IntoIter = std::slice::Iter<'a, Reading>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
