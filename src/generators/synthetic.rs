use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use crate::generators::DateRange;
use crate::models::{Reading, Station};
use crate::utils::constants::{
    HOURS_PER_DAY, SYNTHETIC_AQI_BASE, SYNTHETIC_AQI_HASH_SPREAD, SYNTHETIC_AQI_HOURLY_DRIFT,
};
use crate::utils::progress::ProgressReporter;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// 64-bit FNV-1a over the UTF-8 bytes of `text`.
///
/// Stable across runs, processes and platforms, so synthetic readings are
/// reproducible.
///
/// # Examples
/// ```
/// use aqi_animator::generators::stable_hash;
///
/// assert_eq!(stable_hash(""), 0xcbf29ce484222325);
/// assert_eq!(stable_hash("a"), 0xaf63dc4c8601ec8c);
/// ```
pub fn stable_hash(text: &str) -> u64 {
    text.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
    })
}

/// Dummy AQI for a station at a given hour of day:
/// `50 + 5 * hour + stable_hash(name ++ hour) % 100`
pub fn dummy_aqi(station_name: &str, hour: u32) -> u32 {
    let key = format!("{}{}", station_name, hour);
    let jitter = (stable_hash(&key) % SYNTHETIC_AQI_HASH_SPREAD) as u32;
    SYNTHETIC_AQI_BASE + SYNTHETIC_AQI_HOURLY_DRIFT * hour + jitter
}

/// Console line announcing a generated day
pub fn day_banner(date: NaiveDate) -> String {
    format!("Fetching data for {}...", date.format("%Y-%m-%d"))
}

/// Stand-in for a real air-quality API: one reading per station per hour
pub struct SyntheticGenerator {
    stations: Vec<Station>,
}

impl SyntheticGenerator {
    pub fn new(stations: Vec<Station>) -> Self {
        Self { stations }
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// All readings for `date`, hour-major then in station order
    pub fn generate_day(&self, date: NaiveDate) -> Vec<Reading> {
        let midnight = NaiveDateTime::new(date, NaiveTime::MIN);
        let mut readings = Vec::with_capacity(self.stations.len() * HOURS_PER_DAY as usize);

        for hour in 0..HOURS_PER_DAY {
            let timestamp = midnight + chrono::Duration::hours(hour as i64);
            for station in &self.stations {
                readings.push(Reading::new(
                    station,
                    timestamp,
                    dummy_aqi(&station.name, hour),
                ));
            }
        }

        readings
    }

    /// One batch per day in `range`, announcing each day on the console
    pub fn generate_range(
        &self,
        range: DateRange,
        progress: Option<&ProgressReporter>,
    ) -> Vec<Vec<Reading>> {
        let mut batches = Vec::with_capacity(range.days());

        for date in range {
            if let Some(progress) = progress {
                progress.println(&day_banner(date));
            }

            let batch = self.generate_day(date);
            debug!(%date, readings = batch.len(), "generated synthetic readings");
            batches.push(batch);
        }

        batches
    }
}

impl Default for SyntheticGenerator {
    fn default() -> Self {
        Self::new(Station::default_network())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use std::collections::HashSet;

    fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    #[test]
    fn test_stable_hash_known_values() {
        // Reference FNV-1a 64 vectors
        assert_eq!(stable_hash(""), 0xcbf29ce484222325);
        assert_eq!(stable_hash("a"), 0xaf63dc4c8601ec8c);
        assert_eq!(stable_hash("foobar"), 0x85944171f73967e8);
    }

    #[test]
    fn test_dummy_aqi_formula() {
        for station in Station::default_network() {
            for hour in 0..HOURS_PER_DAY {
                let aqi = dummy_aqi(&station.name, hour);
                let jitter = (stable_hash(&format!("{}{}", station.name, hour)) % 100) as u32;

                assert_eq!(aqi, 50 + 5 * hour + jitter);
                assert!((50..=264).contains(&aqi));
            }
        }
    }

    #[test]
    fn test_dummy_aqi_is_deterministic() {
        let first: Vec<u32> = (0..24).map(|h| dummy_aqi("ITO", h)).collect();
        let second: Vec<u32> = (0..24).map(|h| dummy_aqi("ITO", h)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_day_shape() {
        let generator = SyntheticGenerator::default();
        let readings = generator.generate_day(june(1));

        assert_eq!(readings.len(), 120);

        let keys: HashSet<(String, u32)> = readings
            .iter()
            .map(|r| (r.station.clone(), r.timestamp.hour()))
            .collect();
        assert_eq!(keys.len(), 120);

        assert!(readings.iter().all(|r| r.timestamp.date() == june(1)));
        assert_eq!(readings[0].station, "Anand Vihar");
        assert_eq!(readings[0].timestamp.hour(), 0);
        assert_eq!(readings[119].station, "Delhi Cantt");
        assert_eq!(readings[119].timestamp.hour(), 23);
    }

    #[test]
    fn test_same_hour_same_value_across_days() {
        let generator = SyntheticGenerator::default();
        let day_one = generator.generate_day(june(1));
        let day_two = generator.generate_day(june(2));

        let aqi_one: Vec<u32> = day_one.iter().map(|r| r.aqi).collect();
        let aqi_two: Vec<u32> = day_two.iter().map(|r| r.aqi).collect();
        assert_eq!(aqi_one, aqi_two);
    }

    #[test]
    fn test_day_banner() {
        assert_eq!(day_banner(june(1)), "Fetching data for 2024-06-01...");
        assert_eq!(
            day_banner(NaiveDate::from_ymd_opt(2024, 12, 9).unwrap()),
            "Fetching data for 2024-12-09..."
        );
    }

    #[test]
    fn test_generate_range() {
        let generator = SyntheticGenerator::default();
        let progress = ProgressReporter::silent();

        let batches = generator.generate_range(DateRange::new(june(1), june(3)), Some(&progress));
        assert_eq!(batches.len(), 3);
        assert!(batches.iter().all(|b| b.len() == 120));
        assert_eq!(batches[2][0].timestamp.date(), june(3));

        let empty = generator.generate_range(DateRange::new(june(3), june(1)), None);
        assert!(empty.is_empty());
    }
}
