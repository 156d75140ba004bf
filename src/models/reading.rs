use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::{AqiCategory, AqiScale, Station};

/// Timestamp format used for exported tables
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    #[serde(rename = "Station")]
    pub station: String,

    #[serde(rename = "Latitude")]
    pub latitude: f64,

    #[serde(rename = "Longitude")]
    pub longitude: f64,

    #[serde(rename = "Timestamp", with = "timestamp_format")]
    pub timestamp: NaiveDateTime,

    #[serde(rename = "AQI")]
    pub aqi: u32,
}

impl Reading {
    pub fn new(station: &Station, timestamp: NaiveDateTime, aqi: u32) -> Self {
        Self {
            station: station.name.clone(),
            latitude: station.latitude,
            longitude: station.longitude,
            timestamp,
            aqi,
        }
    }

    pub fn category<'a>(&self, scale: &'a AqiScale) -> &'a AqiCategory {
        scale.categorize(self.aqi as f64)
    }
}

mod timestamp_format {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&timestamp.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
