use chrono::NaiveDate;
use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::Validate;

use crate::error::{AqiError, Result};
use crate::generators::DateRange;
use crate::models::Station;
use crate::utils::constants::{
    CONFIG_ENV_PREFIX, DEFAULT_ANIMATION_FILE, DEFAULT_END_DATE, DEFAULT_FALLBACK_STRIDE,
    DEFAULT_FPS, DEFAULT_FRAMES_DIR, DEFAULT_FRAME_HEIGHT, DEFAULT_FRAME_WIDTH,
    DEFAULT_SELECTION_HOUR, DEFAULT_START_DATE,
};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)?)
}

/// Everything the pipeline needs. Defaults reproduce the June 2024 Delhi run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PipelineConfig {
    pub start_date: NaiveDate,

    pub end_date: NaiveDate,

    #[validate(length(min = 1))]
    pub stations: Vec<Station>,

    pub frames_dir: PathBuf,

    pub animation_path: PathBuf,

    #[validate(range(min = 1, max = 50))]
    pub fps: u32,

    #[validate(range(min = 200, max = 4000))]
    pub frame_width: u32,

    #[validate(range(min = 200, max = 4000))]
    pub frame_height: u32,

    #[validate(range(max = 23))]
    pub selection_hour: u32,

    #[validate(range(min = 1))]
    pub fallback_stride: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            start_date: parse_date(DEFAULT_START_DATE).expect("default start date is valid"),
            end_date: parse_date(DEFAULT_END_DATE).expect("default end date is valid"),
            stations: Station::default_network(),
            frames_dir: PathBuf::from(DEFAULT_FRAMES_DIR),
            animation_path: PathBuf::from(DEFAULT_ANIMATION_FILE),
            fps: DEFAULT_FPS,
            frame_width: DEFAULT_FRAME_WIDTH,
            frame_height: DEFAULT_FRAME_HEIGHT,
            selection_hour: DEFAULT_SELECTION_HOUR,
            fallback_stride: DEFAULT_FALLBACK_STRIDE,
        }
    }
}

impl PipelineConfig {
    /// Layer an optional config file and `AQI_*` environment variables over
    /// the defaults, then validate the result.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if let Some(path) = path {
            if !path.exists() {
                return Err(AqiError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            builder = builder.add_source(File::from(path));
        }

        let config: PipelineConfig = builder
            .add_source(Environment::with_prefix(CONFIG_ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.validate_all()?;
        Ok(config)
    }

    /// Field validation plus per-station checks
    pub fn validate_all(&self) -> Result<()> {
        self.validate()?;
        for station in &self.stations {
            station.validate()?;
        }
        Ok(())
    }

    pub fn date_range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }

    /// Rows a fully generated table must contain
    pub fn expected_rows(&self) -> usize {
        self.date_range().days() * self.stations.len() * crate::utils::HOURS_PER_DAY as usize
    }
}
