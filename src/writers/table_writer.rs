use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{AqiError, Result};
use crate::models::ReadingTable;
use crate::utils::constants::{FORMAT_CSV, FORMAT_JSON};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn parse(format: &str) -> Result<Self> {
        match format.to_lowercase().as_str() {
            FORMAT_CSV => Ok(ExportFormat::Csv),
            FORMAT_JSON => Ok(ExportFormat::Json),
            _ => Err(AqiError::Config(format!(
                "Unsupported export format: {}",
                format
            ))),
        }
    }
}

/// Exports the reading table for inspection outside the pipeline
pub struct TableWriter {
    format: ExportFormat,
}

impl TableWriter {
    pub fn new() -> Self {
        Self {
            format: ExportFormat::Csv,
        }
    }

    pub fn with_format(mut self, format: &str) -> Result<Self> {
        self.format = ExportFormat::parse(format)?;
        Ok(self)
    }

    pub fn format(&self) -> ExportFormat {
        self.format
    }

    pub fn write_table(&self, table: &ReadingTable, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let file = BufWriter::new(File::create(path)?);

        match self.format {
            ExportFormat::Csv => {
                let mut writer = csv::Writer::from_writer(file);
                for reading in table {
                    writer.serialize(reading)?;
                }
                writer.flush()?;
            }
            ExportFormat::Json => {
                serde_json::to_writer_pretty(file, table)?;
            }
        }

        Ok(())
    }
}

impl Default for TableWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::SyntheticGenerator;
    use crate::models::Reading;
    use crate::processors::TableAssembler;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn one_day_table() -> ReadingTable {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let batch = SyntheticGenerator::default().generate_day(date);
        TableAssembler::new().assemble(vec![batch])
    }

    #[test]
    fn test_write_csv() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("readings.csv");
        let table = one_day_table();

        TableWriter::new().write_table(&table, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Station,Latitude,Longitude,Timestamp,AQI"
        );
        assert!(lines.next().unwrap().starts_with("Anand Vihar,28.6479,77.3194,2024-06-01 00:00:00,"));
        assert_eq!(content.lines().count(), 121);

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let parsed: Vec<Reading> = reader.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(parsed.as_slice(), table.rows());
    }

    #[test]
    fn test_write_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("readings.json");
        let table = one_day_table();

        TableWriter::new()
            .with_format("JSON")
            .unwrap()
            .write_table(&table, &path)
            .unwrap();

        let parsed: Vec<Reading> =
            serde_json::from_reader(File::open(&path).unwrap()).unwrap();
        assert_eq!(parsed.len(), 120);
        assert_eq!(parsed[0].station, "Anand Vihar");
    }

    #[test]
    fn test_unsupported_format() {
        assert!(TableWriter::new().with_format("parquet").is_err());
    }
}
