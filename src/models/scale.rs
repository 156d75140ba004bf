use serde::Serialize;

use crate::error::{AqiError, Result};
use crate::utils::constants::{AQI_BIN_EDGES, AQI_COLORS, AQI_LABELS};

/// One labelled bin of the AQI scale, `[lower, upper)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AqiCategory {
    pub label: String,
    pub lower: f64,
    pub upper: f64,
    pub color: [u8; 3],
}

impl AqiCategory {
    pub fn midpoint(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }
}

/// Ordered, contiguous set of AQI categories
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AqiScale {
    categories: Vec<AqiCategory>,
}

impl AqiScale {
    /// Good, Satisfactory, Moderate, Poor, Very Poor, Severe over 0..500
    pub fn standard() -> Self {
        let labels: Vec<&str> = AQI_LABELS.to_vec();
        let colors: Vec<&str> = AQI_COLORS.to_vec();
        Self::new(&AQI_BIN_EDGES, &labels, &colors).expect("built-in AQI scale is valid")
    }

    pub fn new(edges: &[f64], labels: &[&str], colors: &[&str]) -> Result<Self> {
        if labels.is_empty() || edges.len() != labels.len() + 1 {
            return Err(AqiError::Config(format!(
                "AQI scale needs one more edge than labels, got {} edges and {} labels",
                edges.len(),
                labels.len()
            )));
        }

        if colors.len() != labels.len() {
            return Err(AqiError::Config(format!(
                "AQI scale needs one color per label, got {} colors and {} labels",
                colors.len(),
                labels.len()
            )));
        }

        if edges.windows(2).any(|w| w[0] >= w[1]) {
            return Err(AqiError::Config(format!(
                "AQI bin edges must be strictly increasing: {:?}",
                edges
            )));
        }

        let categories = labels
            .iter()
            .zip(colors)
            .enumerate()
            .map(|(i, (label, color))| {
                Ok(AqiCategory {
                    label: label.to_string(),
                    lower: edges[i],
                    upper: edges[i + 1],
                    color: parse_hex_color(color)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[AqiCategory] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn min(&self) -> f64 {
        self.categories[0].lower
    }

    pub fn max(&self) -> f64 {
        self.categories[self.categories.len() - 1].upper
    }

    /// Map a value onto its bin. Bins are right-open except the last one;
    /// values outside the scale clip to the first or last bin.
    pub fn categorize(&self, value: f64) -> &AqiCategory {
        self.categories
            .iter()
            .position(|c| value < c.upper)
            .map(|i| &self.categories[i])
            .unwrap_or(&self.categories[self.categories.len() - 1])
    }

    pub fn index_of(&self, value: f64) -> usize {
        self.categories
            .iter()
            .position(|c| value < c.upper)
            .unwrap_or(self.categories.len() - 1)
    }

    /// Bin midpoints, used as colorbar tick positions
    pub fn tick_locations(&self) -> Vec<f64> {
        self.categories.iter().map(AqiCategory::midpoint).collect()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.label.as_str()).collect()
    }
}

impl Default for AqiScale {
    fn default() -> Self {
        Self::standard()
    }
}

/// Parse a `#RRGGBB` color string
pub fn parse_hex_color(hex: &str) -> Result<[u8; 3]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AqiError::Config(format!(
            "Invalid color '{}'. Expected format: '#RRGGBB'",
            hex
        )));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| AqiError::Config(format!("Invalid color '{}'", hex)))
    };

    Ok([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}
