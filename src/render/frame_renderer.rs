use chrono::NaiveDateTime;
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::Result;
use crate::models::{AqiScale, MapBounds, Reading};
use crate::render::colorbar::draw_colorbar;
use crate::utils::constants::{
    COLORBAR_WIDTH, DEFAULT_FRAME_HEIGHT, DEFAULT_FRAME_WIDTH, LABEL_FONT_SIZE,
    LABEL_OFFSET_DEGREES, MAP_X_LABELS, MAP_Y_LABELS, MARKER_OPACITY, MARKER_RADIUS,
    TITLE_FONT_SIZE, TITLE_PREFIX,
};
use crate::utils::filename::frame_path;

/// Caption shown above each frame
pub fn frame_title(timestamp: NaiveDateTime) -> String {
    format!("{}: {}", TITLE_PREFIX, timestamp.format("%Y-%m-%d %H:%M"))
}

/// Axis tick label, one decimal place
pub fn axis_label(value: &f64) -> String {
    format!("{:.1}", value)
}

/// Draws one PNG scatter map per timestamp
pub struct FrameRenderer {
    width: u32,
    height: u32,
    bounds: MapBounds,
    scale: AqiScale,
}

impl FrameRenderer {
    pub fn new(scale: AqiScale) -> Self {
        Self {
            width: DEFAULT_FRAME_WIDTH,
            height: DEFAULT_FRAME_HEIGHT,
            bounds: MapBounds::delhi(),
            scale,
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_bounds(mut self, bounds: MapBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Render `readings` (all sharing `timestamp`) to `dir/aqi_frame_{index}.png`.
    ///
    /// Returns `Ok(None)` without touching the filesystem when there is
    /// nothing to draw.
    pub fn render(
        &self,
        index: usize,
        timestamp: NaiveDateTime,
        readings: &[Reading],
        dir: &Path,
    ) -> Result<Option<PathBuf>> {
        if readings.is_empty() {
            debug!(%timestamp, "no readings, skipping frame");
            return Ok(None);
        }

        let path = frame_path(dir, index);
        self.draw(&path, timestamp, readings)?;
        debug!(%timestamp, path = %path.display(), "rendered frame");

        Ok(Some(path))
    }

    // The backend is flushed by `present` and released when `root` drops
    fn draw(&self, path: &Path, timestamp: NaiveDateTime, readings: &[Reading]) -> Result<()> {
        let root = BitMapBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE)?;

        let body = root.titled(&frame_title(timestamp), ("sans-serif", TITLE_FONT_SIZE))?;
        let map_width = self.width.saturating_sub(COLORBAR_WIDTH) as i32;
        let (map_area, bar_area) = body.split_horizontally(map_width);

        let mut chart = ChartBuilder::on(&map_area)
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(
                self.bounds.lon_min..self.bounds.lon_max,
                self.bounds.lat_min..self.bounds.lat_max,
            )?;

        chart
            .configure_mesh()
            .x_desc("Longitude")
            .y_desc("Latitude")
            .x_labels(MAP_X_LABELS)
            .y_labels(MAP_Y_LABELS)
            .x_label_formatter(&axis_label)
            .y_label_formatter(&axis_label)
            .light_line_style(BLACK.mix(0.1))
            .draw()?;

        chart.draw_series(readings.iter().map(|r| {
            let [red, green, blue] = r.category(&self.scale).color;
            Circle::new(
                (r.longitude, r.latitude),
                MARKER_RADIUS,
                RGBColor(red, green, blue).mix(MARKER_OPACITY).filled(),
            )
        }))?;

        chart.draw_series(readings.iter().map(|r| {
            Circle::new(
                (r.longitude, r.latitude),
                MARKER_RADIUS,
                BLACK.stroke_width(1),
            )
        }))?;

        chart.draw_series(readings.iter().map(|r| {
            Text::new(
                r.station.clone(),
                (
                    r.longitude + LABEL_OFFSET_DEGREES,
                    r.latitude + LABEL_OFFSET_DEGREES,
                ),
                ("sans-serif", LABEL_FONT_SIZE),
            )
        }))?;

        draw_colorbar(&bar_area, &self.scale)?;

        root.present()?;
        Ok(())
    }
}

impl Default for FrameRenderer {
    fn default() -> Self {
        Self::new(AqiScale::standard())
    }
}
