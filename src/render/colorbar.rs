use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontTransform;

use crate::error::Result;
use crate::models::AqiScale;
use crate::utils::constants::COLORBAR_CAPTION;

const BAR_LEFT: i32 = 10;
const BAR_WIDTH: i32 = 30;
const TICK_LENGTH: i32 = 6;
const TICK_FONT_SIZE: u32 = 14;
const CAPTION_FONT_SIZE: u32 = 16;

/// Vertical pixel geometry of the colorbar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorbarLayout {
    pub top: i32,
    pub bottom: i32,
    pub min: f64,
    pub max: f64,
}

impl ColorbarLayout {
    pub fn new(height: i32, scale: &AqiScale) -> Self {
        Self {
            top: 60,
            bottom: (height - 80).max(61),
            min: scale.min(),
            max: scale.max(),
        }
    }

    /// Pixel row for `value`; larger values sit higher up
    pub fn y_for(&self, value: f64) -> i32 {
        let fraction = ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0);
        self.bottom - (fraction * (self.bottom - self.top) as f64).round() as i32
    }

    /// Tick rows at each bin midpoint, in scale order
    pub fn tick_rows(&self, scale: &AqiScale) -> Vec<i32> {
        scale
            .tick_locations()
            .into_iter()
            .map(|v| self.y_for(v))
            .collect()
    }
}

/// Draw the segmented AQI colorbar with one labelled tick per category
pub fn draw_colorbar<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    scale: &AqiScale,
) -> Result<()> {
    let (width, height) = area.dim_in_pixel();
    let layout = ColorbarLayout::new(height as i32, scale);
    let bar_right = BAR_LEFT + BAR_WIDTH;

    for category in scale.categories() {
        let [r, g, b] = category.color;
        area.draw(&Rectangle::new(
            [
                (BAR_LEFT, layout.y_for(category.upper)),
                (bar_right, layout.y_for(category.lower)),
            ],
            RGBColor(r, g, b).filled(),
        ))?;
    }

    area.draw(&Rectangle::new(
        [(BAR_LEFT, layout.top), (bar_right, layout.bottom)],
        BLACK.stroke_width(1),
    ))?;

    for (y, label) in layout.tick_rows(scale).into_iter().zip(scale.labels()) {
        area.draw(&PathElement::new(
            vec![(bar_right, y), (bar_right + TICK_LENGTH, y)],
            BLACK,
        ))?;
        area.draw(&Text::new(
            label.to_string(),
            (bar_right + TICK_LENGTH + 4, y - TICK_FONT_SIZE as i32 / 2),
            ("sans-serif", TICK_FONT_SIZE),
        ))?;
    }

    let caption_style = ("sans-serif", CAPTION_FONT_SIZE)
        .into_font()
        .transform(FontTransform::Rotate270);
    area.draw(&Text::new(
        COLORBAR_CAPTION,
        (width as i32 - 2 * CAPTION_FONT_SIZE as i32, (layout.top + layout.bottom) / 2 + 80),
        caption_style,
    ))?;

    Ok(())
}
