use serde::{Deserialize, Serialize};

use crate::utils::constants::{DELHI_LAT_MAX, DELHI_LAT_MIN, DELHI_LON_MAX, DELHI_LON_MIN};

/// Fixed longitude/latitude window drawn on every frame, independent of the data extent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapBounds {
    pub lon_min: f64,
    pub lon_max: f64,
    pub lat_min: f64,
    pub lat_max: f64,
}

impl MapBounds {
    pub fn delhi() -> Self {
        Self {
            lon_min: DELHI_LON_MIN,
            lon_max: DELHI_LON_MAX,
            lat_min: DELHI_LAT_MIN,
            lat_max: DELHI_LAT_MAX,
        }
    }

    pub fn contains(&self, longitude: f64, latitude: f64) -> bool {
        (self.lon_min..=self.lon_max).contains(&longitude)
            && (self.lat_min..=self.lat_max).contains(&latitude)
    }
}

impl Default for MapBounds {
    fn default() -> Self {
        Self::delhi()
    }
}
