use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::MapBounds;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Station {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl Station {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    /// The five Delhi monitoring stations, in declaration order
    pub fn default_network() -> Vec<Station> {
        vec![
            Station::new("Anand Vihar", 28.6479, 77.3194),
            Station::new("Dwarka-Sector 8", 28.5836, 77.0601),
            Station::new("ITO", 28.6186, 77.2307),
            Station::new("Rohini", 28.7325, 77.1197),
            Station::new("Delhi Cantt", 28.6102, 77.1278),
        ]
    }

    pub fn is_within_bounds(&self, bounds: &MapBounds) -> bool {
        bounds.contains(self.longitude, self.latitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_validation() {
        let station = Station::new("ITO", 28.6186, 77.2307);

        assert!(station.validate().is_ok());
        assert!(station.is_within_bounds(&MapBounds::delhi()));
    }

    #[test]
    fn test_invalid_coordinates() {
        let station = Station::new("Invalid Station", 91.0, 77.2307);
        assert!(station.validate().is_err());

        let unnamed = Station::new("", 28.6, 77.2);
        assert!(unnamed.validate().is_err());
    }

    #[test]
    fn test_default_network_fits_map() {
        let stations = Station::default_network();
        let bounds = MapBounds::delhi();

        assert_eq!(stations.len(), 5);
        assert_eq!(stations[0].name, "Anand Vihar");
        assert_eq!(stations[4].name, "Delhi Cantt");
        assert!(stations.iter().all(|s| s.is_within_bounds(&bounds)));
        assert!(stations.iter().all(|s| s.validate().is_ok()));
    }
}
