use serde::{Deserialize, Serialize};

use super::normalize_coordinate;

/// a longitude/latitude pair in degrees. serializes as a `[lon, lat]` array,
/// the GeoJSON position order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "[f64; 2]", from = "[f64; 2]")]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    pub fn new(lon: f64, lat: f64) -> Coordinate {
        Coordinate { lon, lat }
    }

    pub fn normalized(&self) -> Coordinate {
        let (lon, lat) = normalize_coordinate(self.lon, self.lat);
        Coordinate { lon, lat }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(value: Coordinate) -> Self {
        [value.lon, value.lat]
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from(value: [f64; 2]) -> Self {
        Coordinate {
            lon: value[0],
            lat: value[1],
        }
    }
}

impl From<Coordinate> for geo::Coord<f64> {
    fn from(value: Coordinate) -> Self {
        geo::Coord {
            x: value.lon,
            y: value.lat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Coordinate;

    #[test]
    fn test_serializes_as_position_array() {
        let c = Coordinate::new(10.5, -20.25);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "[10.5,-20.25]");
        let back: Coordinate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_normalized_wraps_longitude() {
        let c = Coordinate::new(200.0, 10.0).normalized();
        assert_eq!(c, Coordinate::new(-160.0, 10.0));
    }
}
