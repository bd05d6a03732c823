use maritime_geo::coordinate::Coordinate;
use serde::{Deserialize, Serialize};

/// emission control areas are not modeled yet; every result reports this name.
pub const NO_ECA: &str = "No ECA";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// answer to a nearest-vertex query: where the query point would snap to on
/// the routing graph and how far it moved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearestVertexResult {
    /// true only when the query point already is a routing vertex
    pub is_valid: bool,
    pub suggestion: Coordinate,
    pub normalized: Coordinate,
    pub moved_by: f64,
    #[serde(rename = "validatedLatlng")]
    pub validated_lat_lng: LatLng,
    pub eca: bool,
    pub eca_name: String,
    pub timezone_of_validated: Option<String>,
}
