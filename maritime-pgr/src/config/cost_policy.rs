use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// how edge traversal cost is derived from the edge geometry.
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CostPolicy {
    /// length in metres on the sphere, without the ellipsoid correction
    #[default]
    Geodesic,
    /// planar length in degrees, doubled
    PlanarDoubled,
}

impl CostPolicy {
    /// SQL expression computing the cost of the `geom` column.
    pub fn length_expression(&self) -> &'static str {
        match self {
            CostPolicy::Geodesic => "ST_Length(geom::geography, false)",
            CostPolicy::PlanarDoubled => "ST_Length(geom) * 2",
        }
    }
}
