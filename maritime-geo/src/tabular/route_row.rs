use csv::StringRecord;
use geo::LineString;
use geojson::{Feature, Geometry, JsonObject};
use serde_json::Value;

use crate::{
    coordinate::Coordinate,
    feature::{EdgeId, EDGE_ID_PROPERTY},
    GeoConversionError,
};

/// one row of the route spreadsheet: an edge id, the two endpoints of the
/// edge and six attribute columns that are carried but not used for routing.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRow {
    pub edge_id: EdgeId,
    pub start: Coordinate,
    pub end: Coordinate,
    pub attributes: [String; 6],
}

impl RouteRow {
    pub const N_FIELDS: usize = 11;

    /// parses a csv record.
    ///
    /// # Arguments
    ///
    /// * `record` - the csv record, expected to hold exactly [`RouteRow::N_FIELDS`] fields
    /// * `line` - 1-based line number of the record, used for error reporting
    pub fn from_record(record: &StringRecord, line: u64) -> Result<RouteRow, GeoConversionError> {
        let fields: Vec<&str> = record.iter().collect();
        match fields.as_slice() {
            [id, lon1, lat1, lon2, lat2, a1, a2, a3, a4, a5, a6] => {
                let id_value = parse_field::<i64>(id, "linestring_id", line)?;
                let edge_id = EdgeId::try_from(id_value)?;
                let start = Coordinate::new(
                    parse_degrees(lon1, "long1", line)?,
                    parse_degrees(lat1, "lat1", line)?,
                );
                let end = Coordinate::new(
                    parse_degrees(lon2, "long2", line)?,
                    parse_degrees(lat2, "lat2", line)?,
                );
                let attributes = [a1, a2, a3, a4, a5, a6].map(|a| a.to_string());
                Ok(RouteRow {
                    edge_id,
                    start,
                    end,
                    attributes,
                })
            }
            _ => Err(GeoConversionError::ParseError(
                format!("row on line {line}"),
                format!(
                    "expected {} fields, found {}",
                    RouteRow::N_FIELDS,
                    fields.len()
                ),
            )),
        }
    }

    pub fn line_string(&self) -> LineString<f64> {
        LineString::from(vec![geo::Coord::from(self.start), geo::Coord::from(self.end)])
    }

    /// the GeoJSON feature for this row. only the edge id is kept as a property.
    pub fn to_feature(&self) -> Feature {
        let mut properties = JsonObject::new();
        properties.insert(
            String::from(EDGE_ID_PROPERTY),
            Value::from(self.edge_id.as_i32()),
        );
        Feature {
            bbox: None,
            geometry: Some(Geometry::new(geojson::Value::from(&self.line_string()))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

fn parse_field<T>(value: &str, name: &str, line: u64) -> Result<T, GeoConversionError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse::<T>().map_err(|e| {
        GeoConversionError::ParseError(
            format!("row on line {line}"),
            format!("column '{name}' has invalid value '{value}': {e}"),
        )
    })
}

/// a coordinate column. `inf` and `NaN` parse as f64 but have no GeoJSON
/// representation, so they are rejected here.
fn parse_degrees(value: &str, name: &str, line: u64) -> Result<f64, GeoConversionError> {
    let degrees = parse_field::<f64>(value, name, line)?;
    if !degrees.is_finite() {
        return Err(GeoConversionError::ParseError(
            format!("row on line {line}"),
            format!("column '{name}' has non-finite value '{value}'"),
        ));
    }
    Ok(degrees)
}
