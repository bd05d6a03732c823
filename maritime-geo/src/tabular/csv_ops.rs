use std::{io::Read, path::Path};

use geojson::FeatureCollection;
use itertools::Itertools;

use super::RouteRow;
use crate::GeoConversionError;

/// reads every route row following the header row. the first bad row aborts
/// the read.
pub fn read_route_rows<R: Read>(
    source: R,
    source_name: &str,
) -> Result<Vec<RouteRow>, GeoConversionError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);
    let headers = reader
        .headers()
        .map_err(|e| GeoConversionError::from_csv_error(source_name, e))?;
    if headers.is_empty() {
        return Err(GeoConversionError::ParseError(
            source_name.to_string(),
            String::from("missing header row"),
        ));
    }

    reader
        .records()
        .map(|r| {
            let record = r.map_err(|e| GeoConversionError::from_csv_error(source_name, e))?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            RouteRow::from_record(&record, line)
        })
        .collect::<Result<Vec<_>, _>>()
}

pub fn routes_to_feature_collection(rows: &[RouteRow]) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: rows.iter().map(RouteRow::to_feature).collect_vec(),
        foreign_members: None,
    }
}

/// converts a route csv file into a GeoJSON FeatureCollection of two-point
/// LineStrings tagged with `linestring_id`. the destination is overwritten
/// only after every row has been read successfully.
///
/// # Returns
///
/// * the number of features written
pub fn convert_csv_to_geojson(
    csv_src: &Path,
    geojson_dest: &Path,
) -> Result<usize, GeoConversionError> {
    let src_name = csv_src.to_str().unwrap_or_default();
    let dest_name = geojson_dest.to_str().unwrap_or_default();
    let file = std::fs::File::open(csv_src)
        .map_err(|e| GeoConversionError::FileIOError(src_name.to_string(), e.to_string()))?;
    let rows = read_route_rows(file, src_name)?;
    let collection = routes_to_feature_collection(&rows);
    std::fs::write(geojson_dest, collection.to_string())
        .map_err(|e| GeoConversionError::FileIOError(dest_name.to_string(), e.to_string()))?;
    log::info!(
        "wrote {} route features from {src_name} to {dest_name}",
        rows.len()
    );
    Ok(rows.len())
}
