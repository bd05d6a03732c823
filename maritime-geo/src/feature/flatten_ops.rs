use std::path::Path;

use serde_json::Value;

use super::{EdgeId, EdgeRecord, FeatureNode, EDGE_ID_PROPERTY};
use crate::GeoConversionError;

/// walks a GeoJSON tree depth-first and collects one [`EdgeRecord`] per
/// `Feature`. nodes with an unrecognized or missing `type` contribute nothing.
///
/// # Arguments
///
/// * `node` - a FeatureCollection, a Feature, or any other JSON value
///
/// # Returns
///
/// * the edges in document order, or the first error hit while reading a Feature
pub fn flatten_features(node: &Value) -> Result<Vec<EdgeRecord>, GeoConversionError> {
    let mut edges: Vec<EdgeRecord> = vec![];
    flatten_into(node, &mut edges)?;
    Ok(edges)
}

fn flatten_into(node: &Value, edges: &mut Vec<EdgeRecord>) -> Result<(), GeoConversionError> {
    match FeatureNode::classify(node)? {
        FeatureNode::FeatureCollection { features } => {
            for feature in features {
                flatten_into(feature, edges)?;
            }
            Ok(())
        }
        FeatureNode::Feature {
            geometry,
            properties,
        } => {
            let id_value = properties
                .and_then(|p| p.get(EDGE_ID_PROPERTY))
                .ok_or_else(|| {
                    GeoConversionError::MissingPropertyError(String::from(EDGE_ID_PROPERTY))
                })?;
            let id = EdgeId::try_from(id_value)?;
            let geometry_json = serde_json::to_string(geometry).map_err(|e| {
                GeoConversionError::ParseError(format!("geometry of edge {id}"), e.to_string())
            })?;
            edges.push(EdgeRecord::new(id, geometry_json));
            Ok(())
        }
        FeatureNode::Unrecognized => {
            log::debug!(
                "skipping GeoJSON node with type {:?}",
                node.get("type").unwrap_or(&Value::Null)
            );
            Ok(())
        }
    }
}

/// reads a GeoJSON document from disk without validating its structure,
/// so that unrecognized nodes can be skipped by [`flatten_features`].
pub fn read_geojson_file(path: &Path) -> Result<Value, GeoConversionError> {
    let filename = path.to_str().unwrap_or_default();
    let text = std::fs::read_to_string(path)
        .map_err(|e| GeoConversionError::FileIOError(filename.to_string(), e.to_string()))?;
    serde_json::from_str(&text)
        .map_err(|e| GeoConversionError::ParseError(filename.to_string(), e.to_string()))
}
