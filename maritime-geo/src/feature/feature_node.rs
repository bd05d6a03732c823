use serde_json::{Map, Value};

use crate::GeoConversionError;

/// the GeoJSON node shapes the flattener distinguishes.
#[derive(Debug)]
pub enum FeatureNode<'a> {
    FeatureCollection {
        features: &'a [Value],
    },
    Feature {
        geometry: &'a Value,
        properties: Option<&'a Map<String, Value>>,
    },
    /// any other `type`, or no `type` at all
    Unrecognized,
}

impl<'a> FeatureNode<'a> {
    pub fn classify(value: &'a Value) -> Result<FeatureNode<'a>, GeoConversionError> {
        match value.get("type").and_then(Value::as_str) {
            Some("FeatureCollection") => {
                let features = value
                    .get("features")
                    .and_then(Value::as_array)
                    .ok_or_else(|| {
                        GeoConversionError::ParseError(
                            String::from("FeatureCollection"),
                            String::from("'features' is missing or not an array"),
                        )
                    })?;
                Ok(FeatureNode::FeatureCollection { features })
            }
            Some("Feature") => {
                let geometry = value.get("geometry").ok_or_else(|| {
                    GeoConversionError::ParseError(
                        String::from("Feature"),
                        String::from("'geometry' is missing"),
                    )
                })?;
                let properties = value.get("properties").and_then(Value::as_object);
                Ok(FeatureNode::Feature {
                    geometry,
                    properties,
                })
            }
            _ => Ok(FeatureNode::Unrecognized),
        }
    }
}
