use serde::{Deserialize, Serialize};

use super::EdgeId;

/// a flattened route edge, ready for insertion into the edge table.
/// the geometry is kept as serialized GeoJSON and handed to the database as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub id: EdgeId,
    pub geometry_json: String,
}

impl EdgeRecord {
    pub fn new(id: EdgeId, geometry_json: String) -> EdgeRecord {
        EdgeRecord { id, geometry_json }
    }
}
