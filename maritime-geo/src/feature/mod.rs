mod edge_id;
mod edge_record;
mod feature_node;
pub mod flatten_ops;

pub use edge_id::EdgeId;
pub use edge_record::EdgeRecord;
pub use feature_node::FeatureNode;

/// name of the feature property holding the edge identifier.
pub const EDGE_ID_PROPERTY: &str = "linestring_id";
