use std::fmt::Display;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::RoutingError;

/// an unquoted, lowercase SQL identifier naming the edge table. table names
/// are written into statement text, so nothing else is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TableName(String);

impl TableName {
    /// leaves room for the `_vertices_pgr` suffix within the 63 byte identifier limit.
    pub const MAX_LEN: usize = 49;
    const PATTERN: &'static str = r"^[a-z_][a-z0-9_]*$";

    pub fn new(name: &str) -> Result<TableName, RoutingError> {
        let pattern = Regex::new(Self::PATTERN)
            .map_err(|e| RoutingError::ConfigurationError(format!("invalid pattern: {e}")))?;
        if name.len() > Self::MAX_LEN || !pattern.is_match(name) {
            return Err(RoutingError::ConfigurationError(format!(
                "table name '{name}' must match {} and be at most {} characters",
                Self::PATTERN,
                Self::MAX_LEN
            )));
        }
        Ok(TableName(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// the vertex table pgr_createTopology builds next to the edge table.
    pub fn vertices_table(&self) -> String {
        format!("{}_vertices_pgr", self.0)
    }
}

impl Display for TableName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for TableName {
    type Error = RoutingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TableName::new(&value)
    }
}

impl From<TableName> for String {
    fn from(value: TableName) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::TableName;

    #[test]
    fn test_valid_names() {
        let t = TableName::new("maritime_routes_edges").unwrap();
        assert_eq!(t.vertices_table(), "maritime_routes_edges_vertices_pgr");
        assert!(TableName::new("_edges2").is_ok());
    }

    #[test]
    fn test_rejects_injection_and_case() {
        assert!(TableName::new("edges; DROP TABLE x").is_err());
        assert!(TableName::new("Edges").is_err());
        assert!(TableName::new("2edges").is_err());
        assert!(TableName::new("").is_err());
        assert!(TableName::new(&"e".repeat(TableName::MAX_LEN + 1)).is_err());
    }
}
