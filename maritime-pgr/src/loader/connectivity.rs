use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// whether the loaded edges form a single connected graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectivityReport {
    SingleComponent,
    Fragmented { components: i64 },
}

impl ConnectivityReport {
    pub fn from_component_count(components: i64) -> ConnectivityReport {
        if components == 1 {
            ConnectivityReport::SingleComponent
        } else {
            ConnectivityReport::Fragmented { components }
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectivityReport::SingleComponent)
    }
}

impl Display for ConnectivityReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectivityReport::SingleComponent => {
                write!(f, "ALL EDGES CONNECTED IN 1 COMPONENT")
            }
            ConnectivityReport::Fragmented { components } => {
                write!(f, "EDGES ARE CONNECTED IN MANY COMPONENTS ({components})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ConnectivityReport;

    #[test]
    fn test_from_component_count() {
        assert!(ConnectivityReport::from_component_count(1).is_connected());
        assert_eq!(
            ConnectivityReport::from_component_count(4),
            ConnectivityReport::Fragmented { components: 4 }
        );
        assert!(!ConnectivityReport::from_component_count(0).is_connected());
    }
}
