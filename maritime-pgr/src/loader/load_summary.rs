use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::ConnectivityReport;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadSummary {
    pub table: String,
    pub dropped_existing: bool,
    pub inserted: u64,
    pub costed: u64,
    /// None when the connectivity check is disabled
    pub connectivity: Option<ConnectivityReport>,
}

impl Display for LoadSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "table {}: {} edges inserted, {} edges costed",
            self.table, self.inserted, self.costed
        )?;
        if self.dropped_existing {
            write!(f, ", previous table dropped")?;
        }
        if let Some(report) = &self.connectivity {
            write!(f, "; {report}")?;
        }
        Ok(())
    }
}
