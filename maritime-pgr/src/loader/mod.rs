mod connectivity;
mod edge_table_loader;
mod load_summary;

pub use connectivity::ConnectivityReport;
pub use edge_table_loader::{run_flow, EdgeTableLoader};
pub use load_summary::LoadSummary;
