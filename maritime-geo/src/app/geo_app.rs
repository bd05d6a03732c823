use super::GeoOperation;
use clap::Parser;

/// command line tool for converting maritime route spreadsheets into GeoJSON
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct GeoApp {
    #[command(subcommand)]
    pub op: GeoOperation,
}
