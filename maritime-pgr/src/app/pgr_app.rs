use super::PgrOperation;
use crate::{config::MaritimeConfig, RoutingError};
use clap::Parser;

/// command line tool for loading maritime routes into PostGIS and querying
/// the pgRouting graph
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct PgrApp {
    /// .toml, .json or .ini run configuration
    #[arg(long, default_value_t = String::from("config.ini"))]
    pub config: String,
    #[command(subcommand)]
    pub op: PgrOperation,
}

impl PgrApp {
    pub fn run(&self) -> Result<(), RoutingError> {
        log::info!("reading configuration from {}", self.config);
        let conf = MaritimeConfig::try_from(&self.config)?;
        self.op.run(&conf)
    }
}
