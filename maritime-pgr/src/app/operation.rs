use clap::Subcommand;
use serde::{Deserialize, Serialize};

use crate::{
    config::MaritimeConfig,
    db::with_connection,
    finder::{NoTimezoneLookup, RoutingFinder, TzfTimezoneLookup},
    loader, RoutingError,
};

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum PgrOperation {
    /// rebuild the edge table and topology from the configured GeoJSON source
    Load,
    /// snap a coordinate to the nearest routing vertex and print the result as JSON
    Nearest {
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
    },
    /// print the shortest path between two routing vertices as JSON
    Route {
        #[arg(long)]
        source: i64,
        #[arg(long)]
        target: i64,
    },
}

impl PgrOperation {
    pub fn run(&self, conf: &MaritimeConfig) -> Result<(), RoutingError> {
        match self {
            PgrOperation::Load => {
                let summary = loader::run_flow(conf)?;
                eprintln!("finished. {summary}");
                Ok(())
            }
            PgrOperation::Nearest { lon, lat } => {
                let finder = RoutingFinder::new(&conf.tables.routes, TzfTimezoneLookup::new());
                let result =
                    with_connection(&conf.database, |db| finder.find_nearest(db, *lon, *lat))?;
                print_json(&result)
            }
            PgrOperation::Route { source, target } => {
                let finder = RoutingFinder::new(&conf.tables.routes, NoTimezoneLookup);
                let steps = with_connection(&conf.database, |db| {
                    finder.one_to_one_route(db, *source, *target)
                })?;
                print_json(&steps)
            }
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), RoutingError> {
    let s = serde_json::to_string(value)
        .map_err(|e| RoutingError::QueryError(String::from("result encoding"), e.to_string()))?;
    println!("{s}");
    Ok(())
}
