use std::path::Path;

use maritime_geo::feature::{flatten_ops, EdgeRecord};
use serde_json::Value;

use super::{ConnectivityReport, LoadSummary};
use crate::{
    config::{MaritimeConfig, RoutingConfig, TableName},
    db::{with_connection, RoutingDatabase},
    RoutingError,
};

/// rebuilds the pgRouting edge table from GeoJSON route features. every run
/// drops and recreates the table; each step commits on its own, so a failure
/// leaves the steps before it in place.
pub struct EdgeTableLoader<'a> {
    table: &'a TableName,
    routing: &'a RoutingConfig,
}

impl<'a> EdgeTableLoader<'a> {
    pub fn new(config: &'a MaritimeConfig) -> EdgeTableLoader<'a> {
        EdgeTableLoader {
            table: &config.tables.routes,
            routing: &config.routing,
        }
    }

    pub fn with_table(table: &'a TableName, routing: &'a RoutingConfig) -> EdgeTableLoader<'a> {
        EdgeTableLoader { table, routing }
    }

    /// loads the GeoJSON file at `source`. the file is read after the table
    /// has been recreated, so an unreadable source leaves an empty table.
    pub fn load_geojson_file<D: RoutingDatabase>(
        &self,
        db: &mut D,
        source: &Path,
    ) -> Result<LoadSummary, RoutingError> {
        let dropped_existing = self.recreate_table(db)?;
        log::info!("  (((3))) reading route features from {}", source.display());
        let document = flatten_ops::read_geojson_file(source)?;
        self.populate(db, &document, dropped_existing)
    }

    /// loads an already parsed GeoJSON document.
    pub fn load_geojson<D: RoutingDatabase>(
        &self,
        db: &mut D,
        document: &Value,
    ) -> Result<LoadSummary, RoutingError> {
        let dropped_existing = self.recreate_table(db)?;
        self.populate(db, document, dropped_existing)
    }

    fn recreate_table<D: RoutingDatabase>(&self, db: &mut D) -> Result<bool, RoutingError> {
        log::info!("  (((1))) dropping edge table {} if present", self.table);
        let dropped = db.drop_table_if_exists(self.table)?;
        if dropped {
            log::info!("dropped existing table {}", self.table);
        }
        log::info!("  (((2))) creating edge table {}", self.table);
        db.create_edge_table(self.table)?;
        Ok(dropped)
    }

    fn populate<D: RoutingDatabase>(
        &self,
        db: &mut D,
        document: &Value,
        dropped_existing: bool,
    ) -> Result<LoadSummary, RoutingError> {
        let edges = flatten_ops::flatten_features(document)?;
        self.insert_and_build(db, &edges, dropped_existing)
    }

    fn insert_and_build<D: RoutingDatabase>(
        &self,
        db: &mut D,
        edges: &[EdgeRecord],
        dropped_existing: bool,
    ) -> Result<LoadSummary, RoutingError> {
        log::info!("  (((4))) inserting {} route edges", edges.len());
        let inserted = db.insert_edges(self.table, edges)?;

        log::info!(
            "  (((5))) assigning edge costs with {:?} policy",
            self.routing.cost_policy
        );
        let costed = db.assign_costs(self.table, self.routing.cost_policy)?;

        log::info!(
            "  (((6))) building topology with snapping tolerance {}",
            self.routing.snapping_tolerance
        );
        db.create_topology(self.table, self.routing.snapping_tolerance)?;

        let connectivity = if self.routing.check_connectivity {
            log::info!("  (((7))) counting connected components");
            let components = db.count_components(self.table)?;
            let report = ConnectivityReport::from_component_count(components);
            println!("{report}");
            Some(report)
        } else {
            log::info!("  (((7))) counting connected components (skipped)");
            None
        };

        let summary = LoadSummary {
            table: self.table.to_string(),
            dropped_existing,
            inserted,
            costed,
            connectivity,
        };
        log::info!("{summary}");
        Ok(summary)
    }
}

/// connects to the configured database, loads `geojson_source.source` into
/// the routes table and closes the connection on every exit path.
pub fn run_flow(config: &MaritimeConfig) -> Result<LoadSummary, RoutingError> {
    let loader = EdgeTableLoader::new(config);
    with_connection(&config.database, |db| {
        loader.load_geojson_file(db, &config.geojson_source.source)
    })
}
