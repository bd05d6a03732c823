use maritime_geo::{coordinate::Coordinate, feature::EdgeRecord};
use serde::{Deserialize, Serialize};

use crate::{
    config::{CostPolicy, TableName},
    RoutingError,
};

/// the routing vertex closest to a query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestVertex {
    pub id: i64,
    pub coordinate: Coordinate,
    /// planar distance in degrees
    pub distance: f64,
}

/// one row of a shortest path result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    pub seq: i32,
    pub node: i64,
    /// -1 on the final step
    pub edge: i64,
    pub cost: f64,
    pub agg_cost: f64,
}

/// operations the loader and finder need from the spatial database. each
/// method runs in its own transaction and commits only when it succeeds.
pub trait RoutingDatabase {
    /// drops the edge table if it exists. returns whether a table was dropped.
    fn drop_table_if_exists(&mut self, table: &TableName) -> Result<bool, RoutingError>;

    fn create_edge_table(&mut self, table: &TableName) -> Result<(), RoutingError>;

    /// inserts all edges in one transaction; either every edge is stored or none is.
    fn insert_edges(&mut self, table: &TableName, edges: &[EdgeRecord])
        -> Result<u64, RoutingError>;

    /// sets `cost` and `reverse_cost` of every row. returns the number of rows updated.
    fn assign_costs(&mut self, table: &TableName, policy: CostPolicy)
        -> Result<u64, RoutingError>;

    /// fills `source`/`target` and builds the vertex table.
    fn create_topology(&mut self, table: &TableName, tolerance: f64) -> Result<(), RoutingError>;

    fn count_components(&mut self, table: &TableName) -> Result<i64, RoutingError>;

    /// the vertex closest to `point`, or None when the vertex table is empty.
    fn nearest_vertex(
        &mut self,
        table: &TableName,
        point: Coordinate,
    ) -> Result<Option<NearestVertex>, RoutingError>;

    /// undirected shortest path between two vertices; empty when unreachable.
    fn shortest_path(
        &mut self,
        table: &TableName,
        source: i64,
        target: i64,
    ) -> Result<Vec<RouteStep>, RoutingError>;
}
