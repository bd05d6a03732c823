//! statement text for the edge table and the pgRouting functions. the table
//! name is interpolated, which is why [`TableName`] only admits plain identifiers.
use crate::config::{CostPolicy, TableName};

pub const SRID: i32 = 4326;

pub const TABLE_EXISTS: &str =
    "SELECT EXISTS(SELECT 1 FROM information_schema.tables WHERE table_name::text = $1);";

/// `clean` rebuilds the vertex table from scratch instead of snapping new
/// edges onto vertices left by an earlier load.
pub const CREATE_TOPOLOGY: &str =
    "SELECT pgr_createTopology($1::text, $2::float8, 'geom', clean := true);";

pub fn drop_table(table: &TableName) -> String {
    format!("DROP TABLE {table};")
}

/// the vertex table is owned by the edge table it was built from.
pub fn drop_vertices_table(table: &TableName) -> String {
    format!("DROP TABLE IF EXISTS {};", table.vertices_table())
}

pub fn create_edge_table(table: &TableName) -> String {
    format!(
        "CREATE TABLE {table} (id integer primary key, \
         source integer, target integer, \
         cost double precision, reverse_cost double precision, \
         geom geometry(geometry, {SRID}));"
    )
}

pub fn insert_edge(table: &TableName) -> String {
    format!(
        "INSERT INTO {table} (id, geom) \
         VALUES ($1, ST_SetSRID(ST_GeomFromGeoJSON($2::text), {SRID}));"
    )
}

pub fn update_cost(table: &TableName, policy: CostPolicy) -> String {
    let length = policy.length_expression();
    format!("UPDATE {table} SET cost = {length}, reverse_cost = {length};")
}

fn edges_subquery(table: &TableName) -> String {
    format!("SELECT id, source, target, cost, reverse_cost FROM {table}")
}

pub fn count_components(table: &TableName) -> String {
    format!(
        "SELECT COUNT(DISTINCT component) FROM pgr_connectedComponents('{}');",
        edges_subquery(table)
    )
}

pub fn nearest_vertex(table: &TableName) -> String {
    format!(
        "SELECT id, ST_X(the_geom), ST_Y(the_geom), \
         ST_Distance(the_geom, ST_SetSRID(ST_MakePoint($1::float8, $2::float8), {SRID})) AS d \
         FROM {} ORDER BY d LIMIT 1;",
        table.vertices_table()
    )
}

pub fn shortest_path(table: &TableName) -> String {
    format!(
        "SELECT seq, node, edge, cost, agg_cost FROM pgr_Dijkstra('{}', $1::bigint, $2::bigint, false);",
        edges_subquery(table)
    )
}
