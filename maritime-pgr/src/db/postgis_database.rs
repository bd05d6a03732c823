use std::time::Duration;

use kdam::tqdm;
use maritime_geo::{coordinate::Coordinate, feature::EdgeRecord};
use postgres::{error::SqlState, Client, NoTls};

use super::{sql, NearestVertex, RouteStep, RoutingDatabase};
use crate::{
    config::{CostPolicy, DatabaseConfig, TableName},
    RoutingError,
};

/// a PostGIS + pgRouting database reached over a single blocking connection.
pub struct PostgisDatabase {
    client: Client,
}

impl PostgisDatabase {
    pub fn connect(config: &DatabaseConfig) -> Result<PostgisDatabase, RoutingError> {
        let mut pg = postgres::Config::new();
        pg.host(&config.host)
            .port(config.port)
            .user(&config.user)
            .password(&config.password)
            .dbname(&config.name);
        if let Some(secs) = config.connect_timeout_secs {
            pg.connect_timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.statement_timeout_secs {
            pg.options(&format!("-c statement_timeout={}", secs * 1000));
        }
        log::debug!(
            "connecting to {}:{}/{} as {}",
            config.host,
            config.port,
            config.name,
            config.user
        );
        let client = pg.connect(NoTls).map_err(|e| {
            if is_timeout(&e) {
                RoutingError::TimeoutError(String::from("connect"), e.to_string())
            } else {
                RoutingError::ConnectionError(format!(
                    "{}:{}/{}: {e}",
                    config.host, config.port, config.name
                ))
            }
        })?;
        Ok(PostgisDatabase { client })
    }

    /// closes the connection, waiting for the server to acknowledge.
    pub fn close(self) -> Result<(), RoutingError> {
        self.client
            .close()
            .map_err(|e| RoutingError::ConnectionError(format!("failure closing connection: {e}")))
    }
}

/// opens a connection, hands it to `op` and closes it again whether or not
/// `op` succeeded. an error from `op` takes precedence over a close error.
pub fn with_connection<T, F>(config: &DatabaseConfig, op: F) -> Result<T, RoutingError>
where
    F: FnOnce(&mut PostgisDatabase) -> Result<T, RoutingError>,
{
    let mut db = PostgisDatabase::connect(config)?;
    let result = op(&mut db);
    if let Err(e) = &result {
        log::error!("routing database operation failed: {e}");
    }
    match (result, db.close()) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(close_error)) => Err(close_error),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(close_error)) => {
            log::warn!("{close_error}");
            Err(e)
        }
    }
}

/// sorts a driver error into timeout, lost connection or rejected statement.
fn map_pg_error(step: &str, e: postgres::Error) -> RoutingError {
    if e.code() == Some(&SqlState::QUERY_CANCELED) || is_timeout(&e) {
        RoutingError::TimeoutError(step.to_string(), e.to_string())
    } else if e.is_closed() {
        RoutingError::ConnectionError(format!("connection closed during {step}: {e}"))
    } else {
        let detail = e
            .as_db_error()
            .map(|db| db.message().to_string())
            .unwrap_or_else(|| e.to_string());
        RoutingError::QueryError(step.to_string(), detail)
    }
}

fn is_timeout(e: &postgres::Error) -> bool {
    let mut source = std::error::Error::source(e);
    while let Some(s) = source {
        if let Some(io) = s.downcast_ref::<std::io::Error>() {
            if io.kind() == std::io::ErrorKind::TimedOut {
                return true;
            }
        }
        source = std::error::Error::source(s);
    }
    false
}

impl RoutingDatabase for PostgisDatabase {
    fn drop_table_if_exists(&mut self, table: &TableName) -> Result<bool, RoutingError> {
        let step = "drop edge table";
        let mut tx = self.client.transaction().map_err(|e| map_pg_error(step, e))?;
        let exists: bool = tx
            .query_one(sql::TABLE_EXISTS, &[&table.as_str()])
            .map_err(|e| map_pg_error(step, e))?
            .get(0);
        if exists {
            tx.batch_execute(&sql::drop_table(table))
                .map_err(|e| map_pg_error(step, e))?;
        }
        tx.batch_execute(&sql::drop_vertices_table(table))
            .map_err(|e| map_pg_error(step, e))?;
        tx.commit().map_err(|e| map_pg_error(step, e))?;
        Ok(exists)
    }

    fn create_edge_table(&mut self, table: &TableName) -> Result<(), RoutingError> {
        let step = "create edge table";
        let mut tx = self.client.transaction().map_err(|e| map_pg_error(step, e))?;
        tx.batch_execute(&sql::create_edge_table(table))
            .map_err(|e| map_pg_error(step, e))?;
        tx.commit().map_err(|e| map_pg_error(step, e))
    }

    fn insert_edges(
        &mut self,
        table: &TableName,
        edges: &[EdgeRecord],
    ) -> Result<u64, RoutingError> {
        let step = "insert edges";
        let mut tx = self.client.transaction().map_err(|e| map_pg_error(step, e))?;
        let statement = tx
            .prepare(&sql::insert_edge(table))
            .map_err(|e| map_pg_error(step, e))?;
        let mut inserted = 0;
        let edges_iter = tqdm!(edges.iter(), desc = "insert route edges", total = edges.len());
        for edge in edges_iter {
            inserted += tx
                .execute(&statement, &[&edge.id.as_i32(), &edge.geometry_json])
                .map_err(|e| map_pg_error(&format!("insert of edge {}", edge.id), e))?;
        }
        eprintln!();
        tx.commit().map_err(|e| map_pg_error(step, e))?;
        Ok(inserted)
    }

    fn assign_costs(&mut self, table: &TableName, policy: CostPolicy) -> Result<u64, RoutingError> {
        let step = "assign edge costs";
        let mut tx = self.client.transaction().map_err(|e| map_pg_error(step, e))?;
        let updated = tx
            .execute(&sql::update_cost(table, policy), &[])
            .map_err(|e| map_pg_error(step, e))?;
        tx.commit().map_err(|e| map_pg_error(step, e))?;
        Ok(updated)
    }

    fn create_topology(&mut self, table: &TableName, tolerance: f64) -> Result<(), RoutingError> {
        let step = "create topology";
        let mut tx = self.client.transaction().map_err(|e| map_pg_error(step, e))?;
        let status: String = tx
            .query_one(sql::CREATE_TOPOLOGY, &[&table.as_str(), &tolerance])
            .map_err(|e| map_pg_error(step, e))?
            .get(0);
        if status != "OK" {
            return Err(RoutingError::QueryError(
                step.to_string(),
                format!("pgr_createTopology returned '{status}'"),
            ));
        }
        tx.commit().map_err(|e| map_pg_error(step, e))
    }

    fn count_components(&mut self, table: &TableName) -> Result<i64, RoutingError> {
        let step = "count connected components";
        let mut tx = self.client.transaction().map_err(|e| map_pg_error(step, e))?;
        let count: i64 = tx
            .query_one(&sql::count_components(table), &[])
            .map_err(|e| map_pg_error(step, e))?
            .get(0);
        tx.commit().map_err(|e| map_pg_error(step, e))?;
        Ok(count)
    }

    fn nearest_vertex(
        &mut self,
        table: &TableName,
        point: Coordinate,
    ) -> Result<Option<NearestVertex>, RoutingError> {
        let step = "nearest vertex query";
        let mut tx = self.client.transaction().map_err(|e| map_pg_error(step, e))?;
        let row = tx
            .query_opt(&sql::nearest_vertex(table), &[&point.lon, &point.lat])
            .map_err(|e| map_pg_error(step, e))?;
        tx.commit().map_err(|e| map_pg_error(step, e))?;
        Ok(row.map(|r| NearestVertex {
            id: r.get(0),
            coordinate: Coordinate::new(r.get(1), r.get(2)),
            distance: r.get(3),
        }))
    }

    fn shortest_path(
        &mut self,
        table: &TableName,
        source: i64,
        target: i64,
    ) -> Result<Vec<RouteStep>, RoutingError> {
        let step = "shortest path query";
        let mut tx = self.client.transaction().map_err(|e| map_pg_error(step, e))?;
        let rows = tx
            .query(&sql::shortest_path(table), &[&source, &target])
            .map_err(|e| map_pg_error(step, e))?;
        tx.commit().map_err(|e| map_pg_error(step, e))?;
        Ok(rows
            .iter()
            .map(|r| RouteStep {
                seq: r.get(0),
                node: r.get(1),
                edge: r.get(2),
                cost: r.get(3),
                agg_cost: r.get(4),
            })
            .collect())
    }
}
