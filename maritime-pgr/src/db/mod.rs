#[cfg(test)]
pub mod memory_database;
mod postgis_database;
mod routing_database;
pub mod sql;

pub use postgis_database::{with_connection, PostgisDatabase};
pub use routing_database::{NearestVertex, RouteStep, RoutingDatabase};
