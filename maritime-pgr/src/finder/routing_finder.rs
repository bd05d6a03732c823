use maritime_geo::coordinate::Coordinate;

use super::{LatLng, NearestVertexResult, TimezoneLookup, NO_ECA};
use crate::{
    config::TableName,
    db::{RouteStep, RoutingDatabase},
    RoutingError,
};

/// read-only queries against a routing graph built by the edge table loader.
pub struct RoutingFinder<'a, Z: TimezoneLookup> {
    table: &'a TableName,
    timezones: Z,
}

impl<'a, Z: TimezoneLookup> RoutingFinder<'a, Z> {
    pub fn new(table: &'a TableName, timezones: Z) -> RoutingFinder<'a, Z> {
        RoutingFinder { table, timezones }
    }

    /// normalizes the query point and snaps it to the closest routing vertex.
    ///
    /// # Arguments
    ///
    /// * `db` - database holding the `<table>_vertices_pgr` vertex table
    /// * `lon` - query longitude, any range
    /// * `lat` - query latitude, any range
    ///
    /// # Returns
    ///
    /// * the suggestion payload, or a QueryError if the graph has no vertices
    pub fn find_nearest<D: RoutingDatabase>(
        &self,
        db: &mut D,
        lon: f64,
        lat: f64,
    ) -> Result<NearestVertexResult, RoutingError> {
        let normalized = Coordinate::new(lon, lat).normalized();
        let vertex = db.nearest_vertex(self.table, normalized)?.ok_or_else(|| {
            RoutingError::QueryError(
                String::from("nearest vertex query"),
                format!("no routing vertices in {}", self.table.vertices_table()),
            )
        })?;
        log::debug!(
            "({lon}, {lat}) normalized to ({}, {}) snaps to vertex {} at distance {}",
            normalized.lon,
            normalized.lat,
            vertex.id,
            vertex.distance
        );
        let suggestion = vertex.coordinate;
        let timezone = self.timezones.timezone_at(suggestion.lon, suggestion.lat);
        Ok(NearestVertexResult {
            is_valid: vertex.distance == 0.0,
            suggestion,
            normalized,
            moved_by: vertex.distance,
            validated_lat_lng: LatLng {
                lat: suggestion.lat,
                lng: suggestion.lon,
            },
            eca: false,
            eca_name: String::from(NO_ECA),
            timezone_of_validated: timezone,
        })
    }

    /// shortest undirected path between two routing vertices.
    pub fn one_to_one_route<D: RoutingDatabase>(
        &self,
        db: &mut D,
        source: i64,
        target: i64,
    ) -> Result<Vec<RouteStep>, RoutingError> {
        let steps = db.shortest_path(self.table, source, target)?;
        if steps.is_empty() {
            log::warn!("no route between vertices {source} and {target}");
        }
        Ok(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory_database::InMemoryDatabase;

    struct FixedTimezone(Option<&'static str>);

    impl TimezoneLookup for FixedTimezone {
        fn timezone_at(&self, _lon: f64, _lat: f64) -> Option<String> {
            self.0.map(String::from)
        }
    }

    fn database() -> InMemoryDatabase {
        let mut db = InMemoryDatabase::new();
        db.vertices = vec![
            (1, Coordinate::new(-5.5, 36.0)),
            (2, Coordinate::new(32.5, 31.25)),
            (3, Coordinate::new(-160.0, 10.0)),
        ];
        db
    }

    #[test]
    fn test_point_on_graph_is_valid() {
        let table = TableName::new("maritime_routes_edges").unwrap();
        let finder = RoutingFinder::new(&table, FixedTimezone(Some("Africa/Cairo")));
        let mut db = database();
        let result = finder.find_nearest(&mut db, 32.5, 31.25).unwrap();
        assert!(result.is_valid);
        assert_eq!(result.moved_by, 0.0);
        assert_eq!(result.suggestion, Coordinate::new(32.5, 31.25));
        assert_eq!(result.validated_lat_lng, LatLng { lat: 31.25, lng: 32.5 });
        assert_eq!(result.timezone_of_validated.as_deref(), Some("Africa/Cairo"));
        assert!(!result.eca);
        assert_eq!(result.eca_name, NO_ECA);
    }

    #[test]
    fn test_query_is_normalized_before_lookup() {
        let table = TableName::new("maritime_routes_edges").unwrap();
        let finder = RoutingFinder::new(&table, FixedTimezone(None));
        let mut db = database();
        let result = finder.find_nearest(&mut db, 200.0, 10.0).unwrap();
        assert_eq!(result.normalized, Coordinate::new(-160.0, 10.0));
        assert!(result.is_valid);
        assert_eq!(result.timezone_of_validated, None);
    }

    #[test]
    fn test_point_off_graph_is_moved() {
        let table = TableName::new("maritime_routes_edges").unwrap();
        let finder = RoutingFinder::new(&table, FixedTimezone(None));
        let mut db = database();
        let result = finder.find_nearest(&mut db, -5.5, 39.0).unwrap();
        assert!(!result.is_valid);
        assert_eq!(result.suggestion, Coordinate::new(-5.5, 36.0));
        assert_eq!(result.moved_by, 3.0);
    }

    #[test]
    fn test_payload_keys() {
        let table = TableName::new("maritime_routes_edges").unwrap();
        let finder = RoutingFinder::new(&table, FixedTimezone(Some("Europe/Madrid")));
        let mut db = database();
        let result = finder.find_nearest(&mut db, -5.5, 36.0).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["suggestion"], serde_json::json!([-5.5, 36.0]));
        assert_eq!(json["validatedLatlng"], serde_json::json!({"lat": 36.0, "lng": -5.5}));
        assert_eq!(json["eca_name"], "No ECA");
        assert_eq!(json["timezone_of_validated"], "Europe/Madrid");
    }

    #[test]
    fn test_empty_vertex_table() {
        let table = TableName::new("maritime_routes_edges").unwrap();
        let finder = RoutingFinder::new(&table, FixedTimezone(None));
        let mut db = InMemoryDatabase::new();
        let result = finder.find_nearest(&mut db, 0.0, 0.0);
        assert!(matches!(result, Err(RoutingError::QueryError(_, _))));
    }

    #[test]
    fn test_route_lookup() {
        let table = TableName::new("maritime_routes_edges").unwrap();
        let finder = RoutingFinder::new(&table, FixedTimezone(None));
        let mut db = database();
        let steps = vec![
            RouteStep { seq: 1, node: 1, edge: 10, cost: 2.5, agg_cost: 0.0 },
            RouteStep { seq: 2, node: 2, edge: -1, cost: 0.0, agg_cost: 2.5 },
        ];
        db.routes.insert((1, 2), steps.clone());
        assert_eq!(finder.one_to_one_route(&mut db, 1, 2).unwrap(), steps);
        assert!(finder.one_to_one_route(&mut db, 2, 3).unwrap().is_empty());
    }
}
