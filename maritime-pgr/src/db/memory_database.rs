//! in-memory stand-in for the routing database, used by loader and finder tests.
use std::collections::{HashMap, HashSet};

use maritime_geo::{coordinate::Coordinate, feature::EdgeRecord};
use serde_json::Value;

use super::{NearestVertex, RouteStep, RoutingDatabase};
use crate::{
    config::{CostPolicy, TableName},
    RoutingError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct MemoryEdgeRow {
    pub edge: EdgeRecord,
    pub source: Option<i64>,
    pub target: Option<i64>,
    pub cost: Option<f64>,
    pub reverse_cost: Option<f64>,
}

#[derive(Default)]
pub struct InMemoryDatabase {
    pub tables: HashMap<String, Vec<MemoryEdgeRow>>,
    pub vertices: Vec<(i64, Coordinate)>,
    /// value reported by `count_components`
    pub components: i64,
    pub routes: HashMap<(i64, i64), Vec<RouteStep>>,
    /// name of a method that should fail with a QueryError
    pub fail_on: Option<&'static str>,
    /// methods called, in order
    pub calls: Vec<&'static str>,
}

impl InMemoryDatabase {
    pub fn new() -> InMemoryDatabase {
        InMemoryDatabase {
            components: 1,
            ..Default::default()
        }
    }

    pub fn rows(&self, table: &TableName) -> &[MemoryEdgeRow] {
        self.tables
            .get(table.as_str())
            .map(|rows| rows.as_slice())
            .unwrap_or_default()
    }

    fn enter(&mut self, call: &'static str) -> Result<(), RoutingError> {
        self.calls.push(call);
        if self.fail_on == Some(call) {
            return Err(RoutingError::QueryError(
                call.to_string(),
                String::from("injected failure"),
            ));
        }
        Ok(())
    }

    fn table_mut(&mut self, table: &TableName) -> Result<&mut Vec<MemoryEdgeRow>, RoutingError> {
        self.tables.get_mut(table.as_str()).ok_or_else(|| {
            RoutingError::QueryError(
                String::from("table lookup"),
                format!("relation \"{table}\" does not exist"),
            )
        })
    }

    fn vertex_id(&mut self, point: Coordinate, tolerance: f64) -> i64 {
        let existing = self.vertices.iter().find(|(_, v)| {
            (v.lon - point.lon).abs() <= tolerance && (v.lat - point.lat).abs() <= tolerance
        });
        match existing {
            Some((id, _)) => *id,
            None => {
                let id = self.vertices.len() as i64 + 1;
                self.vertices.push((id, point));
                id
            }
        }
    }
}

fn line_coordinates(geometry_json: &str) -> Option<Vec<Coordinate>> {
    let geometry: Value = serde_json::from_str(geometry_json).ok()?;
    if geometry.get("type")?.as_str()? != "LineString" {
        return None;
    }
    let coords = geometry
        .get("coordinates")?
        .as_array()?
        .iter()
        .map(|c| Some(Coordinate::new(c.get(0)?.as_f64()?, c.get(1)?.as_f64()?)))
        .collect::<Option<Vec<_>>>()?;
    (coords.len() >= 2).then_some(coords)
}

fn planar_length(coords: &[Coordinate]) -> f64 {
    coords
        .windows(2)
        .map(|w| ((w[1].lon - w[0].lon).powi(2) + (w[1].lat - w[0].lat).powi(2)).sqrt())
        .sum()
}

impl RoutingDatabase for InMemoryDatabase {
    fn drop_table_if_exists(&mut self, table: &TableName) -> Result<bool, RoutingError> {
        self.enter("drop_table_if_exists")?;
        self.vertices.clear();
        Ok(self.tables.remove(table.as_str()).is_some())
    }

    fn create_edge_table(&mut self, table: &TableName) -> Result<(), RoutingError> {
        self.enter("create_edge_table")?;
        if self.tables.contains_key(table.as_str()) {
            return Err(RoutingError::QueryError(
                String::from("create edge table"),
                format!("relation \"{table}\" already exists"),
            ));
        }
        self.tables.insert(table.as_str().to_string(), vec![]);
        Ok(())
    }

    fn insert_edges(
        &mut self,
        table: &TableName,
        edges: &[EdgeRecord],
    ) -> Result<u64, RoutingError> {
        self.enter("insert_edges")?;
        if let Some(bad) = edges.iter().find(|e| line_coordinates(&e.geometry_json).is_none()) {
            return Err(RoutingError::QueryError(
                format!("insert of edge {}", bad.id),
                String::from("invalid GeoJSON representation"),
            ));
        }
        let rows = self.table_mut(table)?;
        let mut ids = rows.iter().map(|row| row.edge.id).collect::<HashSet<_>>();
        if let Some(duplicate) = edges.iter().find(|e| !ids.insert(e.id)) {
            return Err(RoutingError::QueryError(
                format!("insert of edge {}", duplicate.id),
                format!("duplicate key value violates unique constraint \"{table}_pkey\""),
            ));
        }
        rows.extend(edges.iter().map(|edge| MemoryEdgeRow {
            edge: edge.clone(),
            source: None,
            target: None,
            cost: None,
            reverse_cost: None,
        }));
        Ok(edges.len() as u64)
    }

    fn assign_costs(&mut self, table: &TableName, policy: CostPolicy) -> Result<u64, RoutingError> {
        self.enter("assign_costs")?;
        let rows = self.table_mut(table)?;
        for row in rows.iter_mut() {
            let length = line_coordinates(&row.edge.geometry_json)
                .map(|c| planar_length(&c))
                .unwrap_or_default();
            let cost = match policy {
                CostPolicy::Geodesic => length,
                CostPolicy::PlanarDoubled => length * 2.0,
            };
            row.cost = Some(cost);
            row.reverse_cost = Some(cost);
        }
        Ok(rows.len() as u64)
    }

    fn create_topology(&mut self, table: &TableName, tolerance: f64) -> Result<(), RoutingError> {
        self.enter("create_topology")?;
        self.vertices.clear();
        let endpoints = self
            .table_mut(table)?
            .iter()
            .map(|row| {
                line_coordinates(&row.edge.geometry_json)
                    .map(|c| (c[0], c[c.len() - 1]))
                    .unwrap_or((Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 0.0)))
            })
            .collect::<Vec<_>>();
        let ids = endpoints
            .into_iter()
            .map(|(start, end)| (self.vertex_id(start, tolerance), self.vertex_id(end, tolerance)))
            .collect::<Vec<_>>();
        let rows = self.table_mut(table)?;
        for (row, (source, target)) in rows.iter_mut().zip(ids) {
            row.source = Some(source);
            row.target = Some(target);
        }
        Ok(())
    }

    fn count_components(&mut self, _table: &TableName) -> Result<i64, RoutingError> {
        self.enter("count_components")?;
        Ok(self.components)
    }

    fn nearest_vertex(
        &mut self,
        _table: &TableName,
        point: Coordinate,
    ) -> Result<Option<NearestVertex>, RoutingError> {
        self.enter("nearest_vertex")?;
        let nearest = self
            .vertices
            .iter()
            .map(|(id, v)| NearestVertex {
                id: *id,
                coordinate: *v,
                distance: planar_length(&[point, *v]),
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance));
        Ok(nearest)
    }

    fn shortest_path(
        &mut self,
        _table: &TableName,
        source: i64,
        target: i64,
    ) -> Result<Vec<RouteStep>, RoutingError> {
        self.enter("shortest_path")?;
        Ok(self.routes.get(&(source, target)).cloned().unwrap_or_default())
    }
}
