mod nearest_vertex_result;
mod routing_finder;
mod timezone;

pub use nearest_vertex_result::{LatLng, NearestVertexResult, NO_ECA};
pub use routing_finder::RoutingFinder;
pub use timezone::{NoTimezoneLookup, TimezoneLookup, TzfTimezoneLookup};
