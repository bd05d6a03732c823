mod lon_lat;
mod normalize;

pub use lon_lat::Coordinate;
pub use normalize::{fold_degrees, normalize_coordinate};
