pub mod app;
pub mod coordinate;
pub mod feature;
mod geo_error;
pub mod tabular;

pub use geo_error::GeoConversionError;
