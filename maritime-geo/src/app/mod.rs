mod geo_app;
mod operation;

pub use geo_app::GeoApp;
pub use operation::GeoOperation;
