pub mod csv_ops;
mod geo_converter;
mod route_row;
pub mod xlsx_ops;

pub use geo_converter::GeoConverter;
pub use route_row::RouteRow;
