pub mod app;
pub mod config;
pub mod db;
pub mod finder;
pub mod loader;
mod routing_error;

pub use routing_error::RoutingError;
