mod cost_policy;
mod maritime_config;
mod table_name;

pub use cost_policy::CostPolicy;
pub use maritime_config::{
    DatabaseConfig, GeoJsonSourceConfig, MaritimeConfig, RoutingConfig, TablesConfig,
};
pub use table_name::TableName;
