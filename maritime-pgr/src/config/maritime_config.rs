use std::path::PathBuf;

use config::{builder::DefaultState, ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use super::{CostPolicy, TableName};
use crate::RoutingError;

/// run configuration, read once at process start and passed by reference to
/// the loader and the finder.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct MaritimeConfig {
    pub database: DatabaseConfig,
    pub tables: TablesConfig,
    pub geojson_source: GeoJsonSourceConfig,
    #[serde(default)]
    pub routing: RoutingConfig,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct DatabaseConfig {
    pub name: String,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// server-side limit applied to every statement of the session
    #[serde(default)]
    pub statement_timeout_secs: Option<u64>,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct TablesConfig {
    pub routes: TableName,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct GeoJsonSourceConfig {
    pub source: PathBuf,
}

/// behaviors of the edge table load
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct RoutingConfig {
    #[serde(default)]
    pub cost_policy: CostPolicy,
    #[serde(default = "RoutingConfig::default_snapping_tolerance")]
    pub snapping_tolerance: f64,
    #[serde(default = "RoutingConfig::default_check_connectivity")]
    pub check_connectivity: bool,
}

impl RoutingConfig {
    /// in degrees, the unit of SRID 4326
    pub const DEFAULT_SNAPPING_TOLERANCE: f64 = 0.00001;

    fn default_snapping_tolerance() -> f64 {
        Self::DEFAULT_SNAPPING_TOLERANCE
    }

    fn default_check_connectivity() -> bool {
        true
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            cost_policy: CostPolicy::default(),
            snapping_tolerance: Self::DEFAULT_SNAPPING_TOLERANCE,
            check_connectivity: true,
        }
    }
}

impl MaritimeConfig {
    pub const ENV_PREFIX: &'static str = "MARITIME";

    /// reads configuration from a string in the given format, without
    /// environment overrides.
    pub fn from_str_with_format(s: &str, format: FileFormat) -> Result<Self, RoutingError> {
        let builder = config::Config::builder().add_source(File::from_str(s, format));
        Self::build(builder, "inline configuration")
    }

    fn build(builder: ConfigBuilder<DefaultState>, name: &str) -> Result<Self, RoutingError> {
        builder
            .build()
            .map_err(|e| RoutingError::ConfigurationError(format!("failure reading {name}: {e}")))?
            .try_deserialize::<MaritimeConfig>()
            .map_err(|e| RoutingError::ConfigurationError(format!("failure decoding {name}: {e}")))
    }
}

/// reads a .toml, .json or .ini configuration file. environment variables
/// prefixed `MARITIME_` override file values, with `__` separating nested
/// keys, e.g. `MARITIME_DATABASE__PASSWORD`.
impl TryFrom<&String> for MaritimeConfig {
    type Error = RoutingError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let format = if f.ends_with(".toml") {
            FileFormat::Toml
        } else if f.ends_with(".json") {
            FileFormat::Json
        } else if f.ends_with(".ini") {
            FileFormat::Ini
        } else {
            return Err(RoutingError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )));
        };
        let builder = config::Config::builder()
            .add_source(File::new(f, format))
            .add_source(
                Environment::with_prefix(Self::ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );
        Self::build(builder, f)
    }
}
