use maritime_geo::GeoConversionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoutingError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure connecting to routing database: {0}")]
    ConnectionError(String),
    #[error("routing database rejected {0}: {1}")]
    QueryError(String, String),
    #[error("routing database timed out during {0}: {1}")]
    TimeoutError(String, String),
    #[error("failure accessing file {0}: {1}")]
    FileIOError(String, String),
    #[error("failure reading route features: {source}")]
    GeoConversionError {
        #[from]
        source: GeoConversionError,
    },
}

impl RoutingError {
    /// process exit status reported by the command line tool for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            RoutingError::ConfigurationError(_) => 2,
            RoutingError::GeoConversionError { source } => source.exit_code(),
            RoutingError::FileIOError(_, _) => 6,
            RoutingError::ConnectionError(_) => 7,
            RoutingError::QueryError(_, _) => 8,
            RoutingError::TimeoutError(_, _) => 9,
        }
    }
}
