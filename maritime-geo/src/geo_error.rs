use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeoConversionError {
    #[error("failure parsing {0}: {1}")]
    ParseError(String, String),
    #[error("feature is missing required property '{0}'")]
    MissingPropertyError(String),
    #[error("invalid value for '{0}': {1}")]
    ValueError(String, String),
    #[error("failure accessing file {0}: {1}")]
    FileIOError(String, String),
}

impl GeoConversionError {
    /// process exit status reported by the command line tools for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            GeoConversionError::ParseError(_, _) => 3,
            GeoConversionError::MissingPropertyError(_) => 4,
            GeoConversionError::ValueError(_, _) => 5,
            GeoConversionError::FileIOError(_, _) => 6,
        }
    }

    /// sorts a [`csv::Error`] into an i/o failure or a parse failure on the given file.
    pub fn from_csv_error(filename: &str, e: csv::Error) -> GeoConversionError {
        if e.is_io_error() {
            GeoConversionError::FileIOError(filename.to_string(), e.to_string())
        } else {
            GeoConversionError::ParseError(filename.to_string(), e.to_string())
        }
    }
}
