use std::path::{Path, PathBuf};

use super::{csv_ops, xlsx_ops};
use crate::GeoConversionError;

/// runs the workbook -> csv -> GeoJSON chain for files sharing one stem in one
/// folder: `<folder>/<name>.xlsx`, `<folder>/<name>.csv`, `<folder>/<name>.geojson`.
#[derive(Debug, Clone)]
pub struct GeoConverter {
    pub source_folder: PathBuf,
    pub file_name: String,
}

impl GeoConverter {
    pub fn new<P: AsRef<Path>>(source_folder: P, file_name: &str) -> GeoConverter {
        GeoConverter {
            source_folder: source_folder.as_ref().to_path_buf(),
            file_name: file_name.to_string(),
        }
    }

    pub fn workbook_path(&self) -> PathBuf {
        self.path_with_extension("xlsx")
    }

    pub fn csv_path(&self) -> PathBuf {
        self.path_with_extension("csv")
    }

    pub fn geojson_path(&self) -> PathBuf {
        self.path_with_extension("geojson")
    }

    pub fn convert_xlsx_to_csv(&self, sheet_name: &str) -> Result<usize, GeoConversionError> {
        xlsx_ops::convert_xlsx_to_csv(&self.workbook_path(), sheet_name, &self.csv_path())
    }

    pub fn convert_csv_to_geojson(&self) -> Result<usize, GeoConversionError> {
        csv_ops::convert_csv_to_geojson(&self.csv_path(), &self.geojson_path())
    }

    /// both conversions in sequence. returns the number of features written.
    pub fn run(&self, sheet_name: &str) -> Result<usize, GeoConversionError> {
        self.convert_xlsx_to_csv(sheet_name)?;
        self.convert_csv_to_geojson()
    }

    fn path_with_extension(&self, extension: &str) -> PathBuf {
        self.source_folder
            .join(format!("{}.{extension}", self.file_name))
    }
}
