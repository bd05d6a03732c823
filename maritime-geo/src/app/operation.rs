use std::path::Path;

use clap::Subcommand;
use serde::{Deserialize, Serialize};

use crate::{
    tabular::{csv_ops, xlsx_ops, GeoConverter},
    GeoConversionError,
};

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum GeoOperation {
    /// export one sheet of a workbook to csv
    XlsxToCsv {
        /// source workbook
        #[arg(long)]
        workbook: String,
        /// name of the sheet holding the route rows
        #[arg(long)]
        sheet: String,
        /// destination csv file, overwritten
        #[arg(long)]
        csv: String,
    },
    /// convert a route csv into a GeoJSON FeatureCollection
    CsvToGeojson {
        #[arg(long)]
        csv: String,
        /// destination GeoJSON file, overwritten
        #[arg(long)]
        geojson: String,
    },
    /// run workbook -> csv -> GeoJSON for `<source-folder>/<file-name>.xlsx`
    Convert {
        #[arg(long)]
        source_folder: String,
        /// file stem shared by the .xlsx, .csv and .geojson files
        #[arg(long)]
        file_name: String,
        #[arg(long)]
        sheet: String,
    },
}

impl GeoOperation {
    pub fn run(&self) -> Result<(), GeoConversionError> {
        match self {
            GeoOperation::XlsxToCsv {
                workbook,
                sheet,
                csv,
            } => {
                xlsx_ops::convert_xlsx_to_csv(Path::new(workbook), sheet, Path::new(csv))?;
                Ok(())
            }
            GeoOperation::CsvToGeojson { csv, geojson } => {
                csv_ops::convert_csv_to_geojson(Path::new(csv), Path::new(geojson))?;
                Ok(())
            }
            GeoOperation::Convert {
                source_folder,
                file_name,
                sheet,
            } => {
                let converter = GeoConverter::new(source_folder, file_name);
                let n_features = converter.run(sheet)?;
                eprintln!(
                    "wrote {n_features} features to {}",
                    converter.geojson_path().display()
                );
                Ok(())
            }
        }
    }
}
