use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::GeoConversionError;

/// copies one sheet of a workbook into a csv file. the first row of the sheet
/// is treated as the header and written unchanged. the destination is
/// overwritten.
///
/// # Arguments
///
/// * `workbook_src` - path to an .xlsx, .xls, .xlsb or .ods workbook
/// * `sheet_name` - name of the sheet to export
/// * `csv_dest` - path of the csv file to write
///
/// # Returns
///
/// * the number of rows written, including the header
pub fn convert_xlsx_to_csv(
    workbook_src: &Path,
    sheet_name: &str,
    csv_dest: &Path,
) -> Result<usize, GeoConversionError> {
    let src_name = workbook_src.to_str().unwrap_or_default();
    let dest_name = csv_dest.to_str().unwrap_or_default();
    std::fs::metadata(workbook_src)
        .map_err(|e| GeoConversionError::FileIOError(src_name.to_string(), e.to_string()))?;

    let mut workbook = open_workbook_auto(workbook_src)
        .map_err(|e| GeoConversionError::ParseError(src_name.to_string(), e.to_string()))?;
    let range = workbook.worksheet_range(sheet_name).map_err(|e| {
        GeoConversionError::ParseError(format!("{src_name} sheet '{sheet_name}'"), e.to_string())
    })?;

    let mut writer = csv::Writer::from_path(csv_dest)
        .map_err(|e| GeoConversionError::from_csv_error(dest_name, e))?;
    let mut n_rows = 0;
    for row in range.rows() {
        let record = row.iter().map(cell_to_string).collect::<Vec<_>>();
        writer
            .write_record(&record)
            .map_err(|e| GeoConversionError::from_csv_error(dest_name, e))?;
        n_rows += 1;
    }
    writer
        .flush()
        .map_err(|e| GeoConversionError::FileIOError(dest_name.to_string(), e.to_string()))?;
    log::info!("exported {n_rows} rows of sheet '{sheet_name}' from {src_name} to {dest_name}");
    Ok(n_rows)
}

/// renders a cell the way it should appear in the csv. integral floats lose
/// their fractional part, so an id stored as `7.0` is written as `7`.
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_workbook() -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("test/routes.xlsx")
    }

    #[test]
    fn test_cell_to_string() {
        assert_eq!(cell_to_string(&Data::Empty), "");
        assert_eq!(cell_to_string(&Data::Float(7.0)), "7");
        assert_eq!(cell_to_string(&Data::Float(-70.25)), "-70.25");
        assert_eq!(cell_to_string(&Data::Int(12)), "12");
        assert_eq!(cell_to_string(&Data::String(String::from("Suez"))), "Suez");
    }

    #[test]
    fn test_missing_workbook() {
        let dir = std::env::temp_dir().join("maritime_geo_xlsx_missing");
        let result = convert_xlsx_to_csv(&dir.join("routes.xlsx"), "Sheet1", &dir.join("out.csv"));
        assert!(matches!(result, Err(GeoConversionError::FileIOError(_, _))));
    }

    #[test]
    fn test_unreadable_workbook() {
        let dir = std::env::temp_dir().join("maritime_geo_xlsx_unreadable");
        std::fs::create_dir_all(&dir).unwrap();
        let src = dir.join("routes.xlsx");
        std::fs::write(&src, "this is not a zip archive").unwrap();
        let result = convert_xlsx_to_csv(&src, "Sheet1", &dir.join("out.csv"));
        assert!(matches!(result, Err(GeoConversionError::ParseError(_, _))));
    }

    #[test]
    fn test_exports_header_and_rows() {
        let dir = std::env::temp_dir().join("maritime_geo_xlsx_export");
        std::fs::create_dir_all(&dir).unwrap();
        let dest = dir.join("routes.csv");
        let n = convert_xlsx_to_csv(&fixture_workbook(), "routes", &dest).unwrap();
        assert_eq!(n, 3);

        let written = std::fs::read_to_string(&dest).unwrap();
        let lines = written.lines().collect::<Vec<_>>();
        assert_eq!(
            lines,
            vec![
                "id,long1,lat1,long2,lat2,attr1,attr2,attr3,attr4,attr5,attr6",
                "7,10,20,15,25,a,b,c,d,e,f",
                "8,15,25,-70.25,30.5,Suez,x,y,z,u,v",
            ]
        );
    }

    #[test]
    fn test_missing_sheet() {
        let dir = std::env::temp_dir().join("maritime_geo_xlsx_missing_sheet");
        std::fs::create_dir_all(&dir).unwrap();
        let result = convert_xlsx_to_csv(&fixture_workbook(), "Sheet9", &dir.join("out.csv"));
        match result {
            Err(GeoConversionError::ParseError(location, _)) => {
                assert!(location.ends_with("sheet 'Sheet9'"))
            }
            other => panic!("expected parse error, found {other:?}"),
        }
    }
}
