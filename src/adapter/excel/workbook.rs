//! Payment Terms Workbook Reader
//!
//! Reads columns A (name) and B (discount days) of the terms sheet,
//! starting at row 2. Row 1 is a header and is never read.

use calamine::{open_workbook, Data, Range, Reader, Xlsx, XlsxError};
use std::path::Path;

use crate::domain::entities::raw_row::{CellValue, RawTermRow};
use crate::domain::error::ImportError;

const NAME_COLUMN: u32 = 0;
const DAYS_COLUMN: u32 = 1;
const FIRST_DATA_ROW: u32 = 1;

/// Read the raw data rows of `sheet`
pub fn read_sheet_rows(path: &Path, sheet: &str) -> Result<Vec<RawTermRow>, ImportError> {
    if !path.is_file() {
        return Err(ImportError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|e: XlsxError| ImportError::Workbook {
            path: path.to_path_buf(),
            cause: e.to_string(),
        })?;

    if !workbook.sheet_names().iter().any(|name| name == sheet) {
        return Err(ImportError::SheetNotFound {
            path: path.to_path_buf(),
            sheet: sheet.to_string(),
        });
    }

    let range = workbook
        .worksheet_range(sheet)
        .map_err(|e| ImportError::Workbook {
            path: path.to_path_buf(),
            cause: e.to_string(),
        })?;

    Ok(rows_from_range(&range))
}

/// Collect rows by absolute position so a sparse used-range still maps to A/B
fn rows_from_range(range: &Range<Data>) -> Vec<RawTermRow> {
    let Some((end_row, _)) = range.end() else {
        return Vec::new();
    };

    (FIRST_DATA_ROW..=end_row)
        .map(|row| {
            RawTermRow::new(
                row as usize + 1,
                range.get_value((row, NAME_COLUMN)).and_then(cell_value),
                range.get_value((row, DAYS_COLUMN)).and_then(cell_value),
            )
        })
        .collect()
}

/// Convert an Excel cell; empty and error cells are treated as absent.
/// Date cells keep their own variant so they never count as a number.
pub fn cell_value(cell: &Data) -> Option<CellValue> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => Some(CellValue::Text(s.clone())),
        Data::Int(i) => Some(CellValue::Int(*i)),
        Data::Float(f) => Some(CellValue::Float(*f)),
        Data::Bool(b) => Some(CellValue::Bool(*b)),
        Data::DateTime(dt) => Some(CellValue::Date(dt.as_f64().to_string())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(CellValue::Date(s.clone())),
    }
}
