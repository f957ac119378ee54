//! Spreadsheet intake.
//!
//! Only the first worksheet is read. Its first row is the header, exactly
//! as with CSV, and every cell is turned back into the text a user would
//! see so the rules engine never deals with spreadsheet types.

use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto_from_rs};
use jiff::ToSpan;
use jiff::civil::{Date, date};
use preauth_core::models::intake::IntakeRecord;

use crate::error::IngestError;

/// Read the first worksheet of an `.xlsx`, `.xlsm`, `.xlsb`, `.xls` or
/// `.ods` workbook. Empty cells are absent and blank rows are skipped.
pub fn read_excel(path: &Path) -> Result<Vec<IntakeRecord>, IngestError> {
    let bytes = std::fs::read(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::NoWorksheet(path.to_path_buf()))??;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(Vec::new());
    };
    let header: Vec<String> = header
        .iter()
        .map(|cell| cell_text(cell).unwrap_or_default())
        .collect();

    let records = rows
        .filter(|row| row.iter().any(|cell| cell_text(cell).is_some()))
        .map(|row| {
            IntakeRecord::from_columns(
                header
                    .iter()
                    .zip(row)
                    .filter_map(|(column, cell)| Some((column, cell_text(cell)?))),
            )
        })
        .collect();
    Ok(records)
}

/// Cell value as display text. `None` for empty and error cells.
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
        Data::Int(n) => Some(n.to_string()),
        // 1042.0 renders as "1042"
        Data::Float(n) => Some(n.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        Data::DateTime(dt) => match serial_date(dt.as_f64()) {
            Some(day) if dt.is_datetime() => Some(day.to_string()),
            _ => Some(dt.as_f64().to_string()),
        },
    }
}

// Day 0 of the 1900 date system, accounting for the phantom 1900-02-29.
const EXCEL_EPOCH: Date = date(1899, 12, 30);

/// Calendar date of an Excel serial number; the time of day is dropped.
fn serial_date(serial: f64) -> Option<Date> {
    if !serial.is_finite() || serial < 1.0 {
        return None;
    }
    EXCEL_EPOCH.checked_add((serial.trunc() as i64).days()).ok()
}
