use std::fmt;
use std::path::Path;

use crate::error::IngestError;

/// Intake file layouts the reader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeFormat {
    /// Header row followed by one row per patient.
    Csv,
    /// Array of objects keyed by column name.
    Json,
    /// Spreadsheet workbook; the first sheet is read like a CSV.
    Excel,
}

impl IntakeFormat {
    /// Pick the format from the file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Result<Self, IngestError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            Some("xlsx" | "xlsm" | "xlsb" | "xls" | "ods") => Ok(Self::Excel),
            Some(other) => Err(IngestError::UnsupportedFormat(format!(".{other}"))),
            None => Err(IngestError::UnsupportedFormat(format!(
                "{} has no file extension",
                path.display()
            ))),
        }
    }
}

impl fmt::Display for IntakeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => f.write_str("csv"),
            Self::Json => f.write_str("json"),
            Self::Excel => f.write_str("excel"),
        }
    }
}
