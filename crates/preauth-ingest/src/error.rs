use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed spreadsheet: {0}")]
    Excel(#[from] calamine::Error),

    #[error("{0} has no worksheets")]
    NoWorksheet(PathBuf),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported intake format: {0}")]
    UnsupportedFormat(String),
}
