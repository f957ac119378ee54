use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use preauth_core::models::intake::IntakeRecord;

use crate::error::IngestError;
use crate::excel::read_excel;
use crate::format::IntakeFormat;

/// Read CSV intake rows. The first row is the header.
///
/// Cells are kept as text exactly as written, so identifiers like `00123`
/// survive. Short rows leave their trailing columns absent.
pub fn read_csv<R: Read>(input: R) -> Result<Vec<IntakeRecord>, IngestError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(IntakeRecord::from_columns(headers.iter().zip(row.iter())));
    }
    Ok(records)
}

/// Read a JSON array of intake objects.
pub fn read_json<R: Read>(input: R) -> Result<Vec<IntakeRecord>, IngestError> {
    Ok(serde_json::from_reader(input)?)
}

/// Read an intake file, choosing the parser from its extension.
pub fn read_path(path: &Path) -> Result<Vec<IntakeRecord>, IngestError> {
    let format = IntakeFormat::from_path(path)?;
    let records = match format {
        IntakeFormat::Csv => read_csv(open(path)?)?,
        IntakeFormat::Json => read_json(open(path)?)?,
        IntakeFormat::Excel => read_excel(path)?,
    };

    tracing::info!(
        path = %path.display(),
        %format,
        rows = records.len(),
        "loaded intake file"
    );
    Ok(records)
}

fn open(path: &Path) -> Result<BufReader<File>, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}
