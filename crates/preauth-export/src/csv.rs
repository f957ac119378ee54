//! Tabular exports.
//!
//! The response CSV always starts with the [`PaResponse::COLUMNS`] header,
//! even for an empty batch, and reads back into identical responses.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use ::csv::{ReaderBuilder, WriterBuilder};
use preauth_core::models::anomaly::AnomalyReport;
use preauth_core::models::response::PaResponse;

use crate::error::ExportError;

pub const ANOMALY_COLUMNS: [&str; 3] = ["Row", "Patient_ID", "Issues"];

pub fn write_responses<W: Write>(output: W, responses: &[PaResponse]) -> Result<(), ExportError> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(output);
    writer.write_record(PaResponse::COLUMNS)?;
    for response in responses {
        writer.serialize(response)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn read_responses<R: Read>(input: R) -> Result<Vec<PaResponse>, ExportError> {
    let mut reader = ReaderBuilder::new().from_reader(input);
    let responses = reader
        .deserialize()
        .collect::<Result<Vec<PaResponse>, _>>()?;
    Ok(responses)
}

/// Write one row per report that needs review. Returns the number of rows
/// written.
pub fn write_anomalies<'a, W, I>(output: W, reports: I) -> Result<usize, ExportError>
where
    W: Write,
    I: IntoIterator<Item = &'a AnomalyReport>,
{
    let mut writer = WriterBuilder::new().from_writer(output);
    writer.write_record(ANOMALY_COLUMNS)?;

    let mut written = 0;
    for report in reports.into_iter().filter(|r| r.needs_review()) {
        writer.write_record([
            report.row.to_string().as_str(),
            report.patient_id.as_str(),
            report.summary().as_str(),
        ])?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}

pub fn write_responses_file(path: &Path, responses: &[PaResponse]) -> Result<(), ExportError> {
    write_responses(create(path)?, responses)?;
    tracing::info!(path = %path.display(), rows = responses.len(), "wrote PA responses");
    Ok(())
}

pub fn write_anomalies_file<'a, I>(path: &Path, reports: I) -> Result<usize, ExportError>
where
    I: IntoIterator<Item = &'a AnomalyReport>,
{
    let written = write_anomalies(create(path)?, reports)?;
    tracing::info!(path = %path.display(), rows = written, "wrote anomaly report");
    Ok(written)
}

pub(crate) fn create(path: &Path) -> Result<File, ExportError> {
    File::create(path).map_err(|source| ExportError::File {
        path: path.to_path_buf(),
        source,
    })
}
