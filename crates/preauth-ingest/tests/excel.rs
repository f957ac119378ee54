use std::path::{Path, PathBuf};

use preauth_core::models::intake::IntakeField;
use preauth_ingest::error::IngestError;
use preauth_ingest::{read_excel, read_path};

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/intake.xlsx")
}

#[test]
fn first_sheet_rows_become_records() {
    let records = read_excel(&fixture()).unwrap();
    assert_eq!(records.len(), 3);

    let first = &records[0];
    assert_eq!(first.get(IntakeField::PatientId), "1042");
    assert_eq!(first.get(IntakeField::PatientName), "Okafor, Ada");
    assert_eq!(first.get(IntakeField::PrimaryDiagnosisCode), "M17.11");
    assert_eq!(first.get(IntakeField::Assessment), "Right knee pain");
    assert_eq!(first.get(IntakeField::HadSurgery), "Yes");
}

#[test]
fn date_formatted_cells_become_iso_dates() {
    let records = read_excel(&fixture()).unwrap();
    assert_eq!(records[0].get(IntakeField::DateOfBirth), "1980-04-02");
    assert_eq!(records[1].get(IntakeField::DateOfBirth), "1980-04-02");
}

#[test]
fn text_cells_and_gaps_are_kept_as_written() {
    let records = read_excel(&fixture()).unwrap();

    let second = &records[1];
    assert_eq!(second.get(IntakeField::PatientId), "00123");
    assert_eq!(second.assessment, None);
    assert_eq!(second.get(IntakeField::HadSurgery), "No");

    // the blank row between is skipped
    let third = &records[2];
    assert_eq!(third.get(IntakeField::PatientId), "P-3");
    assert_eq!(third.get(IntakeField::PatientName), "");
}

#[test]
fn read_path_dispatches_to_the_workbook_reader() {
    assert_eq!(read_path(&fixture()).unwrap().len(), 3);
}

#[test]
fn missing_workbook_reports_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_excel(&dir.path().join("absent.xlsx")).unwrap_err();
    assert!(matches!(err, IngestError::Io { .. }));
    assert!(err.to_string().contains("absent.xlsx"));
}

#[test]
fn non_workbook_bytes_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("intake.xlsx");
    std::fs::write(&path, "Patient_ID\nP-1\n").unwrap();
    assert!(matches!(read_excel(&path), Err(IngestError::Excel(_))));
}
