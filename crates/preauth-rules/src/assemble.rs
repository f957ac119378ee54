use preauth_core::models::intake::{IntakeField, IntakeRecord};
use preauth_core::models::labels::{BodyPart, Findings, Side, SurgeryType};
use preauth_core::models::response::PaResponse;

use crate::dates::format_date;

/// Classifier outputs for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedFields {
    pub body_part: Option<BodyPart>,
    pub side: Option<Side>,
    pub had_surgery: bool,
    pub surgery_type: Option<SurgeryType>,
    pub objective_findings: Findings,
}

/// Merge passthrough identity fields, formatted dates and derived answers
/// into one response. The surgery date is only carried when surgery
/// occurred.
pub fn assemble(record: &IntakeRecord, derived: DerivedFields) -> PaResponse {
    let passthrough = |field: IntakeField| record.get(field).to_string();

    let surgery_date = if derived.had_surgery {
        format_date(record.get(IntakeField::DateOfSurgery))
    } else {
        String::new()
    };

    PaResponse {
        patient_id: passthrough(IntakeField::PatientId),
        patient_name: passthrough(IntakeField::PatientName),
        dob: format_date(record.get(IntakeField::DateOfBirth)),
        payer: passthrough(IntakeField::InsurancePayer),
        policy_number: passthrough(IntakeField::PolicyNumber),
        referring_md: passthrough(IntakeField::ReferringPhysician),
        primary_icd10: passthrough(IntakeField::PrimaryDiagnosisCode),
        body_part: derived.body_part,
        side: derived.side,
        injury_date: format_date(record.get(IntakeField::DateOfInjuryOnset)),
        had_surgery: derived.had_surgery,
        surgery_date,
        surgery_type: derived.surgery_type,
        objective_findings: derived.objective_findings,
    }
}
