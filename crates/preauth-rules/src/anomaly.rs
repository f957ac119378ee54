use preauth_core::models::anomaly::{Anomaly, AnomalyReport};
use preauth_core::models::response::PaResponse;

/// Cross-check an assembled response. Rules run independently and issues
/// are listed in rule order.
pub fn detect(row: usize, response: &PaResponse) -> AnomalyReport {
    let mut issues = Vec::new();

    if response.body_part.is_none() {
        issues.push(Anomaly::MissingBodyPart);
    }
    if response.side.is_none() {
        issues.push(Anomaly::MissingSide);
    }
    if response.had_surgery && response.surgery_date.trim().is_empty() {
        issues.push(Anomaly::SurgeryWithoutDate);
    }

    AnomalyReport {
        row,
        patient_id: response.patient_id.clone(),
        issues,
    }
}
