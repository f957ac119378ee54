use preauth_core::models::anomaly::Anomaly;
use preauth_core::models::labels::{BodyPart, Side, SurgeryType};
use preauth_core::models::response::PaResponse;
use preauth_rules::anomaly::detect;

fn complete() -> PaResponse {
    PaResponse {
        patient_id: "P-100".to_string(),
        body_part: Some(BodyPart::LowerExtremity),
        side: Some(Side::Right),
        had_surgery: true,
        surgery_date: "02-03-2024".to_string(),
        surgery_type: Some(SurgeryType::Arthroscopic),
        ..PaResponse::default()
    }
}

#[test]
fn complete_response_has_no_issues() {
    let report = detect(0, &complete());
    assert!(!report.needs_review());
    assert_eq!(report.patient_id, "P-100");
}

#[test]
fn each_rule_fires_on_its_own() {
    let mut response = complete();
    response.body_part = None;
    assert_eq!(detect(0, &response).issues, vec![Anomaly::MissingBodyPart]);

    let mut response = complete();
    response.side = None;
    assert_eq!(detect(0, &response).issues, vec![Anomaly::MissingSide]);

    let mut response = complete();
    response.surgery_date = String::new();
    assert_eq!(detect(0, &response).issues, vec![Anomaly::SurgeryWithoutDate]);
}

#[test]
fn issues_follow_rule_order() {
    let mut response = complete();
    response.surgery_date = String::new();
    response.body_part = None;

    let report = detect(7, &response);
    assert_eq!(report.row, 7);
    assert_eq!(
        report.issues,
        vec![Anomaly::MissingBodyPart, Anomaly::SurgeryWithoutDate]
    );
}

#[test]
fn missing_surgery_date_only_matters_after_surgery() {
    let response = PaResponse {
        had_surgery: false,
        surgery_type: None,
        surgery_date: String::new(),
        ..complete()
    };
    assert!(!detect(0, &response).needs_review());
}
