use preauth_core::models::anomaly::{Anomaly, AnomalyReport};
use preauth_core::models::labels::{BodyPart, Finding, Findings, Side, SurgeryType};
use preauth_core::models::response::PaResponse;
use preauth_export::csv::{
    read_responses, write_anomalies, write_anomalies_file, write_responses, write_responses_file,
};
use proptest::prelude::*;

fn knee_response() -> PaResponse {
    PaResponse {
        patient_id: "00123".to_string(),
        patient_name: "Okafor, Ada".to_string(),
        dob: "02-04-1980".to_string(),
        payer: "Acme Health".to_string(),
        policy_number: "0099-1".to_string(),
        referring_md: "Dr. Osei".to_string(),
        primary_icd10: "M17.11".to_string(),
        body_part: Some(BodyPart::LowerExtremity),
        side: Some(Side::Right),
        injury_date: "20-01-2024".to_string(),
        had_surgery: true,
        surgery_date: "10-02-2024".to_string(),
        surgery_type: Some(SurgeryType::JointReplacement),
        objective_findings: Findings::new(vec![Finding::RestrictedRom, Finding::PainSwelling]),
    }
}

fn report(row: usize, patient_id: &str, issues: Vec<Anomaly>) -> AnomalyReport {
    AnomalyReport {
        row,
        patient_id: patient_id.to_string(),
        issues,
    }
}

#[test]
fn responses_round_trip() {
    let responses = vec![knee_response(), PaResponse::default()];

    let mut buffer = Vec::new();
    write_responses(&mut buffer, &responses).unwrap();
    let read_back = read_responses(buffer.as_slice()).unwrap();

    assert_eq!(read_back, responses);
}

#[test]
fn response_csv_layout() {
    let mut buffer = Vec::new();
    write_responses(&mut buffer, &[knee_response()]).unwrap();
    let text = String::from_utf8(buffer).unwrap();
    let mut lines = text.lines();

    assert_eq!(lines.next().unwrap(), PaResponse::COLUMNS.join(","));
    assert_eq!(
        lines.next().unwrap(),
        "00123,\"Okafor, Ada\",02-04-1980,Acme Health,0099-1,Dr. Osei,M17.11,\
         Lower Extremity,Right,20-01-2024,Yes,10-02-2024,Joint Replacement Surgery,\
         Restricted ROM; Pain/Swelling"
    );
    assert_eq!(lines.next(), None);
}

#[test]
fn empty_batch_still_has_header() {
    let mut buffer = Vec::new();
    write_responses(&mut buffer, &[]).unwrap();
    let text = String::from_utf8(buffer).unwrap();

    assert_eq!(text.trim_end(), PaResponse::COLUMNS.join(","));
    assert!(read_responses(text.as_bytes()).unwrap().is_empty());
}

#[test]
fn anomaly_csv_lists_only_flagged_records() {
    let reports = vec![
        report(0, "P-1", vec![]),
        report(1, "P-2", vec![Anomaly::MissingBodyPart, Anomaly::MissingSide]),
        report(2, "P-3", vec![Anomaly::SurgeryWithoutDate]),
    ];

    let mut buffer = Vec::new();
    let written = write_anomalies(&mut buffer, &reports).unwrap();
    let text = String::from_utf8(buffer).unwrap();

    assert_eq!(written, 2);
    assert_eq!(
        text.lines().collect::<Vec<_>>(),
        vec![
            "Row,Patient_ID,Issues",
            "1,P-2,Missing Body_Part; Missing Side",
            "2,P-3,Surgery flagged without date",
        ]
    );
}

#[test]
fn files_are_written() {
    let dir = tempfile::tempdir().unwrap();
    let responses_path = dir.path().join("pa_responses.csv");
    let anomalies_path = dir.path().join("anomalies.csv");

    write_responses_file(&responses_path, &[knee_response()]).unwrap();
    let file = std::fs::File::open(&responses_path).unwrap();
    assert_eq!(read_responses(file).unwrap(), vec![knee_response()]);

    let reports = [report(0, "P-1", vec![Anomaly::MissingSide])];
    assert_eq!(write_anomalies_file(&anomalies_path, &reports).unwrap(), 1);
    let text = std::fs::read_to_string(&anomalies_path).unwrap();
    assert!(text.contains("0,P-1,Missing Side"));
}

#[test]
fn unwritable_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("out.csv");
    let err = write_responses_file(&path, &[]).unwrap_err();
    assert!(err.to_string().contains("out.csv"));
}

fn cell_text() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        prop::sample::select(vec![
            "",
            " padded ",
            "\"quoted\"",
            "line\nbreak",
            "crlf\r\nbreak",
            "# not a comment",
            "a,b;c",
            "Zoë Ångström",
        ])
        .prop_map(String::from),
    ]
}

fn body_part() -> impl Strategy<Value = Option<BodyPart>> {
    prop::option::of(prop::sample::select(vec![
        BodyPart::UpperExtremity,
        BodyPart::LowerExtremity,
        BodyPart::SpineTrunk,
        BodyPart::HeadFaceJaw,
        BodyPart::MultipleAreas,
    ]))
}

fn pa_response() -> impl Strategy<Value = PaResponse> {
    (
        [
            cell_text(),
            cell_text(),
            cell_text(),
            cell_text(),
            cell_text(),
            cell_text(),
            cell_text(),
            cell_text(),
            cell_text(),
        ],
        body_part(),
        any::<bool>(),
    )
        .prop_map(|(cells, body_part, had_surgery)| {
            let [id, name, dob, payer, policy, md, icd, injury, surgery] = cells;
            PaResponse {
                patient_id: id,
                patient_name: name,
                dob,
                payer,
                policy_number: policy,
                referring_md: md,
                primary_icd10: icd,
                body_part,
                side: had_surgery.then_some(Side::Bilateral),
                injury_date: injury,
                had_surgery,
                surgery_date: surgery,
                surgery_type: had_surgery.then_some(SurgeryType::Spine),
                objective_findings: Findings::new(vec![Finding::BalanceGait]),
            }
        })
}

proptest! {
    #[test]
    fn any_text_survives_a_round_trip(
        responses in prop::collection::vec(pa_response(), 0..8)
    ) {
        let mut buffer = Vec::new();
        write_responses(&mut buffer, &responses).unwrap();
        prop_assert_eq!(read_responses(buffer.as_slice()).unwrap(), responses);
    }
}
