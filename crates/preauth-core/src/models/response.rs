use serde::{Deserialize, Serialize};

use super::labels::{BodyPart, Findings, Side, SurgeryType};

/// The generated PA answers for one intake record.
///
/// Field order here is the column order of every export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaResponse {
    #[serde(rename = "Patient_ID")]
    pub patient_id: String,
    #[serde(rename = "Patient_Name")]
    pub patient_name: String,
    #[serde(rename = "DOB")]
    pub dob: String,
    #[serde(rename = "Payer")]
    pub payer: String,
    #[serde(rename = "Policy_Number")]
    pub policy_number: String,
    #[serde(rename = "Referring_MD")]
    pub referring_md: String,
    #[serde(rename = "Primary_ICD10")]
    pub primary_icd10: String,
    #[serde(rename = "Body_Part")]
    pub body_part: Option<BodyPart>,
    #[serde(rename = "Side")]
    pub side: Option<Side>,
    #[serde(rename = "Injury_Date")]
    pub injury_date: String,
    #[serde(rename = "Had_Surgery", with = "yes_no")]
    pub had_surgery: bool,
    #[serde(rename = "Surgery_Date")]
    pub surgery_date: String,
    #[serde(rename = "Surgery_Type")]
    pub surgery_type: Option<SurgeryType>,
    #[serde(rename = "Objective_Findings")]
    pub objective_findings: Findings,
}

impl PaResponse {
    pub const COLUMNS: [&'static str; 14] = [
        "Patient_ID",
        "Patient_Name",
        "DOB",
        "Payer",
        "Policy_Number",
        "Referring_MD",
        "Primary_ICD10",
        "Body_Part",
        "Side",
        "Injury_Date",
        "Had_Surgery",
        "Surgery_Date",
        "Surgery_Type",
        "Objective_Findings",
    ];
}

/// `true`/`false` as the form's `Yes`/`No`.
mod yes_no {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "Yes" } else { "No" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.trim() {
            "Yes" => Ok(true),
            "No" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "expected Yes or No, got {other:?}"
            ))),
        }
    }
}
