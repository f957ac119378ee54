use serde::{Deserialize, Deserializer, Serialize};

/// A column of the patient-intake dataset that the engine knows about.
///
/// Columns outside this set are ignored on ingestion. Serializes as the
/// column name so lexicon files can refer to fields by their header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IntakeField {
    #[serde(rename = "Patient_ID")]
    PatientId,
    #[serde(rename = "Patient_Name")]
    PatientName,
    #[serde(rename = "Date_of_Birth")]
    DateOfBirth,
    #[serde(rename = "Insurance_Payer")]
    InsurancePayer,
    #[serde(rename = "Policy_Number")]
    PolicyNumber,
    #[serde(rename = "Referring_Physician")]
    ReferringPhysician,
    #[serde(rename = "Primary_Diagnosis_Code")]
    PrimaryDiagnosisCode,
    #[serde(rename = "Diagnosis_Description")]
    DiagnosisDescription,
    Assessment,
    #[serde(rename = "Range_of_Motion")]
    RangeOfMotion,
    Strength,
    #[serde(rename = "Justification_for_PT")]
    JustificationForPt,
    #[serde(rename = "Had_Surgery")]
    HadSurgery,
    #[serde(rename = "Date_of_Surgery")]
    DateOfSurgery,
    #[serde(rename = "Date_of_Injury_Onset")]
    DateOfInjuryOnset,
}

impl IntakeField {
    pub const ALL: [IntakeField; 15] = [
        Self::PatientId,
        Self::PatientName,
        Self::DateOfBirth,
        Self::InsurancePayer,
        Self::PolicyNumber,
        Self::ReferringPhysician,
        Self::PrimaryDiagnosisCode,
        Self::DiagnosisDescription,
        Self::Assessment,
        Self::RangeOfMotion,
        Self::Strength,
        Self::JustificationForPt,
        Self::HadSurgery,
        Self::DateOfSurgery,
        Self::DateOfInjuryOnset,
    ];

    /// Column name as it appears in the intake file header.
    pub const fn column(self) -> &'static str {
        match self {
            Self::PatientId => "Patient_ID",
            Self::PatientName => "Patient_Name",
            Self::DateOfBirth => "Date_of_Birth",
            Self::InsurancePayer => "Insurance_Payer",
            Self::PolicyNumber => "Policy_Number",
            Self::ReferringPhysician => "Referring_Physician",
            Self::PrimaryDiagnosisCode => "Primary_Diagnosis_Code",
            Self::DiagnosisDescription => "Diagnosis_Description",
            Self::Assessment => "Assessment",
            Self::RangeOfMotion => "Range_of_Motion",
            Self::Strength => "Strength",
            Self::JustificationForPt => "Justification_for_PT",
            Self::HadSurgery => "Had_Surgery",
            Self::DateOfSurgery => "Date_of_Surgery",
            Self::DateOfInjuryOnset => "Date_of_Injury_Onset",
        }
    }

    /// Look up a field by header name. Surrounding whitespace is ignored,
    /// case is not.
    pub fn from_column(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|f| f.column() == name)
    }
}

/// One raw patient-intake row.
///
/// Every field is declared but may be absent. Absent fields read as the
/// empty string through [`IntakeRecord::get`]; nothing here ever fails on
/// a missing column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeRecord {
    #[serde(
        rename = "Patient_ID",
        default,
        deserialize_with = "scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub patient_id: Option<String>,
    #[serde(
        rename = "Patient_Name",
        default,
        deserialize_with = "scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub patient_name: Option<String>,
    #[serde(
        rename = "Date_of_Birth",
        default,
        deserialize_with = "scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_of_birth: Option<String>,
    #[serde(
        rename = "Insurance_Payer",
        default,
        deserialize_with = "scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub insurance_payer: Option<String>,
    #[serde(
        rename = "Policy_Number",
        default,
        deserialize_with = "scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub policy_number: Option<String>,
    #[serde(
        rename = "Referring_Physician",
        default,
        deserialize_with = "scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub referring_physician: Option<String>,
    #[serde(
        rename = "Primary_Diagnosis_Code",
        default,
        deserialize_with = "scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub primary_diagnosis_code: Option<String>,
    #[serde(
        rename = "Diagnosis_Description",
        default,
        deserialize_with = "scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub diagnosis_description: Option<String>,
    #[serde(
        rename = "Assessment",
        default,
        deserialize_with = "scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub assessment: Option<String>,
    #[serde(
        rename = "Range_of_Motion",
        default,
        deserialize_with = "scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub range_of_motion: Option<String>,
    #[serde(
        rename = "Strength",
        default,
        deserialize_with = "scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub strength: Option<String>,
    #[serde(
        rename = "Justification_for_PT",
        default,
        deserialize_with = "scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub justification_for_pt: Option<String>,
    #[serde(
        rename = "Had_Surgery",
        default,
        deserialize_with = "scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub had_surgery: Option<String>,
    #[serde(
        rename = "Date_of_Surgery",
        default,
        deserialize_with = "scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_of_surgery: Option<String>,
    #[serde(
        rename = "Date_of_Injury_Onset",
        default,
        deserialize_with = "scalar",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_of_injury_onset: Option<String>,
}

impl IntakeRecord {
    /// Build a record from `(column, value)` pairs, e.g. a CSV header zipped
    /// with one row. Unknown columns are dropped.
    pub fn from_columns<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut record = Self::default();
        for (column, value) in pairs {
            if let Some(field) = IntakeField::from_column(column.as_ref()) {
                record.set(field, value);
            }
        }
        record
    }

    /// The field's raw value, or `""` when absent.
    pub fn get(&self, field: IntakeField) -> &str {
        self.slot(field).as_deref().unwrap_or("")
    }

    pub fn set(&mut self, field: IntakeField, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    pub fn with(mut self, field: IntakeField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    fn slot(&self, field: IntakeField) -> &Option<String> {
        match field {
            IntakeField::PatientId => &self.patient_id,
            IntakeField::PatientName => &self.patient_name,
            IntakeField::DateOfBirth => &self.date_of_birth,
            IntakeField::InsurancePayer => &self.insurance_payer,
            IntakeField::PolicyNumber => &self.policy_number,
            IntakeField::ReferringPhysician => &self.referring_physician,
            IntakeField::PrimaryDiagnosisCode => &self.primary_diagnosis_code,
            IntakeField::DiagnosisDescription => &self.diagnosis_description,
            IntakeField::Assessment => &self.assessment,
            IntakeField::RangeOfMotion => &self.range_of_motion,
            IntakeField::Strength => &self.strength,
            IntakeField::JustificationForPt => &self.justification_for_pt,
            IntakeField::HadSurgery => &self.had_surgery,
            IntakeField::DateOfSurgery => &self.date_of_surgery,
            IntakeField::DateOfInjuryOnset => &self.date_of_injury_onset,
        }
    }

    fn slot_mut(&mut self, field: IntakeField) -> &mut Option<String> {
        match field {
            IntakeField::PatientId => &mut self.patient_id,
            IntakeField::PatientName => &mut self.patient_name,
            IntakeField::DateOfBirth => &mut self.date_of_birth,
            IntakeField::InsurancePayer => &mut self.insurance_payer,
            IntakeField::PolicyNumber => &mut self.policy_number,
            IntakeField::ReferringPhysician => &mut self.referring_physician,
            IntakeField::PrimaryDiagnosisCode => &mut self.primary_diagnosis_code,
            IntakeField::DiagnosisDescription => &mut self.diagnosis_description,
            IntakeField::Assessment => &mut self.assessment,
            IntakeField::RangeOfMotion => &mut self.range_of_motion,
            IntakeField::Strength => &mut self.strength,
            IntakeField::JustificationForPt => &mut self.justification_for_pt,
            IntakeField::HadSurgery => &mut self.had_surgery,
            IntakeField::DateOfSurgery => &mut self.date_of_surgery,
            IntakeField::DateOfInjuryOnset => &mut self.date_of_injury_onset,
        }
    }
}

/// Accept any JSON scalar and keep its textual form. `null` is absent.
fn scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }))
}
