//! Type of surgery.

use preauth_core::models::intake::{IntakeField, IntakeRecord};
use preauth_core::models::labels::SurgeryType;

use crate::lexicon::Lexicon;
use crate::normalize::{contains_any, text_blob};

const TEXT_FIELDS: [IntakeField; 3] = [
    IntakeField::DiagnosisDescription,
    IntakeField::Assessment,
    IntakeField::JustificationForPt,
];

/// Whether `Had_Surgery`, lower-cased, is exactly one of the lexicon's
/// truthy tokens. Surrounding whitespace is not stripped.
pub fn had_surgery(lexicon: &Lexicon, record: &IntakeRecord) -> bool {
    let flag = record.get(IntakeField::HadSurgery).to_lowercase();
    lexicon.surgery_truthy.iter().any(|token| *token == flag)
}

/// First bucket in declaration order with a keyword hit, falling back to
/// [`SurgeryType::Other`]. `None` exactly when no surgery occurred.
pub fn classify(lexicon: &Lexicon, record: &IntakeRecord) -> Option<SurgeryType> {
    if !had_surgery(lexicon, record) {
        return None;
    }

    let text = text_blob(record, &TEXT_FIELDS);
    let surgery_type = lexicon
        .surgery_buckets
        .iter()
        .find(|bucket| contains_any(&text, &bucket.keywords))
        .map(|bucket| bucket.surgery_type)
        .unwrap_or(SurgeryType::Other);

    Some(surgery_type)
}
