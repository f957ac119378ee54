//! Affected body part.
//!
//! Code prefixes and text keywords are independent signals: a code hit for
//! one region never suppresses a keyword hit for another, so records that
//! touch several regions come out as [`BodyPart::MultipleAreas`].

use std::collections::BTreeSet;

use preauth_core::models::intake::{IntakeField, IntakeRecord};
use preauth_core::models::labels::BodyPart;

use crate::lexicon::Lexicon;
use crate::normalize::{contains_any, text_blob};

const TEXT_FIELDS: [IntakeField; 2] = [IntakeField::DiagnosisDescription, IntakeField::Assessment];

/// Every anatomical category the record matches, deduplicated.
pub fn matched_categories(lexicon: &Lexicon, record: &IntakeRecord) -> BTreeSet<BodyPart> {
    // Codes are matched raw: prefixes are case and format sensitive.
    let code = record.get(IntakeField::PrimaryDiagnosisCode);
    let text = text_blob(record, &TEXT_FIELDS);

    lexicon
        .body_parts
        .iter()
        .filter(|bucket| {
            bucket
                .code_prefixes
                .iter()
                .any(|prefix| code.starts_with(prefix.as_str()))
                || contains_any(&text, &bucket.keywords)
        })
        .map(|bucket| bucket.category)
        .collect()
}

/// One match wins, two or more are systemic, none is unknown.
pub fn classify(lexicon: &Lexicon, record: &IntakeRecord) -> Option<BodyPart> {
    let matches = matched_categories(lexicon, record);
    match matches.len() {
        0 => None,
        1 => matches.into_iter().next(),
        _ => Some(BodyPart::MultipleAreas),
    }
}
