//! Field normalization shared by every classifier.

use preauth_core::models::intake::{IntakeField, IntakeRecord};

/// One field, lower-cased. Absent fields are `""`.
pub fn field_text(record: &IntakeRecord, field: IntakeField) -> String {
    record.get(field).to_lowercase()
}

/// The named fields lower-cased and joined by a single space.
///
/// Absent fields still contribute their (empty) slot, so the separator
/// count only depends on `fields`.
pub fn text_blob(record: &IntakeRecord, fields: &[IntakeField]) -> String {
    fields
        .iter()
        .map(|f| record.get(*f))
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Substring test of `text` against any keyword.
pub fn contains_any<S: AsRef<str>>(text: &str, keywords: &[S]) -> bool {
    keywords.iter().any(|kw| text.contains(kw.as_ref()))
}
