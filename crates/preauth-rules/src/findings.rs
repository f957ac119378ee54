//! Objective findings. Each rule reads only its own field and every
//! matching rule contributes a tag, in lexicon order.

use preauth_core::models::intake::IntakeRecord;
use preauth_core::models::labels::Findings;

use crate::lexicon::Lexicon;
use crate::normalize::{contains_any, field_text};

pub fn extract(lexicon: &Lexicon, record: &IntakeRecord) -> Findings {
    let found = lexicon
        .findings
        .iter()
        .filter(|rule| contains_any(&field_text(record, rule.field), &rule.keywords))
        .map(|rule| rule.finding)
        .collect();

    Findings::new(found)
}
