//! Affected side, resolved by strict precedence:
//!
//! 1. laterality character of the diagnosis code (index 4)
//! 2. a whole-word bilateral term in the clinical text
//! 3. `left`, then `right`, as substrings of the clinical text
//! 4. `Not Applicable` for midline regions
//!
//! Otherwise the side is unknown.

use preauth_core::models::intake::{IntakeField, IntakeRecord};
use preauth_core::models::labels::{BodyPart, Side};
use regex::Regex;

use crate::error::RulesError;
use crate::lexicon::Lexicon;
use crate::normalize::text_blob;

const TEXT_FIELDS: [IntakeField; 4] = [
    IntakeField::DiagnosisDescription,
    IntakeField::Assessment,
    IntakeField::RangeOfMotion,
    IntakeField::Strength,
];

const CODE_LATERALITY_INDEX: usize = 4;

/// Laterality rules compiled from a [`Lexicon`].
#[derive(Debug, Clone)]
pub struct LateralityResolver {
    code_sides: Vec<(char, Side)>,
    bilateral: Option<Regex>,
    code_suffix_fallback: bool,
}

impl LateralityResolver {
    /// `code_suffix_fallback` reads the code's last character when the
    /// character at index 4 is not a digit.
    pub fn new(lexicon: &Lexicon, code_suffix_fallback: bool) -> Result<Self, RulesError> {
        let bilateral = if lexicon.bilateral_terms.is_empty() {
            None
        } else {
            let alternation = lexicon
                .bilateral_terms
                .iter()
                .map(|t| regex::escape(t))
                .collect::<Vec<_>>()
                .join("|");
            Some(Regex::new(&format!(r"\b(?:{alternation})\b"))?)
        };

        Ok(Self {
            code_sides: lexicon
                .code_laterality
                .iter()
                .map(|entry| (entry.digit, entry.side))
                .collect(),
            bilateral,
            code_suffix_fallback,
        })
    }

    pub fn resolve(&self, record: &IntakeRecord, body_part: Option<BodyPart>) -> Option<Side> {
        if let Some(side) = self.from_code(record.get(IntakeField::PrimaryDiagnosisCode)) {
            return Some(side);
        }

        let text = text_blob(record, &TEXT_FIELDS);
        if self.bilateral.as_ref().is_some_and(|re| re.is_match(&text)) {
            return Some(Side::Bilateral);
        }
        // Left is checked first: text naming both sides resolves to Left.
        if text.contains("left") {
            return Some(Side::Left);
        }
        if text.contains("right") {
            return Some(Side::Right);
        }

        body_part
            .filter(|part| part.is_midline())
            .map(|_| Side::NotApplicable)
    }

    fn from_code(&self, code: &str) -> Option<Side> {
        let at_index = code.chars().nth(CODE_LATERALITY_INDEX)?;

        let marker = if self.code_suffix_fallback && !at_index.is_ascii_digit() {
            code.chars().last()?
        } else {
            at_index
        };

        self.code_sides
            .iter()
            .find(|(digit, _)| *digit == marker)
            .map(|(_, side)| *side)
    }
}
