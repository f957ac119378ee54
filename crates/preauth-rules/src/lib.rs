//! preauth-rules
//!
//! Deterministic PA answer engine. Pure functions over an [`IntakeRecord`]
//! and an injected [`Lexicon`]: no I/O, no state carried between records.
//!
//! [`IntakeRecord`]: preauth_core::models::intake::IntakeRecord
//! [`Lexicon`]: lexicon::Lexicon

pub mod anomaly;
pub mod assemble;
pub mod body_part;
pub mod dates;
pub mod engine;
pub mod error;
pub mod findings;
pub mod laterality;
pub mod lexicon;
pub mod normalize;
pub mod surgery;
