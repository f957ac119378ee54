use thiserror::Error;

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("lexicon parse error: {0}")]
    LexiconParse(#[from] serde_json::Error),

    #[error("lexicon_version {found} is newer than this build supports ({supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("invalid lexicon: {0}")]
    InvalidLexicon(String),

    #[error("invalid match pattern: {0}")]
    Pattern(#[from] regex::Error),
}
