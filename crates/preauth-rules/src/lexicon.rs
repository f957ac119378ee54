//! Keyword and code-prefix tables that drive every classifier.
//!
//! A [`Lexicon`] is built once (the built-in [`Lexicon::canonical`] table or
//! a JSON file) and then shared read-only across all records. Bucket order
//! is significant: surgery buckets are first-match-wins and finding rules
//! are emitted in declaration order.

use preauth_core::models::intake::IntakeField;
use preauth_core::models::labels::{BodyPart, Finding, Side, SurgeryType};
use serde::{Deserialize, Serialize};

use crate::error::RulesError;

/// Current lexicon file version. Bump when the shape changes and add a
/// step to [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    /// Schema version. Missing or 0 = pre-versioned file.
    #[serde(default)]
    pub lexicon_version: u32,
    pub body_parts: Vec<BodyPartBucket>,
    pub code_laterality: Vec<CodeLaterality>,
    /// Matched as whole words.
    pub bilateral_terms: Vec<String>,
    /// Lower-cased `Had_Surgery` values that mean surgery occurred. Compared
    /// against the untrimmed cell, so `" yes"` does not match.
    pub surgery_truthy: Vec<String>,
    pub surgery_buckets: Vec<SurgeryBucket>,
    pub findings: Vec<FindingRule>,
}

/// One anatomical category: a hit on either list matches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyPartBucket {
    pub category: BodyPart,
    /// Case-sensitive prefixes of the raw diagnosis code.
    pub code_prefixes: Vec<String>,
    pub keywords: Vec<String>,
}

/// Maps the diagnosis code's laterality character to a side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeLaterality {
    pub digit: char,
    pub side: Side,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurgeryBucket {
    pub surgery_type: SurgeryType,
    pub keywords: Vec<String>,
}

/// A finding tag and the single field it is searched in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindingRule {
    pub finding: Finding,
    pub field: IntakeField,
    pub keywords: Vec<String>,
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

impl Lexicon {
    /// The built-in musculoskeletal table.
    pub fn canonical() -> Self {
        Self {
            lexicon_version: CURRENT_VERSION,
            body_parts: vec![
                BodyPartBucket {
                    category: BodyPart::UpperExtremity,
                    code_prefixes: words(&["M75", "S4", "S43", "S45"]),
                    keywords: words(&[
                        "shoulder", "elbow", "wrist", "hand", "arm", "rotator", "carpal", "biceps",
                        "triceps",
                    ]),
                },
                BodyPartBucket {
                    category: BodyPart::LowerExtremity,
                    code_prefixes: words(&["M17", "S83", "S82", "S86"]),
                    keywords: words(&[
                        "hip", "thigh", "knee", "ankle", "foot", "leg", "acl", "mcl", "lcl", "pcl",
                        "quadriceps", "hamstring",
                    ]),
                },
                BodyPartBucket {
                    category: BodyPart::SpineTrunk,
                    code_prefixes: words(&["M54", "S23", "S33", "M51", "M50"]),
                    keywords: words(&[
                        "spine", "back", "lumbar", "thoracic", "cervical", "trunk", "sacral",
                        "pelvis",
                    ]),
                },
                BodyPartBucket {
                    category: BodyPart::HeadFaceJaw,
                    code_prefixes: words(&["S02", "S06"]),
                    keywords: words(&["head", "face", "jaw", "tmj", "concussion", "skull"]),
                },
            ],
            code_laterality: vec![
                CodeLaterality {
                    digit: '1',
                    side: Side::Right,
                },
                CodeLaterality {
                    digit: '2',
                    side: Side::Left,
                },
                CodeLaterality {
                    digit: '3',
                    side: Side::Bilateral,
                },
            ],
            bilateral_terms: default_bilateral_terms(),
            surgery_truthy: words(&["yes", "y", "true", "1"]),
            surgery_buckets: vec![
                SurgeryBucket {
                    surgery_type: SurgeryType::JointReplacement,
                    keywords: words(&[
                        "replacement", "arthroplasty", "tkr", "thr", "total knee", "total hip",
                    ]),
                },
                SurgeryBucket {
                    surgery_type: SurgeryType::Arthroscopic,
                    keywords: words(&["arthroscopic", "arthroscopy", "scope"]),
                },
                SurgeryBucket {
                    surgery_type: SurgeryType::Spine,
                    keywords: words(&["spine surgery", "laminectomy", "fusion", "discectomy"]),
                },
                SurgeryBucket {
                    surgery_type: SurgeryType::FractureTrauma,
                    keywords: words(&["fracture", "orif", "fixation", "hardware", "repair"]),
                },
            ],
            findings: vec![
                FindingRule {
                    finding: Finding::RestrictedRom,
                    field: IntakeField::RangeOfMotion,
                    keywords: words(&["limited", "restriction", "rom"]),
                },
                FindingRule {
                    finding: Finding::StrengthDeficits,
                    field: IntakeField::Strength,
                    keywords: words(&["/5", "weak", "deficit"]),
                },
                FindingRule {
                    finding: Finding::PainSwelling,
                    field: IntakeField::Assessment,
                    keywords: words(&["pain", "tender", "swelling"]),
                },
                FindingRule {
                    finding: Finding::BalanceGait,
                    field: IntakeField::Assessment,
                    keywords: words(&["gait", "balance"]),
                },
                FindingRule {
                    finding: Finding::PositiveSpecialTests,
                    field: IntakeField::Assessment,
                    keywords: words(&[
                        "lachman", "hawkins", "phalen", "empty can", "speed", "drawer",
                        "apprehension",
                    ]),
                },
            ],
        }
    }

    /// Load a lexicon from JSON, migrating older versions forward.
    ///
    /// Keywords are lower-cased on load since they are matched against
    /// lower-cased text. Code prefixes are kept verbatim.
    pub fn from_json(contents: &str) -> Result<Self, RulesError> {
        let json: serde_json::Value = serde_json::from_str(contents)?;
        let on_disk_version = json
            .get("lexicon_version")
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as u32;

        let migrated = migrate(json, on_disk_version)?;
        let mut lexicon: Lexicon = serde_json::from_value(migrated)?;
        lexicon.lowercase_keywords();
        lexicon.validate()?;
        Ok(lexicon)
    }

    pub fn to_json_pretty(&self) -> Result<String, RulesError> {
        let mut stamped = self.clone();
        stamped.lexicon_version = CURRENT_VERSION;
        Ok(serde_json::to_string_pretty(&stamped)?)
    }

    pub fn body_part_bucket(&self, category: BodyPart) -> Option<&BodyPartBucket> {
        self.body_parts.iter().find(|b| b.category == category)
    }

    /// Reject tables the classifiers cannot use safely.
    pub fn validate(&self) -> Result<(), RulesError> {
        for bucket in &self.body_parts {
            if bucket.category == BodyPart::MultipleAreas {
                return Err(RulesError::InvalidLexicon(
                    "body part buckets cannot target \"Multiple Areas / Systemic\"".to_string(),
                ));
            }
            check_terms(bucket.category.label(), &bucket.code_prefixes)?;
            check_terms(bucket.category.label(), &bucket.keywords)?;
        }
        for bucket in &self.surgery_buckets {
            check_terms(bucket.surgery_type.label(), &bucket.keywords)?;
        }
        for rule in &self.findings {
            check_terms(rule.finding.label(), &rule.keywords)?;
        }
        check_terms("bilateral terms", &self.bilateral_terms)?;
        check_terms("surgery truthy tokens", &self.surgery_truthy)?;
        Ok(())
    }

    fn lowercase_keywords(&mut self) {
        fn lower(list: &mut [String]) {
            for word in list {
                *word = word.to_lowercase();
            }
        }
        for bucket in &mut self.body_parts {
            lower(&mut bucket.keywords);
        }
        for bucket in &mut self.surgery_buckets {
            lower(&mut bucket.keywords);
        }
        for rule in &mut self.findings {
            lower(&mut rule.keywords);
        }
        lower(&mut self.bilateral_terms);
        lower(&mut self.surgery_truthy);
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::canonical()
    }
}

fn default_bilateral_terms() -> Vec<String> {
    words(&["bilateral", "both", "bilat"])
}

fn default_code_laterality() -> serde_json::Value {
    serde_json::json!([
        { "digit": "1", "side": "Right" },
        { "digit": "2", "side": "Left" },
        { "digit": "3", "side": "Bilateral" },
    ])
}

// An empty term would match every text.
fn check_terms(owner: &str, terms: &[String]) -> Result<(), RulesError> {
    if terms.iter().any(|t| t.trim().is_empty()) {
        return Err(RulesError::InvalidLexicon(format!(
            "{owner}: empty match term"
        )));
    }
    Ok(())
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each step is a pure transform on the raw JSON value.
fn migrate(
    mut json: serde_json::Value,
    from_version: u32,
) -> Result<serde_json::Value, RulesError> {
    if from_version > CURRENT_VERSION {
        return Err(RulesError::UnsupportedVersion {
            found: from_version,
            supported: CURRENT_VERSION,
        });
    }

    // v0 → v1: laterality digits and bilateral terms became configurable
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| RulesError::InvalidLexicon("lexicon is not a JSON object".to_string()))?;
        obj.entry("code_laterality")
            .or_insert_with(default_code_laterality);
        obj.entry("bilateral_terms")
            .or_insert_with(|| serde_json::json!(default_bilateral_terms()));
        obj.insert(
            "lexicon_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated lexicon v0 → v1 (added code_laterality, bilateral_terms)");
    }

    Ok(json)
}
