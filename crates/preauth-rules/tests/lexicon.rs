use preauth_core::models::labels::{BodyPart, Side};
use preauth_rules::error::RulesError;
use preauth_rules::lexicon::{CURRENT_VERSION, Lexicon};

#[test]
fn canonical_lexicon_is_valid() {
    let lexicon = Lexicon::canonical();
    lexicon.validate().unwrap();
    assert_eq!(lexicon.lexicon_version, CURRENT_VERSION);
    assert_eq!(
        lexicon.body_parts.iter().map(|b| b.category).collect::<Vec<_>>(),
        BodyPart::ANATOMICAL.to_vec()
    );
}

#[test]
fn json_round_trip_preserves_tables() {
    let canonical = Lexicon::canonical();
    let json = canonical.to_json_pretty().unwrap();
    assert!(json.contains("\"lexicon_version\": 1"));
    assert!(json.contains("\"Upper Extremity\""));
    assert!(json.contains("\"Range_of_Motion\""));

    assert_eq!(Lexicon::from_json(&json).unwrap(), canonical);
}

#[test]
fn unversioned_file_is_migrated() {
    let mut value = serde_json::to_value(Lexicon::canonical()).unwrap();
    let obj = value.as_object_mut().unwrap();
    obj.remove("lexicon_version");
    obj.remove("code_laterality");
    obj.remove("bilateral_terms");

    let lexicon = Lexicon::from_json(&value.to_string()).unwrap();
    assert_eq!(lexicon.lexicon_version, 1);
    assert_eq!(lexicon.code_laterality.len(), 3);
    assert_eq!(lexicon.code_laterality[1].digit, '2');
    assert_eq!(lexicon.code_laterality[1].side, Side::Left);
    assert_eq!(lexicon.bilateral_terms, vec!["bilateral", "both", "bilat"]);
}

#[test]
fn newer_version_is_rejected() {
    let mut value = serde_json::to_value(Lexicon::canonical()).unwrap();
    value["lexicon_version"] = serde_json::json!(CURRENT_VERSION + 1);

    let err = Lexicon::from_json(&value.to_string()).unwrap_err();
    let RulesError::UnsupportedVersion { found, supported } = err else {
        panic!("expected UnsupportedVersion, got {err:?}");
    };
    assert_eq!(found, CURRENT_VERSION + 1);
    assert_eq!(supported, CURRENT_VERSION);
}

#[test]
fn keywords_are_lowercased_on_load_but_prefixes_are_not() {
    let mut value = serde_json::to_value(Lexicon::canonical()).unwrap();
    value["body_parts"][0]["keywords"] = serde_json::json!(["Shoulder", "ELBOW"]);
    value["body_parts"][0]["code_prefixes"] = serde_json::json!(["M75"]);

    let lexicon = Lexicon::from_json(&value.to_string()).unwrap();
    assert_eq!(lexicon.body_parts[0].keywords, vec!["shoulder", "elbow"]);
    assert_eq!(lexicon.body_parts[0].code_prefixes, vec!["M75"]);
}

#[test]
fn empty_terms_are_rejected() {
    let mut value = serde_json::to_value(Lexicon::canonical()).unwrap();
    value["surgery_buckets"][0]["keywords"] = serde_json::json!(["tkr", " "]);

    let err = Lexicon::from_json(&value.to_string()).unwrap_err();
    assert!(matches!(err, RulesError::InvalidLexicon(_)));
}

#[test]
fn systemic_bucket_is_rejected() {
    let mut lexicon = Lexicon::canonical();
    lexicon.body_parts[0].category = BodyPart::MultipleAreas;
    assert!(matches!(
        lexicon.validate(),
        Err(RulesError::InvalidLexicon(_))
    ));
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(
        Lexicon::from_json("{ not json"),
        Err(RulesError::LexiconParse(_))
    ));
}
