//! Unit tests for LangOption records and the language catalog.

use serde_json::json;

use transcript_bridge::record::{FieldMap, Record, RecordSource};
use transcript_bridge::types::errors::{RecordError, ValidationError};
use transcript_bridge::types::lang_option::{LangOption, LanguageCatalog, AUTO_DETECT};

#[test]
fn test_empty_mapping_yields_empty_option() {
    let option = LangOption::construct(RecordSource::Fields(&FieldMap::new())).unwrap();
    assert_eq!(option, LangOption { code: String::new(), name: String::new() });
}

#[test]
fn test_create_from_without_source() {
    assert_eq!(LangOption::create_from(None), LangOption::default());
}

#[test]
fn test_from_text() {
    let option = LangOption::parse_from_text(r#"{"code":"de","name":"German"}"#).unwrap();
    assert_eq!(option, LangOption::new("de", "German"));
}

#[test]
fn test_extra_fields_are_ignored() {
    let option = LangOption::parse_from_text(r#"{"code":"de","name":"German","flag":"DE"}"#).unwrap();
    assert_eq!(option, LangOption::new("de", "German"));
}

#[test]
fn test_from_value_accepts_text_and_objects() {
    let from_obj = LangOption::from_value(&json!({"code": "en", "name": "English"})).unwrap();
    let from_text = LangOption::from_value(&json!(r#"{"code":"en","name":"English"}"#)).unwrap();
    assert_eq!(from_obj, from_text);
}

#[test]
fn test_from_value_rejects_other_json() {
    assert!(matches!(
        LangOption::from_value(&json!(["en"])),
        Err(RecordError::Parse(_))
    ));
    assert!(matches!(
        LangOption::from_value(&json!("not json")),
        Err(RecordError::Parse(_))
    ));
}

#[test]
fn test_to_text_round_trip() {
    let option = LangOption::new("uk", "Ukrainian");
    let text = option.to_text().unwrap();
    assert_eq!(text, r#"{"code":"uk","name":"Ukrainian"}"#);
    assert_eq!(LangOption::parse_from_text(&text).unwrap(), option);
}

// ─── Catalog ───

#[test]
fn test_builtin_catalog_lookup() {
    let catalog = LanguageCatalog::builtin();
    assert!(catalog.contains(AUTO_DETECT));
    assert!(catalog.contains("ru"));
    assert_eq!(catalog.find("ja").map(|o| o.name.as_str()), Some("Japanese"));
    assert!(catalog.find("xx").is_none());
    assert!(!catalog.is_empty());
}

#[test]
fn test_catalog_rejects_duplicate_codes() {
    let res = LanguageCatalog::from_options(vec![
        LangOption::new("en", "English"),
        LangOption::new("de", "German"),
        LangOption::new("en", "English (US)"),
    ]);
    assert_eq!(res, Err(ValidationError::DuplicateLanguageCode("en".to_string())));
}

#[test]
fn test_catalog_keeps_order() {
    let catalog = LanguageCatalog::from_options(vec![
        LangOption::new("fr", "French"),
        LangOption::new("en", "English"),
    ])
    .unwrap();
    let codes: Vec<&str> = catalog.options().iter().map(|o| o.code.as_str()).collect();
    assert_eq!(codes, vec!["fr", "en"]);
}
