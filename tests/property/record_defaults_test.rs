//! Property-based tests for the silent-default policy and parse failures.

use proptest::prelude::*;
use serde_json::{json, Value};

use transcript_bridge::record::{FieldMap, Record};
use transcript_bridge::types::errors::RecordError;
use transcript_bridge::types::file_item::FileItem;
use transcript_bridge::types::lang_option::LangOption;
use transcript_bridge::types::transcription_config::TranscriptionConfig;

const FILE_ITEM_KEYS: [&str; 7] = ["id", "path", "name", "sizeMb", "status", "progress", "error"];

fn full_file_item_fields() -> FieldMap {
    match json!({
        "id": "f1",
        "path": "/tmp/a.wav",
        "name": "a.wav",
        "sizeMb": 12.5,
        "status": "processing",
        "progress": 40,
        "error": "x"
    }) {
        Value::Object(map) => map,
        _ => unreachable!(),
    }
}

/// Values of every JSON kind other than strings and numbers.
fn arb_non_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        Just(json!([])),
        Just(json!({"nested": 1})),
    ]
}

proptest! {
    /// Removing any subset of fields leaves the removed ones at their zero value
    /// and the kept ones unchanged.
    #[test]
    fn missing_fields_take_zero_values(mask in proptest::collection::vec(any::<bool>(), 7)) {
        let full = FileItem::from_fields(&full_file_item_fields());
        let mut fields = full_file_item_fields();
        for (key, drop) in FILE_ITEM_KEYS.iter().zip(&mask) {
            if *drop {
                fields.remove(*key);
            }
        }
        let item = FileItem::from_fields(&fields);

        prop_assert_eq!(&item.id, if mask[0] { "" } else { full.id.as_str() });
        prop_assert_eq!(&item.path, if mask[1] { "" } else { full.path.as_str() });
        prop_assert_eq!(&item.name, if mask[2] { "" } else { full.name.as_str() });
        prop_assert_eq!(item.size_mb, if mask[3] { 0.0 } else { full.size_mb });
        prop_assert_eq!(&item.status, if mask[4] { "" } else { full.status.as_str() });
        prop_assert_eq!(item.progress, if mask[5] { 0.0 } else { full.progress });
        prop_assert_eq!(&item.error, if mask[6] { "" } else { full.error.as_str() });
    }

    /// Any non-string, non-number value degrades to the default without failing.
    #[test]
    fn wrongly_typed_fields_degrade_silently(bad in arb_non_scalar()) {
        let mut fields = FieldMap::new();
        for key in FILE_ITEM_KEYS {
            fields.insert(key.to_string(), bad.clone());
        }
        prop_assert_eq!(FileItem::from_fields(&fields), FileItem::default());
        prop_assert_eq!(LangOption::from_fields(&fields), LangOption::default());
    }

    /// Strings are never read as numbers and numbers never as strings.
    #[test]
    fn no_coercion_between_strings_and_numbers(n in -1e6f64..1e6, s in "[0-9.]{1,8}") {
        let fields = match json!({"sizeMb": s, "progress": s, "id": n, "language": n}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };
        let item = FileItem::from_fields(&fields);
        prop_assert_eq!(item.size_mb, 0.0);
        prop_assert_eq!(item.progress, 0.0);
        prop_assert_eq!(item.id, "");
        prop_assert_eq!(TranscriptionConfig::from_fields(&fields).language, "");
    }

    /// Text that does not start an object can never produce a record.
    #[test]
    fn non_object_text_fails_to_parse(text in "[^{\\s]\\PC{0,40}") {
        let res = TranscriptionConfig::parse_from_text(&text);
        prop_assert!(matches!(res, Err(RecordError::Parse(_))));
    }

    /// Truncating a valid object anywhere before its closing brace is malformed.
    #[test]
    fn truncated_text_fails_to_parse(cut in 0usize..38) {
        let text = r#"{"language":"en","outputFormat":"srt"}"#;
        prop_assume!(cut < text.len());
        let res = TranscriptionConfig::parse_from_text(&text[..cut]);
        prop_assert!(matches!(res, Err(RecordError::Parse(_))));
    }
}

#[test]
fn create_from_none_equals_create_from_empty_for_every_record() {
    let empty = FieldMap::new();
    assert_eq!(FileItem::create_from(None), FileItem::create_from(Some(&empty)));
    assert_eq!(LangOption::create_from(None), LangOption::create_from(Some(&empty)));
    assert_eq!(
        TranscriptionConfig::create_from(None),
        TranscriptionConfig::create_from(Some(&empty))
    );
}
