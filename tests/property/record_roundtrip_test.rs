//! Property-based tests for record text round-trips.
//!
//! A fully populated record serialized to text and constructed again must be
//! equal field for field to the original.

use proptest::prelude::*;

use transcript_bridge::record::{Record, RecordSource};
use transcript_bridge::types::file_item::FileItem;
use transcript_bridge::types::lang_option::LangOption;
use transcript_bridge::types::transcript::{Segment, TranscriptionResult};
use transcript_bridge::types::transcription_config::TranscriptionConfig;

fn arb_status() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("pending".to_string()),
        Just("processing".to_string()),
        Just("done".to_string()),
        Just("error".to_string()),
        Just("cancelled".to_string()),
    ]
}

fn arb_file_item() -> impl Strategy<Value = FileItem> {
    (
        "[a-f0-9-]{1,36}",
        "[a-zA-Z0-9/._ -]{1,60}",
        "\\PC{0,30}",
        0.0f64..10_000.0,
        arb_status(),
        0.0f64..=100.0,
        "\\PC{0,40}",
    )
        .prop_map(|(id, path, name, size_mb, status, progress, error)| FileItem {
            id,
            path,
            name,
            size_mb,
            status,
            progress,
            error,
        })
}

fn arb_lang_option() -> impl Strategy<Value = LangOption> {
    ("[a-z]{2,5}", "\\PC{1,20}").prop_map(|(code, name)| LangOption { code, name })
}

fn arb_config() -> impl Strategy<Value = TranscriptionConfig> {
    ("[a-z]{2,5}", prop_oneof![Just("txt"), Just("srt"), Just("json"), Just("md")]).prop_map(
        |(language, format)| TranscriptionConfig {
            language,
            output_format: format.to_string(),
        },
    )
}

fn arb_segment() -> impl Strategy<Value = Segment> {
    (0i64..10_000, 0.0f64..36_000.0, 0.0f64..60.0, "\\PC{0,80}").prop_map(
        |(index, start, len, text)| Segment {
            index,
            start,
            end: start + len,
            text,
        },
    )
}

fn arb_result() -> impl Strategy<Value = TranscriptionResult> {
    (
        "[a-zA-Z0-9/._-]{0,40}",
        "[a-z]{0,4}",
        proptest::collection::vec(arb_segment(), 0..20),
    )
        .prop_map(|(file_path, language, segments)| TranscriptionResult {
            file_path,
            language,
            segments,
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn file_item_text_roundtrip(item in arb_file_item()) {
        let text = item.to_text().unwrap();
        let rebuilt = FileItem::construct(RecordSource::Text(&text)).unwrap();
        prop_assert_eq!(rebuilt, item);
    }

    #[test]
    fn lang_option_text_roundtrip(option in arb_lang_option()) {
        let text = option.to_text().unwrap();
        prop_assert_eq!(LangOption::parse_from_text(&text).unwrap(), option);
    }

    #[test]
    fn config_text_roundtrip(config in arb_config()) {
        let text = config.to_text().unwrap();
        prop_assert_eq!(TranscriptionConfig::parse_from_text(&text).unwrap(), config);
    }

    #[test]
    fn result_text_roundtrip(result in arb_result()) {
        let text = result.to_text().unwrap();
        prop_assert_eq!(TranscriptionResult::parse_from_text(&text).unwrap(), result);
    }

    /// The structured path and the textual path agree.
    #[test]
    fn fields_and_text_paths_agree(item in arb_file_item()) {
        let value = serde_json::to_value(&item).unwrap();
        let fields = value.as_object().unwrap();
        let from_fields = FileItem::construct(RecordSource::Fields(fields)).unwrap();
        let from_text = FileItem::construct(RecordSource::Text(&value.to_string())).unwrap();
        prop_assert_eq!(from_fields, from_text);
    }
}
