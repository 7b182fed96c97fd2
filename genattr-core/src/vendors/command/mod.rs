use serde_json::Value;

use crate::{
    model::ModelFamily,
    probe::Seg::{Index, Key},
    telemetry::{TagSink, KEY_REQUEST_MAX_TOKENS, KEY_REQUEST_TEMPERATURE, KEY_REQUEST_TOP_P},
    vendor::{tag_f64, tag_finish_reason, tag_i64, VendorExtractor},
};

/// Cohere Command. Top-p is sent as `p`; only the first generation is read.
#[derive(Debug, Clone, Copy, Default)]
pub struct Command;

impl VendorExtractor for Command {
    fn family(&self) -> ModelFamily {
        ModelFamily::Command
    }

    fn extract_request(&self, doc: &Value, sink: &mut dyn TagSink) {
        tag_f64(sink, KEY_REQUEST_TOP_P, doc, &[Key("p")]);
        tag_f64(sink, KEY_REQUEST_TEMPERATURE, doc, &[Key("temperature")]);
        tag_i64(sink, KEY_REQUEST_MAX_TOKENS, doc, &[Key("max_tokens")]);
    }

    fn extract_response(&self, doc: &Value, sink: &mut dyn TagSink) {
        tag_finish_reason(sink, doc, &[Key("generations"), Index(0), Key("finish_reason")]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::{AttributeSet, TagValue, KEY_RESPONSE_FINISH_REASONS};
    use serde_json::json;

    #[test]
    fn request_maps_p_to_top_p() {
        let doc = json!({ "prompt": "hi", "p": 0.75, "k": 0, "temperature": 0.3, "max_tokens": 100 });
        let mut set = AttributeSet::new();
        Command.extract_request(&doc, &mut set);
        assert_eq!(set.len(), 3);
        assert_eq!(set.get(KEY_REQUEST_TOP_P), Some(&TagValue::F64(0.75)));
        assert_eq!(set.get(KEY_REQUEST_TEMPERATURE), Some(&TagValue::F64(0.3)));
        assert_eq!(set.get(KEY_REQUEST_MAX_TOKENS), Some(&TagValue::I64(100)));
    }

    #[test]
    fn request_ignores_top_p_spelling() {
        let doc = json!({ "top_p": 0.75 });
        let mut set = AttributeSet::new();
        Command.extract_request(&doc, &mut set);
        assert!(set.is_empty());
    }

    #[test]
    fn response_reads_only_first_generation() {
        let doc = json!({
            "id": "abc",
            "generations": [
                { "id": "g1", "text": "a", "finish_reason": "COMPLETE" },
                { "id": "g2", "text": "b", "finish_reason": "MAX_TOKENS" }
            ]
        });
        let mut set = AttributeSet::new();
        Command.extract_response(&doc, &mut set);
        assert_eq!(set.len(), 1);
        assert_eq!(
            set.get(KEY_RESPONSE_FINISH_REASONS),
            Some(&TagValue::StrList(vec!["COMPLETE".into()]))
        );
    }

    #[test]
    fn response_empty_generations() {
        let doc = json!({ "generations": [] });
        let mut set = AttributeSet::new();
        Command.extract_response(&doc, &mut set);
        assert!(set.is_empty());
    }
}
