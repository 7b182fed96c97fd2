use serde_json::Value;

use crate::{
    model::ModelFamily,
    probe::{self, Seg::Key},
    telemetry::{
        TagSink, TagValue, KEY_REQUEST_MAX_TOKENS, KEY_REQUEST_TEMPERATURE, KEY_REQUEST_TOP_P,
        KEY_RESPONSE_FINISH_REASONS, KEY_USAGE_COMPLETION_TOKENS, KEY_USAGE_PROMPT_TOKENS,
    },
    vendor::{tag_f64, tag_i64, VendorExtractor},
};

/// Amazon Titan text models.
///
/// Request parameters live under `textGenerationConfig`. Responses carry one
/// entry per generated result; all of them are counted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Titan;

const GEN_CONFIG: &str = "textGenerationConfig";

impl VendorExtractor for Titan {
    fn family(&self) -> ModelFamily {
        ModelFamily::Titan
    }

    fn extract_request(&self, doc: &Value, sink: &mut dyn TagSink) {
        tag_f64(sink, KEY_REQUEST_TOP_P, doc, &[Key(GEN_CONFIG), Key("topP")]);
        tag_f64(sink, KEY_REQUEST_TEMPERATURE, doc, &[Key(GEN_CONFIG), Key("temperature")]);
        tag_i64(sink, KEY_REQUEST_MAX_TOKENS, doc, &[Key(GEN_CONFIG), Key("maxTokenCount")]);
    }

    fn extract_response(&self, doc: &Value, sink: &mut dyn TagSink) {
        tag_i64(sink, KEY_USAGE_PROMPT_TOKENS, doc, &[Key("inputTextTokenCount")]);

        let Some(results) = probe::array_at(doc, &[Key("results")]) else {
            return;
        };

        let mut completion_tokens: Option<i64> = None;
        let mut reasons = Vec::new();
        for result in results {
            if let Some(n) = probe::i64_at(result, &[Key("tokenCount")]) {
                completion_tokens = Some(completion_tokens.unwrap_or(0).saturating_add(n));
            }
            if let Some(reason) = probe::str_at(result, &[Key("completionReason")]) {
                reasons.push(reason.to_string());
            }
        }

        if let Some(n) = completion_tokens {
            sink.set_tag(KEY_USAGE_COMPLETION_TOKENS, TagValue::I64(n));
        }
        if !reasons.is_empty() {
            sink.set_tag(KEY_RESPONSE_FINISH_REASONS, TagValue::StrList(reasons));
        }
    }
}
