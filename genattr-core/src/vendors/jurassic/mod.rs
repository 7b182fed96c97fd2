use serde_json::Value;

use crate::{
    model::ModelFamily,
    probe::Seg::{Index, Key},
    telemetry::{TagSink, KEY_REQUEST_MAX_TOKENS, KEY_REQUEST_TEMPERATURE, KEY_REQUEST_TOP_P},
    vendor::{tag_f64, tag_finish_reason, tag_i64, VendorExtractor},
};

/// AI21 Jurassic-2. The finish reason is an object: `{"reason": "...", ...}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Jurassic;

impl VendorExtractor for Jurassic {
    fn family(&self) -> ModelFamily {
        ModelFamily::Jurassic
    }

    fn extract_request(&self, doc: &Value, sink: &mut dyn TagSink) {
        tag_f64(sink, KEY_REQUEST_TOP_P, doc, &[Key("topP")]);
        tag_f64(sink, KEY_REQUEST_TEMPERATURE, doc, &[Key("temperature")]);
        tag_i64(sink, KEY_REQUEST_MAX_TOKENS, doc, &[Key("maxTokens")]);
    }

    fn extract_response(&self, doc: &Value, sink: &mut dyn TagSink) {
        tag_finish_reason(
            sink,
            doc,
            &[Key("completions"), Index(0), Key("finishReason"), Key("reason")],
        );
    }
}
