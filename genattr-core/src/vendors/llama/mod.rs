use serde_json::Value;

use crate::{
    model::ModelFamily,
    probe::Seg::Key,
    telemetry::{
        TagSink, KEY_REQUEST_MAX_TOKENS, KEY_REQUEST_TEMPERATURE, KEY_REQUEST_TOP_P,
        KEY_USAGE_COMPLETION_TOKENS, KEY_USAGE_PROMPT_TOKENS,
    },
    vendor::{tag_f64, tag_finish_reason, tag_i64, VendorExtractor},
};

/// Meta Llama 3.
#[derive(Debug, Clone, Copy, Default)]
pub struct Llama3;

impl VendorExtractor for Llama3 {
    fn family(&self) -> ModelFamily {
        ModelFamily::Llama3
    }

    fn extract_request(&self, doc: &Value, sink: &mut dyn TagSink) {
        tag_f64(sink, KEY_REQUEST_TOP_P, doc, &[Key("top_p")]);
        tag_f64(sink, KEY_REQUEST_TEMPERATURE, doc, &[Key("temperature")]);
        tag_i64(sink, KEY_REQUEST_MAX_TOKENS, doc, &[Key("max_gen_len")]);
    }

    fn extract_response(&self, doc: &Value, sink: &mut dyn TagSink) {
        tag_i64(sink, KEY_USAGE_PROMPT_TOKENS, doc, &[Key("prompt_token_count")]);
        tag_i64(sink, KEY_USAGE_COMPLETION_TOKENS, doc, &[Key("generation_token_count")]);
        tag_finish_reason(sink, doc, &[Key("stop_reason")]);
    }
}
