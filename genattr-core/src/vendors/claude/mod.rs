use serde_json::Value;

use crate::{
    model::ModelFamily,
    probe::Seg::Key,
    telemetry::{TagSink, KEY_REQUEST_MAX_TOKENS, KEY_REQUEST_TEMPERATURE, KEY_REQUEST_TOP_P},
    vendor::{tag_f64, tag_finish_reason, tag_i64, VendorExtractor},
};

/// Anthropic Claude, text completions schema. Responses carry no token counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Claude;

impl VendorExtractor for Claude {
    fn family(&self) -> ModelFamily {
        ModelFamily::Claude
    }

    fn extract_request(&self, doc: &Value, sink: &mut dyn TagSink) {
        tag_f64(sink, KEY_REQUEST_TOP_P, doc, &[Key("top_p")]);
        tag_f64(sink, KEY_REQUEST_TEMPERATURE, doc, &[Key("temperature")]);
        tag_i64(sink, KEY_REQUEST_MAX_TOKENS, doc, &[Key("max_tokens_to_sample")]);
    }

    fn extract_response(&self, doc: &Value, sink: &mut dyn TagSink) {
        tag_finish_reason(sink, doc, &[Key("stop_reason")]);
    }
}
