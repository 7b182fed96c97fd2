use serde_json::Value;

use crate::{
    model::ModelFamily,
    probe::Seg::{Index, Key},
    telemetry::{TagSink, KEY_REQUEST_MAX_TOKENS, KEY_REQUEST_TEMPERATURE, KEY_REQUEST_TOP_P},
    vendor::{tag_f64, tag_finish_reason, tag_i64, VendorExtractor},
};

/// Mistral text models.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mistral;

impl VendorExtractor for Mistral {
    fn family(&self) -> ModelFamily {
        ModelFamily::Mistral
    }

    fn extract_request(&self, doc: &Value, sink: &mut dyn TagSink) {
        tag_f64(sink, KEY_REQUEST_TOP_P, doc, &[Key("top_p")]);
        tag_f64(sink, KEY_REQUEST_TEMPERATURE, doc, &[Key("temperature")]);
        tag_i64(sink, KEY_REQUEST_MAX_TOKENS, doc, &[Key("max_tokens")]);
    }

    fn extract_response(&self, doc: &Value, sink: &mut dyn TagSink) {
        tag_finish_reason(sink, doc, &[Key("outputs"), Index(0), Key("stop_reason")]);
    }
}
