use serde_json::Value;

use crate::{
    model::ModelFamily,
    probe::Seg::{Index, Key},
    telemetry::TagSink,
    vendor::{tag_finish_reason, VendorExtractor},
};

/// Stability image models. Requests carry no generation parameters we record.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stability;

impl VendorExtractor for Stability {
    fn family(&self) -> ModelFamily {
        ModelFamily::Stability
    }

    fn extract_response(&self, doc: &Value, sink: &mut dyn TagSink) {
        tag_finish_reason(sink, doc, &[Key("artifacts"), Index(0), Key("finishReason")]);
    }
}
