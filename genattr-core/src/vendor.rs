use serde_json::Value;

use crate::model::ModelFamily;
use crate::probe::{self, Seg};
use crate::telemetry::{TagSink, TagValue, KEY_RESPONSE_FINISH_REASONS};

/// Per-family body schema.
///
/// `doc` is always a JSON object. Implementations read the fields they know,
/// write what they find, and skip everything else without failing.
pub trait VendorExtractor: Send + Sync {
    fn family(&self) -> ModelFamily;

    fn extract_request(&self, _doc: &Value, _sink: &mut dyn TagSink) {}

    fn extract_response(&self, _doc: &Value, _sink: &mut dyn TagSink) {}
}

/// Set `key` from the number at `path`, if there is one.
pub(crate) fn tag_f64(sink: &mut dyn TagSink, key: &'static str, doc: &Value, path: &[Seg<'_>]) {
    match probe::f64_at(doc, path) {
        Some(v) => sink.set_tag(key, TagValue::F64(v)),
        None => log_skipped(key, doc, path),
    }
}

/// Set `key` from the integer at `path`, if there is one.
pub(crate) fn tag_i64(sink: &mut dyn TagSink, key: &'static str, doc: &Value, path: &[Seg<'_>]) {
    match probe::i64_at(doc, path) {
        Some(v) => sink.set_tag(key, TagValue::I64(v)),
        None => log_skipped(key, doc, path),
    }
}

/// Set the finish reasons to the single string at `path`, if there is one.
pub(crate) fn tag_finish_reason(sink: &mut dyn TagSink, doc: &Value, path: &[Seg<'_>]) {
    match probe::str_at(doc, path) {
        Some(reason) => sink.set_tag(
            KEY_RESPONSE_FINISH_REASONS,
            TagValue::StrList(vec![reason.to_string()]),
        ),
        None => log_skipped(KEY_RESPONSE_FINISH_REASONS, doc, path),
    }
}

// Absent fields are normal and stay quiet; present-but-mistyped ones get a trace line.
fn log_skipped(key: &'static str, doc: &Value, path: &[Seg<'_>]) {
    if let Some(found) = probe::value_at(doc, path) {
        tracing::trace!(
            attribute = key,
            path = ?path,
            found = probe::type_name(found),
            "field has unexpected type; attribute skipped"
        );
    }
}
