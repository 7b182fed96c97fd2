//! Tag sinks: the span-side boundary the extractors write into.
//!
//! Extractors only ever add entries to a sink; they never read or remove.

pub mod keys;
pub mod types;
#[cfg(test)]
pub mod test_span;

pub use keys::*;
pub use types::*;

use opentelemetry::global::BoxedSpan;
use opentelemetry::trace::Span as OtelSpanTrait;
use opentelemetry::{Array, KeyValue, StringValue, Value};

/// Implement this to receive extracted attributes.
///
/// Requirements:
/// - `set_tag` may be called 0..n times per extraction; a later call for the
///   same key overwrites.
/// - Implementations should not panic. Synchronizing a sink shared across
///   threads is the caller's job.
pub trait TagSink {
    fn set_tag(&mut self, key: &'static str, value: TagValue);
}

impl TagSink for AttributeSet {
    fn set_tag(&mut self, key: &'static str, value: TagValue) {
        self.insert(key, value);
    }
}

/// Records into a `tracing` span. Only fields declared when the span was
/// created are kept, e.g.
/// `info_span!("bedrock.invoke", gen_ai.request.top_p = tracing::field::Empty)`.
impl TagSink for tracing::Span {
    fn set_tag(&mut self, key: &'static str, value: TagValue) {
        match value {
            TagValue::F64(v) => self.record(key, v),
            TagValue::I64(v) => self.record(key, v),
            TagValue::Str(v) => self.record(key, v.as_str()),
            TagValue::StrList(v) => self.record(key, tracing::field::debug(&v)),
        };
    }
}

impl From<TagValue> for Value {
    fn from(value: TagValue) -> Self {
        match value {
            TagValue::F64(v) => Value::F64(v),
            TagValue::I64(v) => Value::I64(v),
            TagValue::Str(v) => Value::String(v.into()),
            TagValue::StrList(v) => {
                Value::Array(Array::String(v.into_iter().map(StringValue::from).collect()))
            }
        }
    }
}

impl TagSink for BoxedSpan {
    fn set_tag(&mut self, key: &'static str, value: TagValue) {
        OtelSpanTrait::set_attribute(self, KeyValue::new(key, value));
    }
}

/// Adapter for any OpenTelemetry span type (SDK spans, custom tracers).
pub struct OtelSpan<'a, S: OtelSpanTrait>(pub &'a mut S);

impl<S: OtelSpanTrait> TagSink for OtelSpan<'_, S> {
    fn set_tag(&mut self, key: &'static str, value: TagValue) {
        self.0.set_attribute(KeyValue::new(key, value));
    }
}
