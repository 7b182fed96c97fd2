//! Entry points: parse a body, pick the family's extractor, write tags.
//!
//! Nothing here returns an error or panics on bad input. An unknown model, an
//! absent or malformed body, and missing or mistyped fields all end up as
//! fewer attributes on the sink, with at most a `tracing` line.

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::config::Config;
use crate::error::{CoreResult, ExtractError};
use crate::model::ModelFamily;
use crate::probe;
use crate::registry::ExtractorRegistry;
use crate::resolver::FamilyResolver;
use crate::telemetry::TagSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Request,
    Response,
}

impl Direction {
    fn as_str(self) -> &'static str {
        match self {
            Self::Request => "request",
            Self::Response => "response",
        }
    }
}

/// Parse a raw body into a JSON object.
pub fn parse_document(raw: &[u8]) -> CoreResult<Value> {
    let doc: Value = serde_json::from_slice(raw)?;
    if doc.is_object() {
        Ok(doc)
    } else {
        Err(ExtractError::NotAnObject {
            found: probe::type_name(&doc),
        })
    }
}

/// Family resolution plus the registry of per-family extractors.
#[derive(Debug)]
pub struct ModelAttributeExtractor {
    resolver: FamilyResolver,
    registry: ExtractorRegistry,
}

impl Default for ModelAttributeExtractor {
    /// Built-in vendors, no aliases.
    fn default() -> Self {
        Self::new(FamilyResolver::default(), ExtractorRegistry::with_builtin())
    }
}

impl ModelAttributeExtractor {
    pub fn new(resolver: FamilyResolver, registry: ExtractorRegistry) -> Self {
        Self { resolver, registry }
    }

    /// Built-in vendors, with the configured aliases and without disabled families.
    pub fn from_config(cfg: &Config) -> CoreResult<Self> {
        let resolver = FamilyResolver::new(cfg)?;
        let mut registry = ExtractorRegistry::with_builtin();
        for family in &cfg.disabled {
            registry.remove(*family);
        }
        Ok(Self::new(resolver, registry))
    }

    pub fn registry(&self) -> &ExtractorRegistry {
        &self.registry
    }

    /// Family `model_id` resolves to, if any.
    pub fn family_of(&self, model_id: &str) -> Option<ModelFamily> {
        self.resolver.resolve(model_id)
    }

    /// Tag generation parameters found in a serialized request body.
    pub fn extract_request_attributes(
        &self,
        sink: &mut dyn TagSink,
        model_id: &str,
        raw_body: Option<&[u8]>,
    ) {
        self.extract(Direction::Request, sink, model_id, raw_body);
    }

    /// Tag usage and finish reasons found in a serialized response body.
    pub fn extract_response_attributes(
        &self,
        sink: &mut dyn TagSink,
        model_id: &str,
        raw_body: Option<&[u8]>,
    ) {
        self.extract(Direction::Response, sink, model_id, raw_body);
    }

    fn extract(
        &self,
        direction: Direction,
        sink: &mut dyn TagSink,
        model_id: &str,
        raw_body: Option<&[u8]>,
    ) {
        let Some(family) = self.resolver.resolve(model_id) else {
            tracing::trace!(model_id, "unrecognized model id; no attributes extracted");
            return;
        };
        let Some(extractor) = self.registry.get(family) else {
            tracing::trace!(model_id, %family, "no extractor registered for family");
            return;
        };
        let raw = match raw_body {
            Some(raw) if !raw.is_empty() => raw,
            _ => {
                tracing::trace!(model_id, body = direction.as_str(), "empty body; nothing to extract");
                return;
            }
        };
        let doc = match parse_document(raw) {
            Ok(doc) => doc,
            Err(error) => {
                tracing::debug!(
                    model_id,
                    %family,
                    body = direction.as_str(),
                    %error,
                    "body not extractable; skipping"
                );
                return;
            }
        };

        match direction {
            Direction::Request => extractor.extract_request(&doc, sink),
            Direction::Response => extractor.extract_response(&doc, sink),
        }
    }
}

static DEFAULT_EXTRACTOR: Lazy<ModelAttributeExtractor> = Lazy::new(ModelAttributeExtractor::default);

/// [`ModelAttributeExtractor::extract_request_attributes`] on the built-in extractor.
pub fn extract_request_attributes(sink: &mut dyn TagSink, model_id: &str, raw_body: Option<&[u8]>) {
    DEFAULT_EXTRACTOR.extract_request_attributes(sink, model_id, raw_body);
}

/// [`ModelAttributeExtractor::extract_response_attributes`] on the built-in extractor.
pub fn extract_response_attributes(sink: &mut dyn TagSink, model_id: &str, raw_body: Option<&[u8]>) {
    DEFAULT_EXTRACTOR.extract_response_attributes(sink, model_id, raw_body);
}
