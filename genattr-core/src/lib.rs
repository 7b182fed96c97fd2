pub mod config;
pub mod error;
pub mod extractor;
pub mod model;
pub mod probe;
pub mod registry;
pub mod resolver;
pub mod telemetry;
pub mod vendor;
pub mod vendors;

pub use extractor::{extract_request_attributes, extract_response_attributes, ModelAttributeExtractor};
pub use model::ModelFamily;
pub use telemetry::{AttributeSet, TagSink, TagValue};
