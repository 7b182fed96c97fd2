/// Span attribute keys written by the extractors (OpenTelemetry GenAI conventions).
/// Keep these stable; changing them is a breaking change for dashboards.
pub const KEY_REQUEST_TOP_P: &str = "gen_ai.request.top_p";
pub const KEY_REQUEST_TEMPERATURE: &str = "gen_ai.request.temperature";
pub const KEY_REQUEST_MAX_TOKENS: &str = "gen_ai.request.max_tokens";

pub const KEY_USAGE_PROMPT_TOKENS: &str = "gen_ai.usage.prompt_tokens";
pub const KEY_USAGE_COMPLETION_TOKENS: &str = "gen_ai.usage.completion_tokens";

pub const KEY_RESPONSE_FINISH_REASONS: &str = "gen_ai.response.finish_reasons";

/// Every key an extractor may write, in a stable order.
pub const ALL_KEYS: [&str; 6] = [
    KEY_REQUEST_TOP_P,
    KEY_REQUEST_TEMPERATURE,
    KEY_REQUEST_MAX_TOKENS,
    KEY_USAGE_PROMPT_TOKENS,
    KEY_USAGE_COMPLETION_TOKENS,
    KEY_RESPONSE_FINISH_REASONS,
];
