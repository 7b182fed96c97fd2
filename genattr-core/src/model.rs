use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExtractError;

/// Bedrock model families with a known request/response body schema.
///
/// The serialized form is the family key (`"amazon.titan"`, ...), which is also
/// what configuration files use.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModelFamily {
    #[serde(rename = "amazon.titan")]
    Titan,
    #[serde(rename = "anthropic.claude")]
    Claude,
    #[serde(rename = "meta.llama3")]
    Llama3,
    #[serde(rename = "cohere.command")]
    Command,
    #[serde(rename = "ai21.j2")]
    Jurassic,
    #[serde(rename = "mistral.mistral")]
    Mistral,
    #[serde(rename = "stability.stable")]
    Stability,
}

impl ModelFamily {
    pub const ALL: [ModelFamily; 7] = [
        ModelFamily::Titan,
        ModelFamily::Claude,
        ModelFamily::Llama3,
        ModelFamily::Command,
        ModelFamily::Jurassic,
        ModelFamily::Mistral,
        ModelFamily::Stability,
    ];

    /// The family key as it appears inside Bedrock model ids.
    pub fn key(self) -> &'static str {
        match self {
            Self::Titan => "amazon.titan",
            Self::Claude => "anthropic.claude",
            Self::Llama3 => "meta.llama3",
            Self::Command => "cohere.command",
            Self::Jurassic => "ai21.j2",
            Self::Mistral => "mistral.mistral",
            Self::Stability => "stability.stable",
        }
    }

    /// Exact lookup by family key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Detect the family of a full Bedrock model id.
    ///
    /// Matches on the family key occurring anywhere in the id, so versioned ids
    /// (`amazon.titan-text-express-v1`), cross-region inference profiles
    /// (`us.anthropic.claude-v2:1`) and foundation-model ARNs all resolve.
    pub fn from_model_id(model_id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| model_id.contains(f.key()))
    }
}

impl fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ModelFamily {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
            .ok_or_else(|| ExtractError::Validation(format!("unknown model family '{s}'")))
    }
}
