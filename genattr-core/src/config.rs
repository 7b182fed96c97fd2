use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::model::ModelFamily;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AliasRule {
    /// Regex applied to the model id, e.g. ^arn:aws:bedrock:.*:application-inference-profile/.*
    pub model: String,
    /// Family key to use when this rule matches, e.g. "anthropic.claude"
    pub family: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Checked in order before built-in family detection. First match wins.
    #[serde(default)]
    pub aliases: Vec<AliasRule>,
    /// Families whose bodies are never inspected.
    #[serde(default)]
    pub disabled: Vec<ModelFamily>,
}

impl Config {
    /// Load a Config from a file path (JSON or TOML by extension). If the
    /// extension is missing or unrecognized, try JSON first, then TOML.
    pub fn from_path<P: AsRef<Path>>(path: P) -> crate::error::CoreResult<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(crate::error::ExtractError::from)?;
        let s =
            std::str::from_utf8(&bytes).map_err(|e| crate::error::ExtractError::Other(e.into()))?;
        let cfg: Self = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str::<Self>(s)
                .map_err(|e| crate::error::ExtractError::Other(e.into()))?,
            Some("toml") => toml::from_str::<Self>(s)
                .map_err(|e| crate::error::ExtractError::Other(e.into()))?,
            _ => serde_json::from_str::<Self>(s)
                .map_err(|e| crate::error::ExtractError::Other(e.into()))
                .or_else(|_| {
                    toml::from_str::<Self>(s)
                        .map_err(|e| crate::error::ExtractError::Other(e.into()))
                })?,
        };
        Ok(cfg)
    }
}
