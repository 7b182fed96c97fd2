use regex::Regex;

use crate::config::{AliasRule, Config};
use crate::error::{CoreResult, ExtractError};
use crate::model::ModelFamily;

/// Compiled alias rule
#[derive(Debug)]
struct CompiledRule {
    regex: Regex,
    family: ModelFamily,
}

/// Resolves a model id to a family: configured aliases first, then built-in
/// detection from the id itself.
#[derive(Debug, Default)]
pub struct FamilyResolver {
    rules: Vec<CompiledRule>,
}

impl FamilyResolver {
    /// Build a resolver by compiling alias regexes from config.
    pub fn new(cfg: &Config) -> CoreResult<Self> {
        let mut rules = Vec::new();
        for AliasRule { model, family } in &cfg.aliases {
            let regex = Regex::new(model).map_err(|e| {
                ExtractError::Validation(format!("invalid alias regex '{model}': {e}"))
            })?;
            let family = ModelFamily::from_key(family).ok_or_else(|| {
                ExtractError::Validation(format!(
                    "alias '{model}' names unknown model family '{family}'"
                ))
            })?;
            rules.push(CompiledRule { regex, family });
        }
        Ok(Self { rules })
    }

    pub fn resolve(&self, model_id: &str) -> Option<ModelFamily> {
        self.rules
            .iter()
            .find(|r| r.regex.is_match(model_id))
            .map(|r| r.family)
            .or_else(|| ModelFamily::from_model_id(model_id))
    }
}
