use std::{collections::HashMap, sync::Arc};

use crate::model::ModelFamily;
use crate::vendor::VendorExtractor;
use crate::vendors;

/// Registry of vendor extractors by family.
#[derive(Clone, Default)]
pub struct ExtractorRegistry {
    extractors: HashMap<ModelFamily, Arc<dyn VendorExtractor>>,
}

impl ExtractorRegistry {
    /// An empty registry; every family is a no-op until registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in vendor schema.
    pub fn with_builtin() -> Self {
        let mut reg = Self::new();
        for extractor in vendors::builtin() {
            reg.register(extractor);
        }
        reg
    }

    /// Add an extractor under its own family, replacing any previous one.
    /// Returns the replaced extractor, if any.
    pub fn register(
        &mut self,
        extractor: Arc<dyn VendorExtractor>,
    ) -> Option<Arc<dyn VendorExtractor>> {
        self.extractors.insert(extractor.family(), extractor)
    }

    /// Drop the extractor for `family`, so its bodies are ignored.
    pub fn remove(&mut self, family: ModelFamily) -> Option<Arc<dyn VendorExtractor>> {
        self.extractors.remove(&family)
    }

    pub fn get(&self, family: ModelFamily) -> Option<Arc<dyn VendorExtractor>> {
        self.extractors.get(&family).cloned()
    }

    /// Registered families, sorted.
    pub fn families(&self) -> Vec<ModelFamily> {
        let mut out: Vec<_> = self.extractors.keys().copied().collect();
        out.sort();
        out
    }
}

impl std::fmt::Debug for ExtractorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtractorRegistry")
            .field("families", &self.families())
            .finish()
    }
}
