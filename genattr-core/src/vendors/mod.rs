pub mod claude;
pub mod command;
pub mod jurassic;
pub mod llama;
pub mod mistral;
pub mod stability;
pub mod titan;

pub use claude::Claude;
pub use command::Command;
pub use jurassic::Jurassic;
pub use llama::Llama3;
pub use mistral::Mistral;
pub use stability::Stability;
pub use titan::Titan;

use std::sync::Arc;

use crate::vendor::VendorExtractor;

/// One extractor per supported family.
pub fn builtin() -> Vec<Arc<dyn VendorExtractor>> {
    vec![
        Arc::new(Titan),
        Arc::new(Claude),
        Arc::new(Llama3),
        Arc::new(Command),
        Arc::new(Jurassic),
        Arc::new(Mistral),
        Arc::new(Stability),
    ]
}
