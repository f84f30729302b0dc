//! EmbeddingEngine — provider selection with graceful degradation.

use tracing::{info, warn};

use legis_core::config::EmbeddingConfig;
use legis_core::errors::LegisResult;
use legis_core::traits::IEmbeddingProvider;

use crate::providers::{self, HashedProvider};

/// Wraps the configured provider with a hashed last-resort fallback.
///
/// The primary is consulted first; if it reports itself unavailable (for
/// example, no API key in the environment) the fallback takes over. A hard
/// failure from an available primary is still an error — degrading a live
/// network fault to a low-quality embedding would silently skew results.
pub struct EmbeddingEngine {
    primary: Box<dyn IEmbeddingProvider>,
    fallback: HashedProvider,
}

impl EmbeddingEngine {
    pub fn new(config: &EmbeddingConfig) -> Self {
        let primary = providers::create_provider(config);
        info!(
            provider = primary.name(),
            dims = config.dimensions,
            available = primary.is_available(),
            "embedding engine initialized"
        );
        Self {
            primary,
            fallback: HashedProvider::new(config.dimensions),
        }
    }

    /// Name of the provider that would serve the next request.
    pub fn active_provider_name(&self) -> &str {
        if self.primary.is_available() {
            self.primary.name()
        } else {
            self.fallback.name()
        }
    }
}

impl IEmbeddingProvider for EmbeddingEngine {
    fn embed(&self, text: &str) -> LegisResult<Vec<f32>> {
        if self.primary.is_available() {
            return self.primary.embed(text);
        }
        warn!(
            primary = self.primary.name(),
            "primary embedding provider unavailable, using hashed fallback"
        );
        self.fallback.embed(text)
    }

    fn dimensions(&self) -> usize {
        self.primary.dimensions()
    }

    fn name(&self) -> &str {
        "embedding-engine"
    }

    fn is_available(&self) -> bool {
        true
    }
}
