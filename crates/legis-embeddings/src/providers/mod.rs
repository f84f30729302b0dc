//! Embedding provider implementations.

mod hashed;
mod openai;

pub use hashed::HashedProvider;
pub use openai::OpenAiProvider;

use legis_core::config::EmbeddingConfig;
use legis_core::traits::IEmbeddingProvider;
use tracing::warn;

/// Create the provider named by the config.
///
/// An unrecognized provider name falls back to the hashed provider rather
/// than failing startup; the engine logs the substitution.
pub fn create_provider(config: &EmbeddingConfig) -> Box<dyn IEmbeddingProvider> {
    match config.provider.as_str() {
        "openai" => Box::new(OpenAiProvider::new(config)),
        "hashed" => Box::new(HashedProvider::new(config.dimensions)),
        other => {
            warn!(provider = other, "unknown embedding provider, using hashed");
            Box::new(HashedProvider::new(config.dimensions))
        }
    }
}
