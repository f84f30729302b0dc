use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Provider name: "openai" or "hashed".
    pub provider: String,
    /// Embedding model identifier. Must match the model used to build the
    /// historical snapshot, or similarity scores are meaningless.
    pub model: String,
    /// Base URL of the OpenAI-compatible API.
    pub api_base: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    /// Expected embedding dimensionality.
    pub dimensions: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_EMBEDDING_PROVIDER.to_string(),
            model: defaults::DEFAULT_EMBEDDING_MODEL.to_string(),
            api_base: defaults::DEFAULT_EMBEDDING_API_BASE.to_string(),
            api_key_env: defaults::DEFAULT_EMBEDDING_API_KEY_ENV.to_string(),
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
        }
    }
}
