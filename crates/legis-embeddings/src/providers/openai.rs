//! Hosted embedding provider speaking the OpenAI-compatible `/embeddings` API.

use serde::{Deserialize, Serialize};
use tracing::debug;

use legis_core::config::EmbeddingConfig;
use legis_core::errors::{EmbeddingError, LegisResult};
use legis_core::traits::IEmbeddingProvider;

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingDatum>,
}

#[derive(Deserialize)]
struct EmbeddingDatum {
    embedding: Vec<f32>,
}

/// Provider backed by a hosted OpenAI-compatible embeddings endpoint.
///
/// The model must match the one used to embed the historical snapshot —
/// mixing embedding spaces silently ruins similarity scores, so the
/// dimension of every response is checked against the configured value.
pub struct OpenAiProvider {
    client: reqwest::blocking::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
    dimensions: usize,
}

impl OpenAiProvider {
    pub fn new(config: &EmbeddingConfig) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            endpoint: format!("{}/embeddings", config.api_base.trim_end_matches('/')),
            model: config.model.clone(),
            api_key: std::env::var(&config.api_key_env).ok(),
            dimensions: config.dimensions,
        }
    }
}

impl IEmbeddingProvider for OpenAiProvider {
    fn embed(&self, text: &str) -> LegisResult<Vec<f32>> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| EmbeddingError::ProviderUnavailable {
                provider: "openai".to_string(),
            })?;

        debug!(model = %self.model, chars = text.len(), "requesting query embedding");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&EmbeddingRequest {
                model: &self.model,
                input: text,
            })
            .send()
            .map_err(|e| EmbeddingError::RequestFailed {
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(EmbeddingError::RequestFailed {
                reason: format!("HTTP {}", response.status()),
            }
            .into());
        }

        let body: EmbeddingResponse =
            response.json().map_err(|e| EmbeddingError::MalformedResponse {
                reason: e.to_string(),
            })?;

        let embedding = body
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| EmbeddingError::MalformedResponse {
                reason: "empty data array".to_string(),
            })?;

        if embedding.len() != self.dimensions {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimensions,
                actual: embedding.len(),
            }
            .into());
        }

        Ok(embedding)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "openai"
    }

    fn is_available(&self) -> bool {
        self.api_key.is_some()
    }
}
