use crate::errors::LegisResult;

/// Embedding generation provider.
///
/// Failures must surface as errors, never as empty vectors — callers need
/// to tell "could not embed" apart from "nothing found".
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a vector of floats.
    fn embed(&self, text: &str) -> LegisResult<Vec<f32>>;

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this provider is currently available.
    fn is_available(&self) -> bool;
}
