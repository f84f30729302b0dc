//! # legis-embeddings
//!
//! Query embedding for the legislative analysis system. Provides a hosted
//! OpenAI-compatible provider (the snapshot corpus is embedded with the same
//! model upstream) and a deterministic hashed fallback for offline use.

pub mod engine;
pub mod providers;

pub use engine::EmbeddingEngine;
pub use providers::{HashedProvider, OpenAiProvider};
