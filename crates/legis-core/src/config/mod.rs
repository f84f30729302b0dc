//! Configuration for all subsystems, loadable from TOML.

mod defaults;
mod embedding_config;
mod prediction_config;
mod search_config;

pub use embedding_config::EmbeddingConfig;
pub use prediction_config::PredictionConfig;
pub use search_config::SearchConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{LegisError, LegisResult};

/// Top-level configuration aggregating every subsystem.
///
/// All fields have sensible defaults, so an empty TOML document is a valid
/// configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LegisConfig {
    pub embedding: EmbeddingConfig,
    pub search: SearchConfig,
    pub prediction: PredictionConfig,
}

impl LegisConfig {
    /// Parse a configuration from a TOML document.
    pub fn from_toml_str(s: &str) -> LegisResult<Self> {
        toml::from_str(s).map_err(|e| LegisError::Config {
            reason: e.to_string(),
        })
    }

    /// Load a configuration from a TOML file on disk.
    pub fn load(path: &std::path::Path) -> LegisResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| LegisError::Config {
            reason: format!("{}: {e}", path.display()),
        })?;
        Self::from_toml_str(&text)
    }
}
