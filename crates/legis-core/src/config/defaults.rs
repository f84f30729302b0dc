//! Default values shared by the config structs.

pub const DEFAULT_EMBEDDING_PROVIDER: &str = "openai";
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-large";
pub const DEFAULT_EMBEDDING_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_EMBEDDING_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 3072;
