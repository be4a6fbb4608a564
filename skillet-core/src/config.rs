//! Application configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Default model used by the Mistral generator.
pub const DEFAULT_MODEL: &str = "mistral-large-latest";

/// Paths for the history store and the generation cache.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Where the recipe history JSON document lives.
    pub history_path: PathBuf,
    /// Directory for cached generator responses.
    pub cache_dir: PathBuf,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `SKILLET_HISTORY_PATH`: history file (default: `~/.skillet/recipe_history.json`)
    /// - `SKILLET_CACHE_DIR`: generation cache directory (default: `~/.skillet/llm-cache`)
    pub fn from_env() -> Self {
        let history_path = env::var("SKILLET_HISTORY_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::default_history_path());

        let cache_dir = env::var("SKILLET_CACHE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::default_cache_dir());

        Self {
            history_path,
            cache_dir,
        }
    }

    /// Default history path: ~/.skillet/recipe_history.json
    pub fn default_history_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".skillet").join("recipe_history.json"))
            .unwrap_or_else(|| PathBuf::from("data/recipe_history.json"))
    }

    /// Default cache directory: ~/.skillet/llm-cache
    pub fn default_cache_dir() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".skillet").join("llm-cache"))
            .unwrap_or_else(|| PathBuf::from("data/llm-cache"))
    }
}
