//! Recipe generation via an external language model.
//!
//! This module provides a trait-based abstraction over generation backends
//! with support for caching and testing. Generation failures never touch
//! the history: callers append an entry only after a successful call.

mod caching;
mod fake;
mod mistral;
mod prompt;

pub use caching::CachingGenerator;
pub use fake::FakeGenerator;
pub use mistral::MistralGenerator;
pub use prompt::build_recipe_prompt;

use crate::config::{AppConfig, DEFAULT_MODEL};
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for generation operations.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Generator not configured: {0}")]
    NotConfigured(String),

    #[error("Cache error: {0}")]
    CacheError(String),
}

/// What to generate a recipe from.
///
/// `ingredients` is the deduplicated selection in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeRequest {
    pub ingredients: Vec<String>,
    pub cooking_method: Option<String>,
    pub difficulty: Option<String>,
}

/// Trait for recipe generation backends.
///
/// Implementations should be stateless and thread-safe. The generator is
/// responsible for producing the free-text recipe content.
#[async_trait]
pub trait RecipeGenerator: Send + Sync + fmt::Debug {
    /// Generate recipe text for a request.
    async fn generate(&self, request: &RecipeRequest) -> Result<String, GenerationError>;

    /// Get the backend name (e.g., "mistral", "fake").
    fn provider_name(&self) -> &'static str;

    /// Get the model name (e.g., "mistral-large-latest").
    fn model_name(&self) -> &str;
}

/// Registry of available generators.
///
/// Use environment variables to configure:
/// - SKILLET_GENERATOR: "mistral" | "fake" (default: "mistral")
/// - SKILLET_MODEL: Model name
/// - MISTRAL_API_KEY: API key for Mistral
pub fn create_generator_from_env() -> Result<Box<dyn RecipeGenerator>, GenerationError> {
    let backend = std::env::var("SKILLET_GENERATOR").unwrap_or_else(|_| "mistral".to_string());

    match backend.as_str() {
        "fake" => Ok(Box::new(FakeGenerator::default())),
        "mistral" => {
            let api_key = std::env::var("MISTRAL_API_KEY")
                .map_err(|_| GenerationError::NotConfigured("MISTRAL_API_KEY not set".to_string()))?;
            let model =
                std::env::var("SKILLET_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
            Ok(Box::new(MistralGenerator::new(api_key, model)))
        }
        other => Err(GenerationError::NotConfigured(format!(
            "Unknown generator: {}",
            other
        ))),
    }
}

/// Create a generator with disk caching enabled.
///
/// Cache directory comes from SKILLET_CACHE_DIR or the default location.
pub fn create_cached_generator_from_env() -> Result<Box<dyn RecipeGenerator>, GenerationError> {
    let inner = create_generator_from_env()?;
    let cache_dir = AppConfig::from_env().cache_dir;
    Ok(Box::new(CachingGenerator::new(inner, cache_dir)))
}
