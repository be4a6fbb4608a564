//! Caching wrapper for recipe generators.
//!
//! Wraps any RecipeGenerator to cache responses on disk. The cache key is
//! based on the backend name, model name, and prompt hash.

use super::{build_recipe_prompt, GenerationError, RecipeGenerator, RecipeRequest};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::PathBuf;

/// Cached generation metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheMetadata {
    pub provider: String,
    pub model: String,
    pub prompt_hash: String,
    pub cached_at: DateTime<Utc>,
}

/// Cached generation with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CachedGeneration {
    metadata: CacheMetadata,
    recipe: String,
}

/// Cache statistics.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    pub cached_recipes: usize,
}

/// A caching wrapper around any recipe generator.
///
/// Responses are cached to disk based on (provider, model, prompt_hash).
/// The same request to the same model always returns the cached recipe.
#[derive(Debug)]
pub struct CachingGenerator {
    inner: Box<dyn RecipeGenerator>,
    cache_dir: PathBuf,
}

impl CachingGenerator {
    /// Create a new CachingGenerator wrapping the given generator.
    pub fn new(inner: Box<dyn RecipeGenerator>, cache_dir: PathBuf) -> Self {
        Self { inner, cache_dir }
    }

    /// Generate a cache key for a prompt.
    ///
    /// Uses SHA-256 for stable hashing across Rust versions.
    fn cache_key(&self, prompt: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(prompt.as_bytes());
        let result = hasher.finalize();

        // First 16 bytes (32 hex chars) for shorter filenames
        hex::encode(&result[..16])
    }

    /// Cache directory for this backend/model combination.
    fn backend_cache_dir(&self) -> PathBuf {
        self.cache_dir
            .join(self.inner.provider_name())
            .join(self.inner.model_name().replace(['/', ':'], "_"))
    }

    fn cache_path(&self, prompt_hash: &str) -> PathBuf {
        self.backend_cache_dir()
            .join(format!("{}.json", prompt_hash))
    }

    fn get_cached(&self, prompt_hash: &str) -> Option<String> {
        let path = self.cache_path(prompt_hash);
        if path.exists() {
            if let Ok(content) = fs::read_to_string(&path) {
                if let Ok(cached) = serde_json::from_str::<CachedGeneration>(&content) {
                    tracing::debug!(
                        provider = self.inner.provider_name(),
                        model = self.inner.model_name(),
                        prompt_hash = prompt_hash,
                        "generation cache hit"
                    );
                    return Some(cached.recipe);
                }
            }
        }
        None
    }

    fn save_to_cache(&self, prompt_hash: &str, recipe: &str) -> Result<(), GenerationError> {
        let dir = self.backend_cache_dir();
        fs::create_dir_all(&dir).map_err(|e| GenerationError::CacheError(e.to_string()))?;

        let cached = CachedGeneration {
            metadata: CacheMetadata {
                provider: self.inner.provider_name().to_string(),
                model: self.inner.model_name().to_string(),
                prompt_hash: prompt_hash.to_string(),
                cached_at: Utc::now(),
            },
            recipe: recipe.to_string(),
        };

        let content = serde_json::to_string_pretty(&cached)
            .map_err(|e| GenerationError::CacheError(e.to_string()))?;
        fs::write(self.cache_path(prompt_hash), content)
            .map_err(|e| GenerationError::CacheError(e.to_string()))?;

        Ok(())
    }

    /// Get cache statistics.
    pub fn cache_stats(&self) -> CacheStats {
        let mut stats = CacheStats::default();

        let dir = self.backend_cache_dir();
        if !dir.exists() {
            return stats;
        }

        if let Ok(entries) = fs::read_dir(&dir) {
            for entry in entries.filter_map(|e| e.ok()) {
                if entry
                    .path()
                    .extension()
                    .map(|e| e == "json")
                    .unwrap_or(false)
                {
                    stats.cached_recipes += 1;
                }
            }
        }

        stats
    }
}

#[async_trait]
impl RecipeGenerator for CachingGenerator {
    async fn generate(&self, request: &RecipeRequest) -> Result<String, GenerationError> {
        let prompt_hash = self.cache_key(&build_recipe_prompt(request));

        if let Some(cached) = self.get_cached(&prompt_hash) {
            return Ok(cached);
        }

        tracing::debug!(
            provider = self.inner.provider_name(),
            model = self.inner.model_name(),
            prompt_hash = %prompt_hash,
            "generation cache miss, calling backend"
        );

        let recipe = self.inner.generate(request).await?;

        // Caching is best-effort
        if let Err(e) = self.save_to_cache(&prompt_hash, &recipe) {
            tracing::warn!(error = %e, "Failed to cache generated recipe");
        }

        Ok(recipe)
    }

    fn provider_name(&self) -> &'static str {
        // The inner backend's name; this is just a wrapper
        self.inner.provider_name()
    }

    fn model_name(&self) -> &str {
        self.inner.model_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::FakeGenerator;
    use tempfile::TempDir;

    fn request(ingredients: &[&str]) -> RecipeRequest {
        RecipeRequest {
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            cooking_method: None,
            difficulty: None,
        }
    }

    #[tokio::test]
    async fn test_caching_generator() {
        let temp_dir = TempDir::new().unwrap();
        let fake = Box::new(FakeGenerator::with_response("tomato", "Tomato tart"));
        let generator = CachingGenerator::new(fake, temp_dir.path().to_path_buf());

        let result = generator.generate(&request(&["Tomato"])).await.unwrap();
        assert_eq!(result, "Tomato tart");

        // Second call is served from the cache
        let result = generator.generate(&request(&["Tomato"])).await.unwrap();
        assert_eq!(result, "Tomato tart");

        let stats = generator.cache_stats();
        assert_eq!(stats.cached_recipes, 1);
    }

    #[tokio::test]
    async fn test_different_requests_different_cache_entries() {
        let temp_dir = TempDir::new().unwrap();
        let mut fake = FakeGenerator::new();
        fake.add_response("tomato", "Tomato tart");
        fake.add_response("rice", "Fried rice");

        let generator = CachingGenerator::new(Box::new(fake), temp_dir.path().to_path_buf());

        generator.generate(&request(&["Tomato"])).await.unwrap();
        generator.generate(&request(&["Rice"])).await.unwrap();

        let stats = generator.cache_stats();
        assert_eq!(stats.cached_recipes, 2);
    }

    #[tokio::test]
    async fn test_method_changes_cache_key() {
        let temp_dir = TempDir::new().unwrap();
        let fake = FakeGenerator::new().with_default_response("a recipe");
        let generator = CachingGenerator::new(Box::new(fake), temp_dir.path().to_path_buf());

        let mut req = request(&["Chicken"]);
        generator.generate(&req).await.unwrap();
        req.cooking_method = Some("grilled".to_string());
        generator.generate(&req).await.unwrap();

        assert_eq!(generator.cache_stats().cached_recipes, 2);
    }
}
