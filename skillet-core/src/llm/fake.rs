//! Fake generator for testing.
//!
//! Returns deterministic responses based on prompt matching, so tests run
//! without network access or API costs.

use super::{build_recipe_prompt, GenerationError, RecipeGenerator, RecipeRequest};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

/// A fake generator for testing.
///
/// Responses are matched by checking if the rendered prompt contains a
/// registered substring. If no match is found, returns the default response
/// or an error.
#[derive(Debug)]
pub struct FakeGenerator {
    /// Map of prompt substring -> response
    responses: RwLock<HashMap<String, String>>,
    /// Default response if no match found
    default_response: Option<String>,
}

impl Default for FakeGenerator {
    fn default() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: Some("# Test Recipe\n\nCombine and cook.".to_string()),
        }
    }
}

impl FakeGenerator {
    /// Create a new FakeGenerator with no registered responses.
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: None,
        }
    }

    /// Create a FakeGenerator that returns a specific response for prompts
    /// containing a substring.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let mut generator = Self::new();
        generator.add_response(prompt_contains, response);
        generator
    }

    /// Add a response for prompts containing a specific substring.
    pub fn add_response(&mut self, prompt_contains: &str, response: &str) {
        self.responses
            .write()
            .unwrap()
            .insert(prompt_contains.to_string(), response.to_string());
    }

    /// Set the default response when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }
}

#[async_trait]
impl RecipeGenerator for FakeGenerator {
    async fn generate(&self, request: &RecipeRequest) -> Result<String, GenerationError> {
        let prompt = build_recipe_prompt(request);
        let responses = self.responses.read().unwrap();

        // Find first matching pattern (case-insensitive)
        let prompt_lower = prompt.to_lowercase();
        for (pattern, response) in responses.iter() {
            if prompt_lower.contains(&pattern.to_lowercase()) {
                return Ok(response.clone());
            }
        }

        match &self.default_response {
            Some(response) => Ok(response.clone()),
            None => Err(GenerationError::RequestFailed(format!(
                "FakeGenerator: No response configured for ingredients: {}",
                request.ingredients.join(", ")
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(ingredients: &[&str]) -> RecipeRequest {
        RecipeRequest {
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            cooking_method: None,
            difficulty: None,
        }
    }

    #[tokio::test]
    async fn test_fake_generator_matching() {
        let generator = FakeGenerator::with_response("tomato", "Tomato soup");
        let result = generator.generate(&request(&["Tomato"])).await.unwrap();
        assert_eq!(result, "Tomato soup");
    }

    #[tokio::test]
    async fn test_fake_generator_no_match() {
        let generator = FakeGenerator::new();
        let result = generator.generate(&request(&["Rice"])).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fake_generator_default_response() {
        let generator = FakeGenerator::new().with_default_response("fallback");
        let result = generator.generate(&request(&["Rice"])).await.unwrap();
        assert_eq!(result, "fallback");
    }
}
