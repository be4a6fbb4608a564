//! Mistral chat-completions generator.

use super::{build_recipe_prompt, GenerationError, RecipeGenerator, RecipeRequest};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const API_URL: &str = "https://api.mistral.ai/v1/chat/completions";
const TEMPERATURE: f32 = 0.7;

/// Mistral API generator.
#[derive(Debug)]
pub struct MistralGenerator {
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl MistralGenerator {
    /// Create a new MistralGenerator with the given API key and model.
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            client: reqwest::Client::new(),
        }
    }
}

/// Mistral API request format.
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    temperature: f32,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Mistral API response format.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Error response from the Mistral API.
#[derive(Debug, Deserialize)]
struct MistralErrorResponse {
    message: String,
}

#[async_trait]
impl RecipeGenerator for MistralGenerator {
    async fn generate(&self, request: &RecipeRequest) -> Result<String, GenerationError> {
        let body = ChatRequest {
            model: self.model.clone(),
            temperature: TEMPERATURE,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: build_recipe_prompt(request),
            }],
        };

        let response = self
            .client
            .post(API_URL)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::RequestFailed(e.to_string()))?;

        let status = response.status().as_u16();

        if status == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(GenerationError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::RequestFailed(e.to_string()))?;

        if status != 200 {
            if let Ok(error_response) = serde_json::from_str::<MistralErrorResponse>(&body) {
                return Err(GenerationError::ApiError {
                    status,
                    message: error_response.message,
                });
            }
            return Err(GenerationError::ApiError {
                status,
                message: body,
            });
        }

        let response: ChatResponse =
            serde_json::from_str(&body).map_err(|e| GenerationError::ParseError(e.to_string()))?;

        let text = response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| GenerationError::ParseError("No choices in response".to_string()))?;

        Ok(text)
    }

    fn provider_name(&self) -> &'static str {
        "mistral"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
