//! services/api/src/adapters/gemini.rs
//!
//! This module contains the adapter for the Gemini text-generation API.
//! It implements the `TextGenerationService` port from the `core` crate.

use async_trait::async_trait;
use listing_insights_core::ports::{PortError, PortResult, TextGenerationService};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Gemini API base URL.
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini adapter configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
}

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `TextGenerationService` against the Gemini
/// `generateContent` REST endpoint.
pub struct GeminiTextClient {
    config: GeminiConfig,
    client: Client,
}

impl GeminiTextClient {
    /// Creates a new `GeminiTextClient`.
    pub fn new(config: GeminiConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Build the API URL for the given model and method.
    fn api_url(&self, method: &str) -> String {
        format!(
            "{}/models/{}:{}?key={}",
            GEMINI_API_BASE, self.config.model, method, self.config.api_key
        )
    }
}

//=========================================================================================
// `TextGenerationService` Trait Implementation
//=========================================================================================

#[async_trait]
impl TextGenerationService for GeminiTextClient {
    async fn generate_text(&self, prompt: &str) -> PortResult<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let url = self.api_url("generateContent");

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| PortError::Unexpected(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(PortError::Unexpected(format!(
                "Gemini API error {}: {}",
                status, error_text
            )));
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| PortError::Unexpected(format!("Failed to parse response: {}", e)))?;

        // Extract the text of the first candidate's first part.
        if let Some(candidate) = api_response.candidates.into_iter().next() {
            if let Some(part) = candidate.content.parts.into_iter().next() {
                Ok(part.text)
            } else {
                Err(PortError::Unexpected(
                    "Gemini response contained no text content.".to_string(),
                ))
            }
        } else {
            Err(PortError::Unexpected(
                "Gemini returned no candidates in its response.".to_string(),
            ))
        }
    }
}

//=========================================================================================
// Gemini API Request/Response Types
//=========================================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Content,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_interpolates_model_method_and_key() {
        let client = GeminiTextClient::new(GeminiConfig {
            api_key: "test-key".to_string(),
            model: "gemini-1.5-flash".to_string(),
        });
        assert_eq!(
            client.api_url("generateContent"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent?key=test-key"
        );
    }

    #[test]
    fn response_text_extraction_shape() {
        let raw = r#"{
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "hello"}]}}
            ]
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.candidates[0].content.parts[0].text, "hello");
    }
}
