//! Shared OpenAI-compatible chat-completions client.
//!
//! Groq serves the same wire format as OpenAI, so both providers share this
//! request/response plumbing and differ only in base URL, default model, and
//! the environment variable consulted for the API key.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use lotus_core::error::{LotusError, LotusResult};
use lotus_core::traits::{CompletionConfig, CompletionResponse, GenerationOptions, TokenUsage};
use lotus_core::types::{Message, MessageRole};

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatError {
    error: ChatErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ChatErrorDetail {
    message: String,
}

/// A configured OpenAI-compatible chat endpoint.
pub(crate) struct ChatEndpoint {
    client: Client,
    config: CompletionConfig,
    base_url: String,
    provider_name: &'static str,
}

impl ChatEndpoint {
    pub(crate) fn new(
        config: CompletionConfig,
        api_key: String,
        default_base_url: &str,
        default_model: &str,
        provider_name: &'static str,
    ) -> LotusResult<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::AUTHORIZATION,
            format!("Bearer {}", api_key)
                .parse()
                .map_err(|_| LotusError::Configuration("Invalid API key format".to_string()))?,
        );
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            "application/json"
                .parse()
                .map_err(|_| LotusError::Configuration("Invalid content type".to_string()))?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| {
                LotusError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| default_base_url.to_string());

        let mut config = config;
        if config.model.is_empty() {
            config.model = default_model.to_string();
        }

        Ok(Self {
            client,
            config,
            base_url,
            provider_name,
        })
    }

    pub(crate) fn model_name(&self) -> &str {
        &self.config.model
    }

    pub(crate) async fn generate(
        &self,
        messages: &[Message],
        options: Option<GenerationOptions>,
    ) -> LotusResult<CompletionResponse> {
        let options = options.unwrap_or_default();

        let chat_messages: Vec<ChatMessage> = messages
            .iter()
            .map(|m| ChatMessage {
                role: match m.role {
                    MessageRole::System => "system".to_string(),
                    MessageRole::User => "user".to_string(),
                    MessageRole::Assistant => "assistant".to_string(),
                },
                content: m.content.clone(),
            })
            .collect();

        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: chat_messages,
            temperature: Some(options.temperature.unwrap_or(self.config.temperature)),
            max_tokens: Some(options.max_tokens.unwrap_or(self.config.max_tokens)),
        };

        debug!(
            provider = self.provider_name,
            model = %request.model,
            messages = request.messages.len(),
            "Sending chat-completion request"
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                LotusError::completion(format!("{} API request failed: {}", self.provider_name, e))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            LotusError::completion(format!("Failed to read response body: {}", e))
        })?;

        if !status.is_success() {
            let error: Result<ChatError, _> = serde_json::from_str(&body);
            let message = error
                .map(|e| e.error.message)
                .unwrap_or_else(|_| body.clone());
            return Err(LotusError::completion(format!(
                "{} API error ({}): {}",
                self.provider_name, status, message
            )));
        }

        let response: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| LotusError::completion(format!("Failed to parse response: {}", e)))?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LotusError::completion("No response choices returned"))?;

        let usage = response.usage.map(|u| TokenUsage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });

        Ok(CompletionResponse {
            content: choice.message.content,
            usage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_response_parsing() {
        let body = r#"{
            "choices": [{"message": {"role": "assistant", "content": "<p>Hello</p>"}}],
            "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
        }"#;
        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some("<p>Hello</p>")
        );
        assert_eq!(parsed.usage.unwrap().total_tokens, 15);
    }

    #[test]
    fn test_chat_error_parsing() {
        let body = r#"{"error": {"message": "model not found", "type": "invalid_request_error"}}"#;
        let parsed: ChatError = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.error.message, "model not found");
    }

    #[test]
    fn test_request_serialization_skips_none() {
        let request = ChatRequest {
            model: "mixtral-8x7b-32768".to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: "hi".to_string(),
            }],
            temperature: None,
            max_tokens: Some(2000),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("temperature").is_none());
        assert_eq!(json["max_tokens"], 2000);
    }
}
