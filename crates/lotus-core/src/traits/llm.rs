//! Chat-completion trait and related types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::LotusResult;
use crate::types::Message;

/// Response from a chat-completion call.
#[derive(Debug, Clone, Default)]
pub struct CompletionResponse {
    /// Generated text content.
    pub content: Option<String>,
    /// Token usage statistics.
    pub usage: Option<TokenUsage>,
}

impl CompletionResponse {
    /// Get the content or an empty string.
    pub fn content_or_empty(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }
}

/// Token usage statistics.
#[derive(Debug, Clone, Default)]
pub struct TokenUsage {
    /// Tokens in the prompt.
    pub prompt_tokens: u32,
    /// Tokens in the completion.
    pub completion_tokens: u32,
    /// Total tokens.
    pub total_tokens: u32,
}

/// Configuration options for a single generation call.
#[derive(Debug, Clone, Default)]
pub struct GenerationOptions {
    /// Sampling temperature (0.0 - 2.0).
    pub temperature: Option<f32>,
    /// Maximum tokens to generate.
    pub max_tokens: Option<u32>,
}

/// Core completion trait - all hosted chat providers implement this.
///
/// The journaling endpoint depends only on this seam; when `generate` fails
/// the caller switches to the offline fallback generator.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generate a response for the given conversation.
    async fn generate(
        &self,
        messages: &[Message],
        options: Option<GenerationOptions>,
    ) -> LotusResult<CompletionResponse>;

    /// Get the model name.
    fn model_name(&self) -> &str;
}

/// Completion provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Model name/identifier.
    pub model: String,
    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum tokens to generate.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// API key (if not using environment variable).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Base URL for API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

// The original deployment ran mixtral on Groq at full temperature; these
// defaults keep that behaviour when config omits them.
fn default_temperature() -> f32 {
    1.0
}

fn default_max_tokens() -> u32 {
    2000
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            model: String::new(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            api_key: None,
            base_url: None,
        }
    }
}
