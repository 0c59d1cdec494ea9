//! Groq completion provider implementation.

use async_trait::async_trait;

use lotus_core::error::{LotusError, LotusResult};
use lotus_core::traits::{
    CompletionConfig, CompletionProvider, CompletionResponse, GenerationOptions,
};
use lotus_core::types::Message;

use crate::chat::ChatEndpoint;

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1";
const GROQ_DEFAULT_MODEL: &str = "mixtral-8x7b-32768";

/// Groq completion provider.
pub struct GroqProvider {
    endpoint: ChatEndpoint,
}

impl GroqProvider {
    /// Create a new Groq completion provider.
    pub fn new(config: CompletionConfig) -> LotusResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("GROQ_API_KEY").ok())
            .ok_or_else(|| {
                LotusError::Configuration(
                    "Groq API key not found. Set GROQ_API_KEY environment variable or provide api_key in config.".to_string(),
                )
            })?;

        let endpoint =
            ChatEndpoint::new(config, api_key, GROQ_API_URL, GROQ_DEFAULT_MODEL, "Groq")?;
        Ok(Self { endpoint })
    }
}

#[async_trait]
impl CompletionProvider for GroqProvider {
    async fn generate(
        &self,
        messages: &[Message],
        options: Option<GenerationOptions>,
    ) -> LotusResult<CompletionResponse> {
        self.endpoint.generate(messages, options).await
    }

    fn model_name(&self) -> &str {
        self.endpoint.model_name()
    }
}
