//! OpenAI completion provider implementation.

use async_trait::async_trait;

use lotus_core::error::{LotusError, LotusResult};
use lotus_core::traits::{
    CompletionConfig, CompletionProvider, CompletionResponse, GenerationOptions,
};
use lotus_core::types::Message;

use crate::chat::ChatEndpoint;

const OPENAI_API_URL: &str = "https://api.openai.com/v1";
const OPENAI_DEFAULT_MODEL: &str = "gpt-4o-mini";

/// OpenAI completion provider.
pub struct OpenAIProvider {
    endpoint: ChatEndpoint,
}

impl OpenAIProvider {
    /// Create a new OpenAI completion provider.
    pub fn new(config: CompletionConfig) -> LotusResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .ok_or_else(|| {
                LotusError::Configuration(
                    "OpenAI API key not found. Set OPENAI_API_KEY environment variable or provide api_key in config.".to_string(),
                )
            })?;

        let endpoint = ChatEndpoint::new(
            config,
            api_key,
            OPENAI_API_URL,
            OPENAI_DEFAULT_MODEL,
            "OpenAI",
        )?;
        Ok(Self { endpoint })
    }
}

#[async_trait]
impl CompletionProvider for OpenAIProvider {
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
