//! Factory for creating completion providers.

use std::sync::Arc;

use lotus_core::config::CompletionProviderKind;
use lotus_core::error::LotusResult;
use lotus_core::traits::{CompletionConfig, CompletionProvider};

use crate::groq::GroqProvider;
use crate::openai::OpenAIProvider;

/// Factory for creating completion providers.
pub struct CompletionFactory;

impl CompletionFactory {
    /// Create a completion provider from the given configuration.
    pub fn create(
        provider: CompletionProviderKind,
        config: CompletionConfig,
    ) -> LotusResult<Arc<dyn CompletionProvider>> {
        match provider {
            CompletionProviderKind::Groq => {
                let llm = GroqProvider::new(config)?;
                Ok(Arc::new(llm))
            }
            CompletionProviderKind::OpenAI => {
                let llm = OpenAIProvider::new(config)?;
                Ok(Arc::new(llm))
            }
        }
    }

    /// Create a Groq provider with default configuration.
    pub fn groq() -> LotusResult<Arc<dyn CompletionProvider>> {
        Self::create(CompletionProviderKind::Groq, CompletionConfig::default())
    }

    /// Create a Groq provider with a specific model.
    pub fn groq_with_model(model: impl Into<String>) -> LotusResult<Arc<dyn CompletionProvider>> {
        let config = CompletionConfig {
            model: model.into(),
            ..Default::default()
        };
        Self::create(CompletionProviderKind::Groq, config)
    }

    /// Create an OpenAI provider with default configuration.
    pub fn openai() -> LotusResult<Arc<dyn CompletionProvider>> {
        Self::create(CompletionProviderKind::OpenAI, CompletionConfig::default())
    }

    /// Create an OpenAI provider with a specific model.
    pub fn openai_with_model(
        model: impl Into<String>,
    ) -> LotusResult<Arc<dyn CompletionProvider>> {
        let config = CompletionConfig {
            model: model.into(),
            ..Default::default()
        };
        Self::create(CompletionProviderKind::OpenAI, config)
    }
}
