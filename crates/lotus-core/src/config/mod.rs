//! Configuration system for lotus.

use serde::{Deserialize, Serialize};

use crate::traits::{CompletionConfig, SentimentConfig};

/// Completion provider type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CompletionProviderKind {
    #[default]
    Groq,
    OpenAI,
}

/// Sentiment provider type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SentimentProviderKind {
    #[default]
    HuggingFace,
}

/// Completion provider configuration with type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionProviderConfig {
    /// Provider type.
    pub provider: CompletionProviderKind,
    /// Provider-specific configuration.
    #[serde(flatten)]
    pub config: CompletionConfig,
}

impl Default for CompletionProviderConfig {
    fn default() -> Self {
        Self {
            provider: CompletionProviderKind::Groq,
            config: CompletionConfig {
                model: "mixtral-8x7b-32768".to_string(),
                ..Default::default()
            },
        }
    }
}

/// Sentiment provider configuration with type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentProviderConfig {
    /// Provider type.
    pub provider: SentimentProviderKind,
    /// Provider-specific configuration.
    #[serde(flatten)]
    pub config: SentimentConfig,
}

impl Default for SentimentProviderConfig {
    fn default() -> Self {
        Self {
            provider: SentimentProviderKind::HuggingFace,
            config: SentimentConfig::default(),
        }
    }
}

/// Main lotus configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LotusConfig {
    /// Completion provider configuration.
    pub completion: CompletionProviderConfig,
    /// Sentiment provider configuration.
    pub sentiment: SentimentProviderConfig,
}

impl LotusConfig {
    /// Load configuration from a file (TOML or JSON).
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::error::LotusResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let ext = path.as_ref().extension().and_then(|e| e.to_str());

        match ext {
            Some("toml") => toml::from_str(&content)
                .map_err(|e| crate::error::LotusError::Configuration(e.to_string())),
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| crate::error::LotusError::Configuration(e.to_string())),
            _ => Err(crate::error::LotusError::Configuration(
                "Unsupported config file format. Use .toml or .json".to_string(),
            )),
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(model) = std::env::var("LOTUS_COMPLETION_MODEL") {
            config.completion.config.model = model;
        }
        if let Ok(provider) = std::env::var("LOTUS_COMPLETION_PROVIDER") {
            config.completion.provider = match provider.to_lowercase().as_str() {
                "openai" => CompletionProviderKind::OpenAI,
                _ => CompletionProviderKind::Groq,
            };
        }
        if let Ok(api_key) = std::env::var("GROQ_API_KEY") {
            if config.completion.provider == CompletionProviderKind::Groq {
                config.completion.config.api_key = Some(api_key);
            }
        }
        if let Ok(api_key) = std::env::var("OPENAI_API_KEY") {
            if config.completion.provider == CompletionProviderKind::OpenAI {
                config.completion.config.api_key = Some(api_key);
            }
        }
        if let Ok(model) = std::env::var("LOTUS_SENTIMENT_MODEL") {
            config.sentiment.config.model = model;
        }
        if let Ok(api_key) = std::env::var("HF_API_KEY") {
            config.sentiment.config.api_key = Some(api_key);
        }

        config
    }
}
