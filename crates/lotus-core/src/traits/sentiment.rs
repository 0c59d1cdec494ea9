//! Sentiment classification trait and related types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::LotusResult;
use crate::types::MoodLabel;

/// Result of classifying one piece of text.
#[derive(Debug, Clone)]
pub struct SentimentScore {
    /// Normalized mood label.
    pub label: MoodLabel,
    /// Model confidence in the range 0.0 - 1.0.
    pub score: f32,
}

impl SentimentScore {
    /// Confidence rounded to a whole percentage, as shown to users.
    pub fn score_percent(&self) -> u32 {
        (self.score * 100.0).round() as u32
    }
}

/// Core sentiment trait - hosted classification providers implement this.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    /// Classify the sentiment of the given text.
    async fn classify(&self, text: &str) -> LotusResult<SentimentScore>;

    /// Get the model name.
    fn model_name(&self) -> &str;
}

/// Sentiment provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentConfig {
    /// Model name/identifier.
    #[serde(default = "default_model")]
    pub model: String,
    /// API key (if not using environment variable).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Base URL for API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

fn default_model() -> String {
    "tabularisai/multilingual-sentiment-analysis".to_string()
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key: None,
            base_url: None,
        }
    }
}
