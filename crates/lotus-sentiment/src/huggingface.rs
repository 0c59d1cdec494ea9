//! Hugging Face Inference API sentiment provider.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use lotus_core::error::{LotusError, LotusResult};
use lotus_core::traits::{SentimentClassifier, SentimentConfig, SentimentScore};
use lotus_core::types::MoodLabel;

const HF_API_URL: &str = "https://api-inference.huggingface.co/models";

/// Hugging Face text-classification provider.
pub struct HuggingFaceClassifier {
    client: Client,
    config: SentimentConfig,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct ClassifyRequest<'a> {
    inputs: &'a str,
}

#[derive(Debug, Deserialize)]
struct ClassLabel {
    label: String,
    score: f32,
}

/// The inference API returns either `[[{label, score}, ...]]` or a flat
/// `[{label, score}, ...]` depending on the model pipeline.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ClassifyResponse {
    Nested(Vec<Vec<ClassLabel>>),
    Flat(Vec<ClassLabel>),
}

#[derive(Debug, Deserialize)]
struct HfError {
    error: String,
}

impl HuggingFaceClassifier {
    /// Create a new Hugging Face sentiment classifier.
    pub fn new(config: SentimentConfig) -> LotusResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("HF_API_KEY").ok())
            .ok_or_else(|| {
                LotusError::Configuration(
                    "Hugging Face API key not found. Set HF_API_KEY environment variable or provide api_key in config.".to_string(),
                )
            })?;

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
            .unwrap_or_else(|| HF_API_URL.to_string());

        Ok(Self {
            client,
            config,
            base_url,
        })
    }

    fn best_label(response: ClassifyResponse) -> LotusResult<ClassLabel> {
        let labels = match response {
            ClassifyResponse::Nested(mut nested) => {
                if nested.is_empty() {
                    Vec::new()
                } else {
                    nested.swap_remove(0)
                }
            }
            ClassifyResponse::Flat(flat) => flat,
        };

        labels
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .ok_or_else(|| LotusError::sentiment("No classification labels returned"))
    }
}

#[async_trait]
impl SentimentClassifier for HuggingFaceClassifier {
    async fn classify(&self, text: &str) -> LotusResult<SentimentScore> {
        let request = ClassifyRequest { inputs: text };

        let response = self
            .client
            .post(format!("{}/{}", self.base_url, self.config.model))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                LotusError::sentiment(format!("Hugging Face API request failed: {}", e))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            LotusError::sentiment(format!("Failed to read response body: {}", e))
        })?;

        if !status.is_success() {
            let error: Result<HfError, _> = serde_json::from_str(&body);
            let message = error.map(|e| e.error).unwrap_or_else(|_| body.clone());
            return Err(LotusError::sentiment(format!(
                "Hugging Face API error ({}): {}",
                status, message
            )));
        }

        let response: ClassifyResponse = serde_json::from_str(&body)
            .map_err(|e| LotusError::sentiment(format!("Failed to parse response: {}", e)))?;

        let best = Self::best_label(response)?;
        debug!(label = %best.label, score = best.score, "Sentiment classified");

        Ok(SentimentScore {
            label: MoodLabel::parse(&best.label),
            score: best.score,
        })
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_response_takes_top_score() {
        let body = r#"[[
            {"label": "Negative", "score": 0.81},
            {"label": "Neutral", "score": 0.12},
            {"label": "Positive", "score": 0.07}
        ]]"#;
        let parsed: ClassifyResponse = serde_json::from_str(body).unwrap();
        let best = HuggingFaceClassifier::best_label(parsed).unwrap();
        assert_eq!(best.label, "Negative");
        assert!((best.score - 0.81).abs() < f32::EPSILON);
    }

    #[test]
    fn test_flat_response_shape() {
        let body = r#"[{"label": "positive", "score": 0.97}]"#;
        let parsed: ClassifyResponse = serde_json::from_str(body).unwrap();
        let best = HuggingFaceClassifier::best_label(parsed).unwrap();
        assert_eq!(best.label, "positive");
    }

    #[test]
    fn test_empty_response_is_error() {
        let parsed: ClassifyResponse = serde_json::from_str("[]").unwrap();
        assert!(HuggingFaceClassifier::best_label(parsed).is_err());
    }
}
