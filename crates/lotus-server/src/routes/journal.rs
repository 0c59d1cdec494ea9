//! Journal submission endpoint.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use lotus_core::fallback;
use lotus_core::prompts::companion_prompt;
use lotus_core::types::Message;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Request body for submitting a journal entry.
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    /// The journal entry text.
    pub entry: String,
}

/// Response for a submitted journal entry.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    /// Sentiment label from the classifier.
    pub sentiment: String,
    /// Classifier confidence as a whole percentage.
    pub score: u32,
    /// HTML reply body (companion response or fallback).
    pub response: String,
}

/// Submit a journal entry.
/// POST /submit
pub async fn submit_entry(
    State(state): State<AppState>,
    Json(request): Json<SubmitRequest>,
) -> ApiResult<Json<SubmitResponse>> {
    let entry = request.entry.trim();
    if entry.is_empty() {
        return Err(ApiError::validation("Journal entry cannot be empty"));
    }

    let sentiment = state
        .sentiment
        .classify(entry)
        .await
        .map_err(ApiError::from)?;

    let prompt = companion_prompt(entry, &sentiment);
    let messages = [Message::user(prompt)];

    // The fallback generator takes over on any completion failure; its
    // output uses the same paragraph markup as the hosted model's.
    let response = match state.completion.generate(&messages, None).await {
        Ok(completion) => {
            let content = completion.content_or_empty();
            if content.is_empty() {
                warn!("Completion returned empty content, using fallback generator");
                fallback::generate(entry, &sentiment.label)
            } else {
                content.to_string()
            }
        }
        Err(err) => {
            warn!(error = %err, "Completion call failed, using fallback generator");
            fallback::generate(entry, &sentiment.label)
        }
    };

    info!(
        sentiment = %sentiment.label,
        score = sentiment.score_percent(),
        "Journal entry processed"
    );

    Ok(Json(SubmitResponse {
        success: true,
        sentiment: sentiment.label.to_string(),
        score: sentiment.score_percent(),
        response,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Arc;

    use lotus_core::error::{LotusError, LotusResult};
    use lotus_core::traits::{
        CompletionProvider, CompletionResponse, GenerationOptions, SentimentClassifier,
        SentimentScore,
    };
    use lotus_core::types::MoodLabel;

    struct FixedSentiment {
        label: MoodLabel,
        score: f32,
    }

    #[async_trait]
    impl SentimentClassifier for FixedSentiment {
        async fn classify(&self, _text: &str) -> LotusResult<SentimentScore> {
            Ok(SentimentScore {
                label: self.label.clone(),
                score: self.score,
            })
        }

        fn model_name(&self) -> &str {
            "fixed-sentiment"
        }
    }

    struct HealthyCompletion;

    #[async_trait]
    impl CompletionProvider for HealthyCompletion {
        async fn generate(
            &self,
            _messages: &[Message],
            _options: Option<GenerationOptions>,
        ) -> LotusResult<CompletionResponse> {
            Ok(CompletionResponse {
                content: Some("<p>Model reply</p>".to_string()),
                usage: None,
            })
        }

        fn model_name(&self) -> &str {
            "healthy-completion"
        }
    }

    struct EmptyCompletion;

    #[async_trait]
    impl CompletionProvider for EmptyCompletion {
        async fn generate(
            &self,
            _messages: &[Message],
            _options: Option<GenerationOptions>,
        ) -> LotusResult<CompletionResponse> {
            Ok(CompletionResponse {
                content: None,
                usage: None,
            })
        }

        fn model_name(&self) -> &str {
            "empty-completion"
        }
    }

    struct FailingCompletion;

    #[async_trait]
    impl CompletionProvider for FailingCompletion {
        async fn generate(
            &self,
            _messages: &[Message],
            _options: Option<GenerationOptions>,
        ) -> LotusResult<CompletionResponse> {
            Err(LotusError::completion("service unavailable"))
        }

        fn model_name(&self) -> &str {
            "failing-completion"
        }
    }

    fn state_with(completion: Arc<dyn CompletionProvider>) -> AppState {
        AppState::new(
            completion,
            Arc::new(FixedSentiment {
                label: MoodLabel::Negative,
                score: 0.9,
            }),
        )
    }

    #[tokio::test]
    async fn test_submit_uses_model_reply_when_completion_succeeds() {
        let state = state_with(Arc::new(HealthyCompletion));
        let request = SubmitRequest {
            entry: "Rough day at work".to_string(),
        };

        let Json(response) = submit_entry(State(state), Json(request)).await.unwrap();
        assert!(response.success);
        assert_eq!(response.sentiment, "negative");
        assert_eq!(response.score, 90);
        assert_eq!(response.response, "<p>Model reply</p>");
    }

    #[tokio::test]
    async fn test_submit_falls_back_when_completion_fails() {
        let state = state_with(Arc::new(FailingCompletion));
        let request = SubmitRequest {
            entry: "I'm so stressed about my deadline at work and feel frustrated".to_string(),
        };

        let Json(response) = submit_entry(State(state), Json(request)).await.unwrap();
        assert!(response.success);
        // Fallback body embeds the matched work exercises
        assert!(response.response.contains("Three Good Things at Work"));
        assert!(response.response.contains("<strong>"));
        assert!(response.response.contains("negative emotions"));
    }

    #[tokio::test]
    async fn test_submit_falls_back_when_completion_content_is_empty() {
        let state = state_with(Arc::new(EmptyCompletion));
        let request = SubmitRequest {
            entry: "I went for a walk outside in the park and felt calm".to_string(),
        };

        let Json(response) = submit_entry(State(state), Json(request)).await.unwrap();
        assert!(response.success);
        assert!(response.response.contains("sensory nature immersion"));
        assert!(response.response.contains("<strong>"));
    }

    #[tokio::test]
    async fn test_submit_rejects_empty_entry() {
        let state = state_with(Arc::new(HealthyCompletion));
        let request = SubmitRequest {
            entry: "   ".to_string(),
        };

        let err = submit_entry(State(state), Json(request)).await.unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");
    }
}
