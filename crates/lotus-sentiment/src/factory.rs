//! Factory for creating sentiment classifiers.

use std::sync::Arc;

use lotus_core::config::SentimentProviderKind;
use lotus_core::error::LotusResult;
use lotus_core::traits::{SentimentClassifier, SentimentConfig};

use crate::huggingface::HuggingFaceClassifier;

/// Factory for creating sentiment classifiers.
pub struct SentimentFactory;

impl SentimentFactory {
    /// Create a sentiment classifier from the given configuration.
    pub fn create(
        provider: SentimentProviderKind,
        config: SentimentConfig,
    ) -> LotusResult<Arc<dyn SentimentClassifier>> {
        match provider {
            SentimentProviderKind::HuggingFace => {
                let classifier = HuggingFaceClassifier::new(config)?;
                Ok(Arc::new(classifier))
            }
        }
    }

    /// Create a Hugging Face classifier with default configuration.
    pub fn huggingface() -> LotusResult<Arc<dyn SentimentClassifier>> {
        Self::create(SentimentProviderKind::HuggingFace, SentimentConfig::default())
    }

    /// Create a Hugging Face classifier with a specific model.
    pub fn huggingface_with_model(
        model: impl Into<String>,
    ) -> LotusResult<Arc<dyn SentimentClassifier>> {
        let config = SentimentConfig {
            model: model.into(),
            ..Default::default()
        };
        Self::create(SentimentProviderKind::HuggingFace, config)
    }
}
