//! lotus-sentiment - Hosted sentiment-classification providers for lotus.
//!
//! # Supported Providers
//!
//! - **Hugging Face** - text-classification via the Inference API
//!   (default model: `tabularisai/multilingual-sentiment-analysis`)
//!
//! # Example
//!
//! ```ignore
//! use lotus_sentiment::SentimentFactory;
//!
//! let classifier = SentimentFactory::huggingface()?;
//! let score = classifier.classify("What a wonderful day").await?;
//! ```

mod factory;
mod huggingface;

pub use factory::SentimentFactory;
pub use huggingface::HuggingFaceClassifier;

// Re-export core types for convenience
pub use lotus_core::config::SentimentProviderKind;
pub use lotus_core::traits::{SentimentClassifier, SentimentConfig, SentimentScore};
