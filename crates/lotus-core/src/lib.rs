//! lotus-core - Core library for lotus.
//!
//! This crate provides the shared types, provider traits, configuration, and
//! the offline fallback recommendation generator for the lotus journaling
//! service.
//!
//! # Example
//!
//! ```
//! use lotus_core::fallback;
//! use lotus_core::types::MoodLabel;
//!
//! let reply = fallback::generate(
//!     "I'm so stressed about my deadline at work",
//!     &MoodLabel::Negative,
//! );
//! assert!(reply.contains("<strong>"));
//! ```

pub mod config;
pub mod error;
pub mod fallback;
pub mod prompts;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use config::LotusConfig;
pub use error::{ErrorCode, LotusError, LotusResult};
pub use traits::{
    CompletionConfig, CompletionProvider, CompletionResponse, GenerationOptions,
    SentimentClassifier, SentimentConfig, SentimentScore,
};
pub use types::{Message, MessageRole, MoodLabel};
