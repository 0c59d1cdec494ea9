//! Trait definitions for injected collaborators.
//!
//! The hosted sentiment model and the hosted chat-completion API sit behind
//! these narrow seams so the core stays testable without network access.

mod llm;
mod sentiment;

pub use llm::{
    CompletionConfig, CompletionProvider, CompletionResponse, GenerationOptions, TokenUsage,
};
pub use sentiment::{SentimentClassifier, SentimentConfig, SentimentScore};
