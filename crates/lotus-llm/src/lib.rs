//! lotus-llm - Chat-completion provider implementations for lotus.
//!
//! # Supported Providers
//!
//! - **Groq** - OpenAI-compatible API, the original deployment target
//! - **OpenAI** - GPT-4o family and compatible endpoints
//!
//! # Example
//!
//! ```ignore
//! use lotus_llm::CompletionFactory;
//!
//! // Create a Groq provider
//! let llm = CompletionFactory::groq()?;
//!
//! // Or with a specific model
//! let llm = CompletionFactory::groq_with_model("llama-3.3-70b-versatile")?;
//! ```

mod chat;
mod factory;
mod groq;
mod openai;

pub use factory::CompletionFactory;
pub use groq::GroqProvider;
pub use openai::OpenAIProvider;

// Re-export core types for convenience
pub use lotus_core::config::CompletionProviderKind;
pub use lotus_core::traits::{
    CompletionConfig, CompletionProvider, CompletionResponse, GenerationOptions,
};
