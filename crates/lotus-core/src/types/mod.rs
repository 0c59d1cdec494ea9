//! Shared type definitions.

mod message;
mod mood;

pub use message::{Message, MessageRole};
pub use mood::MoodLabel;
