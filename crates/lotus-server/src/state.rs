//! Server state management.

use std::sync::Arc;

use lotus_core::traits::{CompletionProvider, SentimentClassifier};

/// Shared application state.
///
/// Both providers are immutable once constructed, so the state is a pair of
/// `Arc`s cloned per request - no locking required.
#[derive(Clone)]
pub struct AppState {
    pub completion: Arc<dyn CompletionProvider>,
    pub sentiment: Arc<dyn SentimentClassifier>,
}

impl AppState {
    /// Create application state from injected providers.
    pub fn new(
        completion: Arc<dyn CompletionProvider>,
        sentiment: Arc<dyn SentimentClassifier>,
    ) -> Self {
        Self {
            completion,
            sentiment,
        }
    }
}
