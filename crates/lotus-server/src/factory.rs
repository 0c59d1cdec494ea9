//! Provider construction from configuration.

use lotus_core::config::LotusConfig;
use lotus_core::error::LotusResult;
use lotus_llm::CompletionFactory;
use lotus_sentiment::SentimentFactory;

use crate::state::AppState;

/// Build the application state from a lotus configuration.
pub fn create_state(config: &LotusConfig) -> LotusResult<AppState> {
    let completion = CompletionFactory::create(
        config.completion.provider,
        config.completion.config.clone(),
    )?;
    let sentiment =
        SentimentFactory::create(config.sentiment.provider, config.sentiment.config.clone())?;

    Ok(AppState::new(completion, sentiment))
}
