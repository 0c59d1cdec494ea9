//! Route definitions for the REST API.

mod health;
mod journal;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Journal submission
        .route("/submit", post(journal::submit_entry))
        // Attach state
        .with_state(state)
}

pub use health::*;
pub use journal::*;
