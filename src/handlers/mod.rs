pub mod chat;
pub mod feedback;
pub mod orders;

#[cfg(test)]
mod test_handlers;

use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;

use crate::config::Config;
use crate::repository_traits::{FeedbackRepository, OrderRepository};
use crate::transport::Transport;

/// Shared state for the HTTP handlers. Every external collaborator is an
/// injected handle so tests can substitute doubles; nothing here is a
/// process-wide singleton.
#[derive(Clone)]
pub struct AppState {
    pub transport: Arc<dyn Transport>,
    pub feedback: Arc<dyn FeedbackRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub config: Arc<Config>,
}

/// Build the API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/chat", post(chat::chat_post).get(chat::chat_get))
        .route("/api/feedback", post(feedback::feedback_post))
        .route("/api/orders", get(orders::orders_get))
        .route("/health", get(|| async { "ok" }))
        .with_state(state)
}
