use crate::ai::AiResponder;
use crate::chat::ChatService;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

pub mod routes;

/// Shared state handed to every request handler. The chat service is
/// read-only after construction, so a plain `Arc` is enough.
#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<ChatService<AiResponder>>,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/chat", post(routes::chat))
        .route("/health", get(routes::health))
        .with_state(state)
}
