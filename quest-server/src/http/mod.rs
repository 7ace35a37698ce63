//! HTTP server module

mod api;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::AppState;

pub use api::{
    ALL_QUESTIONS_COMPLETED, AnswerRequest, AnswerResponse, HealthResponse, ProgressResponse,
    QuestionResponse, StartSessionResponse, SuggestActionResponse,
};

/// Create the HTTP router with all routes configured
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(api::health))
        .route("/api/startSession", post(api::start_session))
        .route("/api/questions", get(api::next_question))
        .route("/api/answers", post(api::submit_answer))
        .route("/api/progress", get(api::progress))
        .route("/api/review", get(api::review))
        .route("/api/suggestAction", post(api::suggest_action))
        .with_state(state)
}
