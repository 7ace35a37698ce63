//! REST API handlers

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::ServerError;
use crate::AppState;

/// Sentinel question text returned once a session has answered everything
pub const ALL_QUESTIONS_COMPLETED: &str = "All questions completed";

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the server
    pub status: String,
    /// Server version
    pub version: String,
    /// Seconds since server started
    pub uptime_seconds: i64,
    /// Number of active sessions
    pub active_sessions: usize,
}

/// Health check endpoint
///
/// Returns server status, version, uptime, and active session count.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let active_sessions = state.tracker.session_count().await;

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        active_sessions,
    })
}

/// Response for starting a session
#[derive(Debug, Serialize, Deserialize)]
pub struct StartSessionResponse {
    /// The new session's identifier
    pub session_id: String,
    /// Fixed success status
    pub status: String,
    /// When the session started (RFC 3339)
    pub started_at: String,
}

/// POST /api/startSession - Start a new questionnaire session
pub async fn start_session(State(state): State<Arc<AppState>>) -> Json<StartSessionResponse> {
    let started = state.tracker.start().await;
    tracing::info!(session_id = %started.session_id, "session started");

    Json(StartSessionResponse {
        session_id: started.session_id,
        status: "Session started".to_string(),
        started_at: started.started_at.to_rfc3339(),
    })
}

/// Query parameters identifying a session
#[derive(Debug, Deserialize)]
pub struct SessionQuery {
    /// Session ID
    pub session_id: String,
}

/// A question (or the review summary) with its options
#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionResponse {
    /// Prompt text, or the terminal/summary text
    pub question: String,
    /// Option labels; empty for terminal and review payloads
    pub options: Vec<String>,
}

/// GET /api/questions - The session's next unanswered question
///
/// Once the sequence is exhausted this returns the fixed sentinel payload
/// with empty options rather than an error; unknown sessions are a 404.
pub async fn next_question(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SessionQuery>,
) -> Result<Json<QuestionResponse>, ServerError> {
    let response = match state.tracker.next_question(&query.session_id).await? {
        Some(question) => QuestionResponse {
            question: question.prompt,
            options: question.options,
        },
        None => QuestionResponse {
            question: ALL_QUESTIONS_COMPLETED.to_string(),
            options: Vec::new(),
        },
    };

    Ok(Json(response))
}

/// Request body for submitting an answer
#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerRequest {
    /// Session ID
    pub session_id: String,
    /// Answer text, stored verbatim
    pub answer: String,
}

/// Response for submitting an answer
#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerResponse {
    /// "next_question" while questions remain, "completed" once exhausted
    pub status: String,
}

/// POST /api/answers - Submit an answer for the session's current question
pub async fn submit_answer(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnswerRequest>,
) -> Result<Json<AnswerResponse>, ServerError> {
    let outcome = state
        .tracker
        .submit_answer(&request.session_id, request.answer)
        .await?;

    Ok(Json(AnswerResponse {
        status: outcome.as_str().to_string(),
    }))
}

/// Response for the progress view
#[derive(Debug, Serialize, Deserialize)]
pub struct ProgressResponse {
    /// Prompts of answered questions, in bank order
    pub completed_steps: Vec<String>,
    /// Prompts of unanswered questions, in bank order
    pub pending_steps: Vec<String>,
}

/// GET /api/progress - The question bank split at the session's cursor
pub async fn progress(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SessionQuery>,
) -> Result<Json<ProgressResponse>, ServerError> {
    let progress = state.tracker.progress(&query.session_id).await?;

    Ok(Json(ProgressResponse {
        completed_steps: progress.completed_steps,
        pending_steps: progress.pending_steps,
    }))
}

/// GET /api/review - Summary of the session's submitted answers
///
/// The summary text rides in `question`; `options` is always empty here.
pub async fn review(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SessionQuery>,
) -> Result<Json<QuestionResponse>, ServerError> {
    let review = state.tracker.review(&query.session_id).await?;

    Ok(Json(QuestionResponse {
        question: review.summary,
        options: Vec::new(),
    }))
}

/// Response for a suggested action
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestActionResponse {
    /// Action label the client should act on
    pub suggested_action: String,
    /// Evaluation status
    pub status: String,
    /// Human-readable justification
    pub reason: String,
}

/// POST /api/suggestAction - Evaluate the suggestion strategy for a session
pub async fn suggest_action(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SessionQuery>,
) -> Result<Json<SuggestActionResponse>, ServerError> {
    let suggestion = state.tracker.suggest_action(&query.session_id).await?;

    Ok(Json(SuggestActionResponse {
        suggested_action: suggestion.suggested_action,
        status: suggestion.status,
        reason: suggestion.reason,
    }))
}
