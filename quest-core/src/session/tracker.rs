//! SessionTracker: the owned session store
//!
//! SessionTracker owns the mapping from session ID to session state, the
//! shared question bank, and the suggestion strategy. Handlers hold it via
//! `Arc` instead of reaching for ambient globals, which keeps lifecycle and
//! test isolation explicit.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::bank::{Question, QuestionBank};
use crate::error::SessionError;
use crate::suggest::{Suggestion, SuggestionStrategy};

use super::state::{Session, SubmitOutcome};

/// Result of starting a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartedSession {
    /// The new session's identifier
    pub session_id: String,
    /// When the session was started
    pub started_at: DateTime<Utc>,
}

/// The question bank split at a session's cursor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    /// Prompts of answered questions, in bank order
    pub completed_steps: Vec<String>,
    /// Prompts of unanswered questions, in bank order
    pub pending_steps: Vec<String>,
}

/// Review of a session's submitted answers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Submitted answers, verbatim, in submission order
    pub answers: Vec<String>,
    /// One-line summary embedding the answers
    pub summary: String,
}

/// Tracks all questionnaire sessions
///
/// SessionTracker provides:
/// - Session creation with unique IDs
/// - The linear walk through the question bank (next/submit)
/// - Progress, review, and action-suggestion views
///
/// Operations on the same session are serialized by the store lock:
/// `submit_answer` appends the answer and advances the cursor under a single
/// write guard, so readers never observe one without the other.
pub struct SessionTracker {
    /// Sessions indexed by ID
    sessions: RwLock<HashMap<String, Session>>,
    /// The shared read-only question bank
    bank: Arc<QuestionBank>,
    /// Strategy for suggest_action
    strategy: Arc<dyn SuggestionStrategy>,
}

impl SessionTracker {
    /// Create a tracker over a question bank with a suggestion strategy
    pub fn new(bank: Arc<QuestionBank>, strategy: Arc<dyn SuggestionStrategy>) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            bank,
            strategy,
        }
    }

    /// The question bank this tracker serves
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Start a new session
    ///
    /// Always succeeds; the ID is a fresh uuid-v4.
    pub async fn start(&self) -> StartedSession {
        let id = Uuid::new_v4().to_string();
        let session = Session::new(id.clone());
        let started_at = session.started_at();

        self.sessions.write().await.insert(id.clone(), session);
        tracing::debug!(session_id = %id, "session started");

        StartedSession {
            session_id: id,
            started_at,
        }
    }

    /// The next unanswered question, or `None` once the sequence is exhausted
    pub async fn next_question(&self, id: &str) -> Result<Option<Question>, SessionError> {
        let sessions = self.sessions.read().await;
        let session = sessions
            .get(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;
        Ok(self.bank.get(session.cursor()).cloned())
    }

    /// Record an answer for the session's current question
    ///
    /// Appends the answer and advances the cursor atomically. Fails with
    /// `NoPendingSteps` once every question has been answered.
    pub async fn submit_answer(
        &self,
        id: &str,
        answer: impl Into<String>,
    ) -> Result<SubmitOutcome, SessionError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;

        if session.is_exhausted(self.bank.len()) {
            return Err(SessionError::NoPendingSteps(id.to_string()));
        }

        session.record_answer(answer.into());
        tracing::debug!(session_id = %id, cursor = session.cursor(), "answer recorded");

        if session.is_exhausted(self.bank.len()) {
            Ok(SubmitOutcome::Completed)
        } else {
            Ok(SubmitOutcome::NextQuestion)
        }
    }

    /// The bank's prompts split at the session's cursor
    pub async fn progress(&self, id: &str) -> Result<Progress, SessionError> {
        let sessions = self.sessions.read().await;
        let session = sessions
            .get(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;

        let prompts: Vec<String> = self.bank.prompts().map(String::from).collect();
        let (completed, pending) = prompts.split_at(session.cursor());

        Ok(Progress {
            completed_steps: completed.to_vec(),
            pending_steps: pending.to_vec(),
        })
    }

    /// Summary of the session's submitted answers
    pub async fn review(&self, id: &str) -> Result<Review, SessionError> {
        let sessions = self.sessions.read().await;
        let session = sessions
            .get(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;

        let answers = session.answers().to_vec();
        let summary = if answers.is_empty() {
            "No answers submitted yet".to_string()
        } else {
            format!("Answers so far: {}", answers.join(", "))
        };

        Ok(Review { answers, summary })
    }

    /// Evaluate the configured suggestion strategy against the session
    pub async fn suggest_action(&self, id: &str) -> Result<Suggestion, SessionError> {
        let sessions = self.sessions.read().await;
        let session = sessions
            .get(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;

        let pending = self.bank.len() - session.cursor();
        Ok(self.strategy.evaluate(session.answers(), pending))
    }

    /// Number of live sessions
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
