//! Session state
//!
//! A session is one client's walk through the question bank. The cursor
//! indexes the next unanswered question; answers and cursor always advance
//! together, so `answers.len() == cursor` at every observable point.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of submitting an answer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    /// More questions remain
    NextQuestion,
    /// The sequence is exhausted
    Completed,
}

impl SubmitOutcome {
    /// Wire status string for this outcome
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmitOutcome::NextQuestion => "next_question",
            SubmitOutcome::Completed => "completed",
        }
    }
}

/// A single questionnaire session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Unique opaque identifier
    id: String,
    /// When the session was started, captured once
    started_at: DateTime<Utc>,
    /// Index of the next unanswered question
    cursor: usize,
    /// Submitted answers, in submission order
    answers: Vec<String>,
}

impl Session {
    /// Create a fresh session at the start of the question sequence
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            started_at: Utc::now(),
            cursor: 0,
            answers: Vec::new(),
        }
    }

    /// Get the session ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// When the session was started
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Index of the next unanswered question
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Submitted answers in submission order
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Whether every question in a bank of `bank_len` has been answered
    pub fn is_exhausted(&self, bank_len: usize) -> bool {
        self.cursor >= bank_len
    }

    /// Record an answer and advance the cursor as one unit
    ///
    /// The caller is responsible for checking exhaustion first; this only
    /// maintains the answers/cursor pairing.
    pub(crate) fn record_answer(&mut self, answer: String) {
        self.answers.push(answer);
        self.cursor += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_at_cursor_zero() {
        let session = Session::new("test-session");
        assert_eq!(session.id(), "test-session");
        assert_eq!(session.cursor(), 0);
        assert!(session.answers().is_empty());
    }

    #[test]
    fn record_answer_advances_cursor_and_answers_together() {
        let mut session = Session::new("test");
        session.record_answer("A) Web app".to_string());

        assert_eq!(session.cursor(), 1);
        assert_eq!(session.answers(), ["A) Web app".to_string()]);
        assert_eq!(session.answers().len(), session.cursor());
    }

    #[test]
    fn is_exhausted_tracks_bank_length() {
        let mut session = Session::new("test");
        assert!(!session.is_exhausted(2));
        assert!(session.is_exhausted(0));

        session.record_answer("a".to_string());
        session.record_answer("b".to_string());
        assert!(session.is_exhausted(2));
    }

    #[test]
    fn submit_outcome_wire_strings() {
        assert_eq!(SubmitOutcome::NextQuestion.as_str(), "next_question");
        assert_eq!(SubmitOutcome::Completed.as_str(), "completed");
    }

    #[test]
    fn session_serialization_roundtrip() {
        let mut session = Session::new("test");
        session.record_answer("A) Web app".to_string());

        let json = serde_json::to_string(&session).unwrap();
        let parsed: Session = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.id(), session.id());
        assert_eq!(parsed.cursor(), session.cursor());
        assert_eq!(parsed.answers(), session.answers());
    }
}
