//! Shared application state for the quest server

use std::sync::Arc;

use chrono::{DateTime, Utc};
use quest_core::{ContentStrategy, QuestionBank, SessionTracker};

/// Shared application state accessible by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Session tracker owning all questionnaire sessions
    pub tracker: Arc<SessionTracker>,
    /// When the server started
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create a new AppState with the built-in question bank and the
    /// content-matching suggestion strategy
    pub fn new() -> Self {
        let tracker = Arc::new(SessionTracker::new(
            Arc::new(QuestionBank::builtin()),
            Arc::new(ContentStrategy),
        ));

        Self {
            tracker,
            started_at: Utc::now(),
        }
    }

    /// Create AppState around a custom tracker (for testing and for
    /// selecting a different suggestion strategy)
    pub fn with_tracker(tracker: Arc<SessionTracker>) -> Self {
        Self {
            tracker,
            started_at: Utc::now(),
        }
    }

    /// Returns how long the server has been running
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quest_core::CompletionStrategy;

    #[test]
    fn test_app_state_new() {
        let state = AppState::new();
        assert!(state.uptime_seconds() >= 0);
        assert_eq!(state.tracker.bank().len(), 3);
    }

    #[test]
    fn test_app_state_with_tracker() {
        let tracker = Arc::new(SessionTracker::new(
            Arc::new(QuestionBank::builtin()),
            Arc::new(CompletionStrategy),
        ));
        let state = AppState::with_tracker(tracker);
        assert!(state.uptime_seconds() >= 0);
    }
}
