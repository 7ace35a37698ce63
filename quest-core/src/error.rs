//! Error types for quest-core

use thiserror::Error;

/// Errors related to session tracking
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(String),

    #[error("No pending questions left in session {0}")]
    NoPendingSteps(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_displays_session_id() {
        let error = SessionError::NotFound("abc123".to_string());
        assert!(error.to_string().contains("Session not found"));
        assert!(error.to_string().contains("abc123"));
    }

    #[test]
    fn no_pending_steps_displays_session_id() {
        let error = SessionError::NoPendingSteps("abc123".to_string());
        assert!(error.to_string().contains("No pending questions"));
        assert!(error.to_string().contains("abc123"));
    }
}
