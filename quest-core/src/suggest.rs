//! Action suggestion strategies
//!
//! Suggestion is a product decision separate from session storage, so it is
//! a pluggable strategy injected into the tracker at construction. Two
//! policies ship: a generic pending/completed policy and a content-matching
//! policy that maps specific answers to named follow-up actions.

use serde::{Deserialize, Serialize};

/// A suggested follow-up action for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Action label the client should act on
    pub suggested_action: String,
    /// Evaluation status
    pub status: String,
    /// Human-readable justification
    pub reason: String,
}

/// Rule evaluation over a session's submitted answers
///
/// `answers` are the submitted answer strings in submission order; `pending`
/// is the number of questions not yet answered.
pub trait SuggestionStrategy: Send + Sync {
    fn evaluate(&self, answers: &[String], pending: usize) -> Suggestion;
}

/// Generic policy: suggest answering the next question until the sequence
/// is exhausted.
#[derive(Debug, Default)]
pub struct CompletionStrategy;

impl SuggestionStrategy for CompletionStrategy {
    fn evaluate(&self, _answers: &[String], pending: usize) -> Suggestion {
        if pending == 0 {
            Suggestion {
                suggested_action: "All questions answered".to_string(),
                status: "Completed".to_string(),
                reason: "No pending questions left.".to_string(),
            }
        } else {
            Suggestion {
                suggested_action: "Answer the next question".to_string(),
                status: "Pending".to_string(),
                reason: "Questions are still remaining in the session.".to_string(),
            }
        }
    }
}

/// Content-matching policy: map specific answer text to a named follow-up
/// action, first match wins in rule order.
#[derive(Debug, Default)]
pub struct ContentStrategy;

/// Substring rules evaluated in order against each answer
const CONTENT_RULES: &[(&str, &str)] = &[
    ("Web app", "startWebAppTutorial"),
    ("Automation", "startAutomationTutorial"),
    ("Data processing", "startDataProcessingTutorial"),
];

impl SuggestionStrategy for ContentStrategy {
    fn evaluate(&self, answers: &[String], _pending: usize) -> Suggestion {
        for (needle, action) in CONTENT_RULES {
            if let Some(answer) = answers.iter().find(|a| a.contains(needle)) {
                return Suggestion {
                    suggested_action: (*action).to_string(),
                    status: "success".to_string(),
                    reason: format!("Answer '{}' matched '{}'", answer, needle),
                };
            }
        }

        Suggestion {
            suggested_action: "exploreFeatures".to_string(),
            status: "success".to_string(),
            reason: "No answer matched a specific follow-up; suggesting a general tour."
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn completion_strategy_pending() {
        let suggestion = CompletionStrategy.evaluate(&answers(&["A) Web app"]), 2);
        assert_eq!(suggestion.suggested_action, "Answer the next question");
        assert_eq!(suggestion.status, "Pending");
    }

    #[test]
    fn completion_strategy_completed() {
        let suggestion = CompletionStrategy.evaluate(&answers(&["a", "b", "c"]), 0);
        assert_eq!(suggestion.suggested_action, "All questions answered");
        assert_eq!(suggestion.status, "Completed");
        assert_eq!(suggestion.reason, "No pending questions left.");
    }

    #[test]
    fn content_strategy_matches_web_app() {
        let suggestion = ContentStrategy.evaluate(&answers(&["A) Web app"]), 2);
        assert_eq!(suggestion.suggested_action, "startWebAppTutorial");
        assert_eq!(suggestion.status, "success");
        assert!(suggestion.reason.contains("Web app"));
    }

    #[test]
    fn content_strategy_matches_automation() {
        let suggestion = ContentStrategy.evaluate(&answers(&["B) Automation"]), 0);
        assert_eq!(suggestion.suggested_action, "startAutomationTutorial");
    }

    #[test]
    fn content_strategy_matches_data_processing() {
        let suggestion = ContentStrategy.evaluate(&answers(&["C) Data processing"]), 0);
        assert_eq!(suggestion.suggested_action, "startDataProcessingTutorial");
    }

    #[test]
    fn content_strategy_first_rule_wins() {
        // Rules are ordered, not the answers: an Automation answer submitted
        // before a Web app answer still yields the Web app action.
        let suggestion =
            ContentStrategy.evaluate(&answers(&["B) Automation", "A) Web app"]), 1);
        assert_eq!(suggestion.suggested_action, "startWebAppTutorial");
    }

    #[test]
    fn content_strategy_defaults_to_explore() {
        let suggestion = ContentStrategy.evaluate(&answers(&["A) Just me"]), 0);
        assert_eq!(suggestion.suggested_action, "exploreFeatures");
        assert_eq!(suggestion.status, "success");
    }

    #[test]
    fn content_strategy_no_answers_defaults_to_explore() {
        let suggestion = ContentStrategy.evaluate(&[], 3);
        assert_eq!(suggestion.suggested_action, "exploreFeatures");
    }

    #[test]
    fn suggestion_serialization_roundtrip() {
        let suggestion = ContentStrategy.evaluate(&answers(&["A) Web app"]), 0);
        let json = serde_json::to_string(&suggestion).unwrap();
        let parsed: Suggestion = serde_json::from_str(&json).unwrap();
        assert_eq!(suggestion, parsed);
    }
}
