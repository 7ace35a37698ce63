//! The static question bank
//!
//! Questions are defined once at process start and shared read-only across
//! all sessions. The bank is an ordered sequence; a session's cursor is an
//! index into it.

use serde::{Deserialize, Serialize};

/// A single question in the bank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Zero-based position in the bank, defines sequence order
    pub position: usize,
    /// Prompt text shown to the client
    pub prompt: String,
    /// Ordered option labels
    pub options: Vec<String>,
}

/// Immutable ordered list of questions, identical for all sessions
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank from prompt/options pairs, assigning positions in order
    pub fn new(entries: Vec<(&str, Vec<&str>)>) -> Self {
        let questions = entries
            .into_iter()
            .enumerate()
            .map(|(position, (prompt, options))| Question {
                position,
                prompt: prompt.to_string(),
                options: options.into_iter().map(String::from).collect(),
            })
            .collect();
        Self { questions }
    }

    /// The built-in onboarding questionnaire
    pub fn builtin() -> Self {
        Self::new(vec![
            (
                "What would you like to build first?",
                vec!["A) Web app", "B) Automation", "C) Data processing"],
            ),
            (
                "How familiar are you with the platform?",
                vec![
                    "A) Brand new",
                    "B) Used it a few times",
                    "C) Power user",
                ],
            ),
            (
                "Who will be working in this workspace?",
                vec![
                    "A) Just me",
                    "B) A small team",
                    "C) A whole organization",
                ],
            ),
        ])
    }

    /// Number of questions in the bank
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the bank has no questions
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get the question at `index`, if any
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Iterate over all prompts in order
    pub fn prompts(&self) -> impl Iterator<Item = &str> {
        self.questions.iter().map(|q| q.prompt.as_str())
    }
}
