//! quest-core: Core library for the quest questionnaire service
//!
//! This crate provides the domain components for quest:
//!
//! - **Question bank** - [`QuestionBank`], the static ordered question list
//! - **Session tracking** - [`Session`] and [`SessionTracker`] for the linear
//!   walk through the bank
//! - **Action suggestion** - [`SuggestionStrategy`] and its two shipped
//!   policies, [`CompletionStrategy`] and [`ContentStrategy`]
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use quest_core::{ContentStrategy, QuestionBank, SessionTracker};
//!
//! # async fn example() -> Result<(), quest_core::SessionError> {
//! let tracker = SessionTracker::new(
//!     Arc::new(QuestionBank::builtin()),
//!     Arc::new(ContentStrategy),
//! );
//!
//! let started = tracker.start().await;
//! tracker.submit_answer(&started.session_id, "A) Web app").await?;
//! let suggestion = tracker.suggest_action(&started.session_id).await?;
//! println!("next up: {}", suggestion.suggested_action);
//! # Ok(())
//! # }
//! ```

pub mod bank;
pub mod error;
pub mod session;
pub mod suggest;

// Re-export key types for convenience
pub use bank::{Question, QuestionBank};
pub use error::SessionError;
pub use session::{Progress, Review, Session, SessionTracker, StartedSession, SubmitOutcome};
pub use suggest::{CompletionStrategy, ContentStrategy, Suggestion, SuggestionStrategy};
