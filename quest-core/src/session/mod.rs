//! Session tracking

pub mod state;
pub mod tracker;

// Re-export key types for convenience
pub use state::{Session, SubmitOutcome};
pub use tracker::{Progress, Review, SessionTracker, StartedSession};
