//! Quiz error types.
//!
//! Every condition here is local and recoverable: the caller inspects it and
//! re-prompts. Operations that clamp (deleting a missing question, navigating
//! past either end of a run) never produce one of these.

use thiserror::Error;

/// Errors reported by question bank, evaluator and quiz run operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The username was empty after trimming whitespace.
    #[error("username cannot be empty")]
    EmptyUsername,

    /// An answer was submitted without a selected option, or outside a
    /// running quiz.
    #[error("no option selected")]
    NoSelection,

    /// A required question field was left empty.
    #[error("question field `{field}` must be filled")]
    EmptyFieldSet { field: &'static str },

    /// An index or 1-based choice fell outside the collection.
    #[error("index {index} out of range for {len} item(s)")]
    IndexOutOfRange { index: usize, len: usize },

    /// A random-draw run was started over an empty pool of questions.
    #[error("no questions available to draw from")]
    EmptyBank,

    /// A score commit was requested before the run completed.
    #[error("quiz run has not completed")]
    RunNotCompleted,
}
