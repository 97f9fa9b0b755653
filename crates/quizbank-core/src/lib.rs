//! quizbank-core — Question bank, scoring rules and quiz runs.
//!
//! This crate owns the state-and-rules layer of quizbank: mutating the
//! question bank, judging answers, reconciling best scores, ordering the
//! leaderboard, pairing players and driving a single quiz run. It performs
//! no I/O; loading and saving live in `quizbank-store`.

pub mod bank;
pub mod error;
pub mod evaluator;
pub mod model;
pub mod pairing;
pub mod registry;
pub mod run;
pub mod validate;

pub use bank::QuestionBank;
pub use error::QuizError;
pub use evaluator::is_correct;
pub use model::{Question, User};
pub use pairing::{current_session, start_session, start_session_with_rng, SessionId};
pub use registry::UserRegistry;
pub use run::{AnswerOutcome, CursorMove, Direction, QuizRun, RunMode, RunState};
