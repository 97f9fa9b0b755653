//! Quiz run controller.
//!
//! A [`QuizRun`] drives one player through a set of questions, counting
//! correct answers and committing the total to the [`UserRegistry`] once the
//! run completes. The two selection policies share one controller:
//!
//! - [`RunMode::Sequential`] walks the questions in stored order, exactly
//!   once, and supports free navigation between them.
//! - [`RunMode::RandomDraw`] draws a uniformly random question each turn,
//!   with replacement. Without a turn limit it never completes; the caller
//!   abandons it by dropping the run.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::QuizError;
use crate::evaluator::is_correct;
use crate::model::{PlayMode, Question};
use crate::registry::UserRegistry;

/// Question selection policy for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Each question once, in stored order.
    Sequential,
    /// One random question per turn, with replacement. `max_turns` of `None`
    /// means the run has no end.
    RandomDraw { max_turns: Option<u32> },
}

impl RunMode {
    /// Build a run mode from its configured name. `turns` only applies to
    /// random draws.
    pub fn from_play_mode(mode: PlayMode, turns: Option<u32>) -> Self {
        match mode {
            PlayMode::Sequential => RunMode::Sequential,
            PlayMode::Random => RunMode::RandomDraw { max_turns: turns },
        }
    }
}

/// Lifecycle of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    NotStarted,
    InProgress,
    Completed,
}

/// Navigation request for sequential runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Result of a navigation request. Hitting either end of the run is not an
/// error; the cursor simply stays put.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Moved { index: usize },
    Stayed,
}

/// What happened when an answer was submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// Text of the correct option.
    pub answer: String,
    /// Question feedback, possibly empty.
    pub feedback: String,
    /// Accumulated score after this answer.
    pub score: u32,
    /// Whether this answer ended the run.
    pub completed: bool,
}

/// A single player's pass through a set of questions.
#[derive(Debug)]
pub struct QuizRun {
    mode: RunMode,
    questions: Vec<Question>,
    username: String,
    state: RunState,
    cursor: usize,
    turns: u32,
    score: u32,
    rng: StdRng,
}

impl QuizRun {
    /// A run over `questions` that has not started yet.
    pub fn new(mode: RunMode, questions: Vec<Question>) -> Self {
        Self {
            mode,
            questions,
            username: String::new(),
            state: RunState::NotStarted,
            cursor: 0,
            turns: 0,
            score: 0,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn sequential(questions: Vec<Question>) -> Self {
        Self::new(RunMode::Sequential, questions)
    }

    pub fn random_draw(questions: Vec<Question>, max_turns: Option<u32>) -> Self {
        Self::new(RunMode::RandomDraw { max_turns }, questions)
    }

    /// Replace the random source, e.g. with a seeded one.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn mode(&self) -> RunMode {
        self.mode
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Correct answers so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Answers submitted so far.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Number of questions the run draws from.
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// The question awaiting an answer, if the run is in progress.
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            RunState::InProgress => self.questions.get(self.cursor),
            _ => None,
        }
    }

    /// 0-based position of the current question within the run's questions.
    pub fn position(&self) -> Option<usize> {
        self.current_question().map(|_| self.cursor)
    }

    /// Begin (or restart) the run for `username`.
    ///
    /// The name is trimmed and must not be empty. The player is registered
    /// if unknown and the score resets to 0. A sequential run over no
    /// questions completes immediately.
    pub fn start(&mut self, username: &str, users: &mut UserRegistry) -> Result<(), QuizError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(QuizError::EmptyUsername);
        }
        if matches!(self.mode, RunMode::RandomDraw { .. }) && self.questions.is_empty() {
            return Err(QuizError::EmptyBank);
        }

        users.ensure_exists(username);
        self.username = username.to_owned();
        self.score = 0;
        self.turns = 0;
        self.cursor = 0;
        self.state = RunState::InProgress;

        match self.mode {
            RunMode::Sequential if self.questions.is_empty() => {
                self.state = RunState::Completed;
            }
            RunMode::Sequential => {}
            RunMode::RandomDraw { max_turns } => {
                if max_turns == Some(0) {
                    self.state = RunState::Completed;
                } else {
                    self.draw();
                }
            }
        }

        tracing::debug!(
            username = %self.username,
            mode = ?self.mode,
            questions = self.questions.len(),
            "quiz run started"
        );
        Ok(())
    }

    /// Submit a 1-based `choice` for the current question.
    ///
    /// `None` (nothing selected) or a run that is not in progress yields
    /// `NoSelection`. A choice past the last option yields
    /// `IndexOutOfRange` and leaves the run untouched.
    pub fn advance(&mut self, choice: Option<usize>) -> Result<AnswerOutcome, QuizError> {
        let choice = choice.ok_or(QuizError::NoSelection)?;
        let question = self.current_question().ok_or(QuizError::NoSelection)?;

        let correct = is_correct(question, choice)?;
        let answer = question.answer.clone();
        let feedback = question.feedback.clone();

        if correct {
            self.score = self.score.saturating_add(1);
        }
        self.turns = self.turns.saturating_add(1);

        match self.mode {
            RunMode::Sequential => {
                self.cursor += 1;
                if self.cursor >= self.questions.len() {
                    self.state = RunState::Completed;
                }
            }
            RunMode::RandomDraw { max_turns } => {
                if max_turns.is_some_and(|max| self.turns >= max) {
                    self.state = RunState::Completed;
                } else {
                    self.draw();
                }
            }
        }

        let completed = self.state == RunState::Completed;
        if completed {
            tracing::debug!(username = %self.username, score = self.score, "quiz run completed");
        }

        Ok(AnswerOutcome {
            correct,
            answer,
            feedback,
            score: self.score,
            completed,
        })
    }

    /// Move to the previous or next question without answering.
    ///
    /// Only sequential runs in progress navigate; at either end, or in any
    /// other situation, the cursor stays where it is.
    pub fn navigate(&mut self, direction: Direction) -> CursorMove {
        if self.mode != RunMode::Sequential || self.state != RunState::InProgress {
            return CursorMove::Stayed;
        }
        let target = match direction {
            Direction::Previous => self.cursor.checked_sub(1),
            Direction::Next => Some(self.cursor + 1).filter(|&i| i < self.questions.len()),
        };
        match target {
            Some(index) => {
                self.cursor = index;
                CursorMove::Moved { index }
            }
            None => CursorMove::Stayed,
        }
    }

    /// Commit the run's score as the player's best and return the resulting
    /// best score, which may come from an earlier run.
    pub fn complete(&self, users: &mut UserRegistry) -> Result<u32, QuizError> {
        if self.state != RunState::Completed {
            return Err(QuizError::RunNotCompleted);
        }
        users.update_best_score(&self.username, self.score);
        Ok(users.best_score(&self.username))
    }

    fn draw(&mut self) {
        self.cursor = self.rng.gen_range(0..self.questions.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::User;

    fn question(text: &str, options: &[&str], answer: &str) -> Question {
        Question::new(
            "general",
            "easy",
            text,
            options.iter().map(|o| o.to_string()).collect(),
            answer,
            format!("feedback for {text}"),
        )
    }

    fn capital() -> Question {
        question("capital", &["Paris", "Rome", "Berlin"], "Paris")
    }

    fn three_questions() -> Vec<Question> {
        vec![
            question("q1", &["a", "b"], "a"),
            question("q2", &["a", "b"], "b"),
            question("q3", &["a", "b", "c"], "c"),
        ]
    }

    fn seeded(run: QuizRun) -> QuizRun {
        run.with_rng(StdRng::seed_from_u64(42))
    }

    #[test]
    fn single_question_sequential_run() {
        let mut users = UserRegistry::new();
        let mut run = QuizRun::sequential(vec![capital()]);
        assert_eq!(run.state(), RunState::NotStarted);

        run.start("frank", &mut users).unwrap();
        assert_eq!(run.state(), RunState::InProgress);
        assert_eq!(run.score(), 0);
        assert_eq!(users.find("frank"), Some(&User::new("frank")));

        let outcome = run.advance(Some(1)).unwrap();
        assert!(outcome.correct);
        assert!(outcome.completed);
        assert_eq!(outcome.answer, "Paris");
        assert_eq!(run.state(), RunState::Completed);
        assert_eq!(run.score(), 1);

        assert_eq!(run.complete(&mut users).unwrap(), 1);
        assert_eq!(users.best_score("frank"), 1);
    }

    #[test]
    fn complete_keeps_better_previous_score() {
        let mut users = UserRegistry::from(vec![User {
            username: "gina".into(),
            score: 4,
            current_game: String::new(),
        }]);
        let mut run = QuizRun::sequential(three_questions());
        run.start("gina", &mut users).unwrap();
        for _ in 0..3 {
            run.advance(Some(1)).unwrap();
        }
        assert_eq!(run.score(), 1);
        assert_eq!(run.complete(&mut users).unwrap(), 4);
        assert_eq!(users.best_score("gina"), 4);
    }

    #[test]
    fn start_rejects_blank_username() {
        let mut users = UserRegistry::new();
        let mut run = QuizRun::sequential(three_questions());
        assert_eq!(run.start("   ", &mut users), Err(QuizError::EmptyUsername));
        assert_eq!(run.state(), RunState::NotStarted);
        assert!(users.is_empty());
    }

    #[test]
    fn start_trims_username() {
        let mut users = UserRegistry::new();
        let mut run = QuizRun::sequential(three_questions());
        run.start("  hal ", &mut users).unwrap();
        assert_eq!(run.username(), "hal");
        assert!(users.find("hal").is_some());
    }

    #[test]
    fn restart_resets_score() {
        let mut users = UserRegistry::new();
        let mut run = QuizRun::sequential(three_questions());
        run.start("ivy", &mut users).unwrap();
        run.advance(Some(1)).unwrap();
        assert_eq!(run.score(), 1);
        run.start("ivy", &mut users).unwrap();
        assert_eq!(run.score(), 0);
        assert_eq!(run.position(), Some(0));
        assert_eq!(users.len(), 1);
    }

    #[test]
    fn advance_requires_selection_and_running_state() {
        let mut users = UserRegistry::new();
        let mut run = QuizRun::sequential(vec![capital()]);
        assert_eq!(run.advance(Some(1)), Err(QuizError::NoSelection));

        run.start("jo", &mut users).unwrap();
        assert_eq!(run.advance(None), Err(QuizError::NoSelection));
        run.advance(Some(2)).unwrap();
        assert_eq!(run.advance(Some(1)), Err(QuizError::NoSelection));
    }

    #[test]
    fn out_of_range_choice_leaves_run_untouched() {
        let mut users = UserRegistry::new();
        let mut run = QuizRun::sequential(three_questions());
        run.start("kim", &mut users).unwrap();
        assert_eq!(
            run.advance(Some(5)),
            Err(QuizError::IndexOutOfRange { index: 5, len: 2 })
        );
        assert_eq!(run.position(), Some(0));
        assert_eq!(run.turns(), 0);
    }

    #[test]
    fn wrong_answer_reports_correct_option_and_feedback() {
        let mut users = UserRegistry::new();
        let mut run = QuizRun::sequential(vec![capital()]);
        run.start("lee", &mut users).unwrap();
        let outcome = run.advance(Some(3)).unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.answer, "Paris");
        assert_eq!(outcome.feedback, "feedback for capital");
        assert_eq!(outcome.score, 0);
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let mut users = UserRegistry::new();
        let mut run = QuizRun::sequential(three_questions());
        run.start("max", &mut users).unwrap();

        assert_eq!(run.navigate(Direction::Previous), CursorMove::Stayed);
        assert_eq!(run.navigate(Direction::Next), CursorMove::Moved { index: 1 });
        assert_eq!(run.navigate(Direction::Next), CursorMove::Moved { index: 2 });
        assert_eq!(run.navigate(Direction::Next), CursorMove::Stayed);
        assert_eq!(run.current_question().unwrap().text, "q3");
        assert_eq!(run.navigate(Direction::Previous), CursorMove::Moved { index: 1 });
        assert_eq!(run.turns(), 0);
        assert_eq!(run.score(), 0);
    }

    #[test]
    fn answering_last_question_after_skipping_completes() {
        let mut users = UserRegistry::new();
        let mut run = QuizRun::sequential(three_questions());
        run.start("ned", &mut users).unwrap();
        run.navigate(Direction::Next);
        run.navigate(Direction::Next);
        let outcome = run.advance(Some(3)).unwrap();
        assert!(outcome.correct);
        assert!(outcome.completed);
        assert_eq!(run.complete(&mut users).unwrap(), 1);
    }

    #[test]
    fn navigation_is_a_no_op_outside_sequential_runs() {
        let mut users = UserRegistry::new();
        let mut run = seeded(QuizRun::random_draw(three_questions(), None));
        run.start("oli", &mut users).unwrap();
        let before = run.position();
        assert_eq!(run.navigate(Direction::Next), CursorMove::Stayed);
        assert_eq!(run.position(), before);

        let mut idle = QuizRun::sequential(three_questions());
        assert_eq!(idle.navigate(Direction::Next), CursorMove::Stayed);
    }

    #[test]
    fn complete_before_finish_is_an_error() {
        let mut users = UserRegistry::new();
        let mut run = QuizRun::sequential(three_questions());
        run.start("pat", &mut users).unwrap();
        run.advance(Some(1)).unwrap();
        assert_eq!(run.complete(&mut users), Err(QuizError::RunNotCompleted));
        assert_eq!(users.best_score("pat"), 0);
    }

    #[test]
    fn empty_sequential_run_completes_immediately() {
        let mut users = UserRegistry::new();
        let mut run = QuizRun::sequential(Vec::new());
        run.start("quin", &mut users).unwrap();
        assert_eq!(run.state(), RunState::Completed);
        assert!(run.current_question().is_none());
        assert_eq!(run.complete(&mut users).unwrap(), 0);
    }

    #[test]
    fn random_draw_over_empty_pool_fails() {
        let mut users = UserRegistry::new();
        let mut run = QuizRun::random_draw(Vec::new(), None);
        assert_eq!(run.start("rae", &mut users), Err(QuizError::EmptyBank));
        assert!(users.is_empty());
    }

    #[test]
    fn unlimited_random_draw_never_completes() {
        let mut users = UserRegistry::new();
        let mut run = seeded(QuizRun::random_draw(vec![capital()], None));
        run.start("sam", &mut users).unwrap();
        for turn in 1..=50 {
            let outcome = run.advance(Some(1)).unwrap();
            assert!(!outcome.completed);
            assert_eq!(outcome.score, turn);
        }
        assert_eq!(run.state(), RunState::InProgress);
        assert_eq!(run.complete(&mut users), Err(QuizError::RunNotCompleted));
    }

    #[test]
    fn counters_saturate_in_endless_runs() {
        let mut users = UserRegistry::new();
        let mut run = seeded(QuizRun::random_draw(vec![capital()], None));
        run.start("rio", &mut users).unwrap();
        run.score = u32::MAX;
        run.turns = u32::MAX;

        let outcome = run.advance(Some(1)).unwrap();
        assert!(outcome.correct);
        assert_eq!(run.score(), u32::MAX);
        assert_eq!(run.turns(), u32::MAX);
        assert_eq!(run.state(), RunState::InProgress);
    }

    #[test]
    fn random_draw_repeats_questions() {
        let mut users = UserRegistry::new();
        let questions = three_questions();
        let mut run = seeded(QuizRun::random_draw(questions.clone(), None));
        run.start("tia", &mut users).unwrap();

        let mut seen = Vec::new();
        for _ in 0..30 {
            let current = run.current_question().unwrap();
            assert!(questions.contains(current));
            seen.push(run.position().unwrap());
            run.advance(Some(1)).unwrap();
        }
        seen.sort_unstable();
        seen.dedup();
        assert!(seen.len() < 30);
    }

    #[test]
    fn random_draw_with_turn_limit_commits() {
        let mut users = UserRegistry::new();
        let mut run = seeded(QuizRun::random_draw(vec![capital()], Some(3)));
        run.start("uma", &mut users).unwrap();
        assert!(!run.advance(Some(1)).unwrap().completed);
        assert!(!run.advance(Some(2)).unwrap().completed);
        assert!(run.advance(Some(1)).unwrap().completed);
        assert_eq!(run.state(), RunState::Completed);
        assert_eq!(run.complete(&mut users).unwrap(), 2);
    }

    #[test]
    fn run_mode_from_play_mode() {
        assert_eq!(
            RunMode::from_play_mode(PlayMode::Sequential, Some(5)),
            RunMode::Sequential
        );
        assert_eq!(
            RunMode::from_play_mode(PlayMode::Random, Some(5)),
            RunMode::RandomDraw { max_turns: Some(5) }
        );
    }
}
