//! Core record types for quizbank.
//!
//! These are the shapes persisted to the question and user files and passed
//! through every store operation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::QuizError;

/// A multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Free-form category label.
    pub category: String,
    /// Free-form difficulty label.
    pub difficulty: String,
    /// The prompt shown to the player.
    pub text: String,
    /// Options in display order; an option is identified by its 1-based
    /// position.
    pub options: Vec<String>,
    /// Literal text of the correct option.
    pub answer: String,
    /// Shown after answering, whether or not the answer was right.
    #[serde(default)]
    pub feedback: String,
}

impl Question {
    /// Assemble a question without any checks.
    ///
    /// `answer` is not required to be one of `options`; such a question can
    /// never be answered correctly.
    pub fn new(
        category: impl Into<String>,
        difficulty: impl Into<String>,
        text: impl Into<String>,
        options: Vec<String>,
        answer: impl Into<String>,
        feedback: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            difficulty: difficulty.into(),
            text: text.into(),
            options,
            answer: answer.into(),
            feedback: feedback.into(),
        }
    }

    /// Assemble a question from form input, rejecting blank required fields.
    ///
    /// Every field except `feedback` must contain non-whitespace text, and at
    /// least one option must be non-blank. Membership of `answer` in
    /// `options` is still not checked.
    pub fn build(
        category: impl Into<String>,
        difficulty: impl Into<String>,
        text: impl Into<String>,
        options: Vec<String>,
        answer: impl Into<String>,
        feedback: impl Into<String>,
    ) -> Result<Self, QuizError> {
        let question = Self::new(category, difficulty, text, options, answer, feedback);

        let required = [
            ("category", &question.category),
            ("difficulty", &question.difficulty),
            ("text", &question.text),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(QuizError::EmptyFieldSet { field });
            }
        }
        if question.options.iter().all(|o| o.trim().is_empty()) {
            return Err(QuizError::EmptyFieldSet { field: "options" });
        }
        if question.answer.trim().is_empty() {
            return Err(QuizError::EmptyFieldSet { field: "answer" });
        }

        Ok(question)
    }

    /// 1-based position of the correct option, if `answer` is among the
    /// options.
    pub fn answer_position(&self) -> Option<usize> {
        self.options
            .iter()
            .position(|o| *o == self.answer)
            .map(|i| i + 1)
    }

    /// Whether some choice can ever be judged correct.
    pub fn is_answerable(&self) -> bool {
        self.answer_position().is_some()
    }
}

/// A player and their best score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique, case-sensitive key.
    pub username: String,
    /// Best completed-quiz score.
    #[serde(default)]
    pub score: u32,
    /// Session identifier, empty when not paired.
    #[serde(default)]
    pub current_game: String,
}

impl User {
    /// A fresh record with score 0 and no session.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            score: 0,
            current_game: String::new(),
        }
    }

    pub fn in_session(&self) -> bool {
        !self.current_game.is_empty()
    }
}

/// Question selection policy, as named in config files and on the command
/// line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayMode {
    /// Every question once, in stored order.
    #[default]
    Sequential,
    /// One uniformly random question per turn.
    Random,
}

impl fmt::Display for PlayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayMode::Sequential => write!(f, "sequential"),
            PlayMode::Random => write!(f, "random"),
        }
    }
}

impl FromStr for PlayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sequential" | "seq" => Ok(PlayMode::Sequential),
            "random" | "random-draw" | "rand" => Ok(PlayMode::Random),
            other => Err(format!("unknown play mode: {other}")),
        }
    }
}
