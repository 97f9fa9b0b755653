//! Answer evaluation.

use crate::error::QuizError;
use crate::model::Question;

/// Judge a 1-based `choice` against `question`.
///
/// Returns `true` iff the chosen option's text equals the answer exactly. A
/// choice of 0 or past the last option is an `IndexOutOfRange` error; "no
/// selection" must be handled before calling.
pub fn is_correct(question: &Question, choice: usize) -> Result<bool, QuizError> {
    let len = question.options.len();
    let option = choice
        .checked_sub(1)
        .and_then(|i| question.options.get(i))
        .ok_or(QuizError::IndexOutOfRange { index: choice, len })?;
    Ok(*option == question.answer)
}
