//! Question bank linting.
//!
//! Questions are accepted leniently on insertion; this reports the ones a
//! player could never answer correctly, or would find confusing.

use std::collections::HashSet;

use crate::bank::QuestionBank;

/// A warning from question bank validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// 0-based position of the offending question.
    pub index: usize,
    /// Warning message.
    pub message: String,
}

/// Check every question in `bank` for common issues.
pub fn validate_bank(bank: &QuestionBank) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for (index, question) in bank.iter().enumerate() {
        let mut warn = |message: String| warnings.push(ValidationWarning { index, message });

        if question.text.trim().is_empty() {
            warn("question text is empty".into());
        }

        if question.options.is_empty() {
            warn("question has no options".into());
        } else if !question.is_answerable() {
            warn(format!(
                "answer {:?} is not one of the options; no choice can be correct",
                question.answer
            ));
        }

        let mut seen = HashSet::new();
        for (pos, option) in question.options.iter().enumerate() {
            if option.trim().is_empty() {
                warn(format!("option {} is blank", pos + 1));
            } else if !seen.insert(option.as_str()) {
                warn(format!("duplicate option: {option}"));
            }
        }
    }

    warnings
}
