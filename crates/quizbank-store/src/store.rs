//! TOML question and user files.
//!
//! Questions live in an array of tables named `question`, users in one named
//! `user`. A file that does not exist yet loads as an empty collection.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use quizbank_core::model::{Question, User};
use quizbank_core::{QuestionBank, UserRegistry};

#[derive(Debug, Default, Deserialize)]
struct QuestionFile {
    #[serde(default)]
    question: Vec<Question>,
}

#[derive(Debug, Serialize)]
struct QuestionFileRef<'a> {
    question: &'a [Question],
}

#[derive(Debug, Default, Deserialize)]
struct UserFile {
    #[serde(default)]
    user: Vec<User>,
}

#[derive(Debug, Serialize)]
struct UserFileRef<'a> {
    user: &'a [User],
}

/// Load the question bank from `path`.
pub fn load_questions(path: &Path) -> Result<QuestionBank> {
    match read_if_exists(path)? {
        Some(content) => parse_questions_str(&content, path),
        None => {
            tracing::debug!("{} not found, starting with no questions", path.display());
            Ok(QuestionBank::new())
        }
    }
}

/// Parse a question file's contents (useful for testing).
///
/// Questions without any options can never be answered, so they are
/// skipped with a warning rather than served to a run.
pub fn parse_questions_str(content: &str, source_path: &Path) -> Result<QuestionBank> {
    let parsed: QuestionFile = toml::from_str(content)
        .with_context(|| format!("failed to parse questions: {}", source_path.display()))?;

    let mut questions = Vec::with_capacity(parsed.question.len());
    for (index, question) in parsed.question.into_iter().enumerate() {
        if question.options.is_empty() {
            tracing::warn!(
                "skipping question {} in {}: no options",
                index + 1,
                source_path.display()
            );
            continue;
        }
        questions.push(question);
    }

    Ok(QuestionBank::from(questions))
}

/// Render the question bank as TOML.
pub fn render_questions(bank: &QuestionBank) -> Result<String> {
    let file = QuestionFileRef {
        question: bank.as_slice(),
    };
    toml::to_string_pretty(&file).context("failed to serialize questions")
}

/// Write the question bank to `path`, replacing it atomically.
pub fn save_questions(path: &Path, bank: &QuestionBank) -> Result<()> {
    write_atomically(path, &render_questions(bank)?)?;
    tracing::debug!("saved {} question(s) to {}", bank.len(), path.display());
    Ok(())
}

/// Load the user registry from `path`.
pub fn load_users(path: &Path) -> Result<UserRegistry> {
    match read_if_exists(path)? {
        Some(content) => parse_users_str(&content, path),
        None => {
            tracing::debug!("{} not found, starting with no users", path.display());
            Ok(UserRegistry::new())
        }
    }
}

/// Parse a user file's contents (useful for testing).
pub fn parse_users_str(content: &str, source_path: &Path) -> Result<UserRegistry> {
    let parsed: UserFile = toml::from_str(content)
        .with_context(|| format!("failed to parse users: {}", source_path.display()))?;

    let mut seen = std::collections::HashSet::new();
    for user in &parsed.user {
        if !seen.insert(user.username.as_str()) {
            tracing::warn!(
                "duplicate user '{}' in {}; only the first record is used for lookups",
                user.username,
                source_path.display()
            );
        }
    }

    Ok(UserRegistry::from(parsed.user))
}

/// Render the user registry as TOML.
pub fn render_users(users: &UserRegistry) -> Result<String> {
    let file = UserFileRef {
        user: users.as_slice(),
    };
    toml::to_string_pretty(&file).context("failed to serialize users")
}

/// Write the user registry to `path`, replacing it atomically.
pub fn save_users(path: &Path, users: &UserRegistry) -> Result<()> {
    write_atomically(path, &render_users(users)?)?;
    tracing::debug!("saved {} user(s) to {}", users.len(), path.display());
    Ok(())
}

fn read_if_exists(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("failed to read {}", path.display())),
    }
}

fn write_atomically(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create directory: {}", dir.display()))?;

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temp file in {}", dir.display()))?;
    tmp.write_all(content.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;
    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("failed to replace {}", path.display()))?;
    Ok(())
}
