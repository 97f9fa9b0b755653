//! quizbank configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use quizbank_core::model::PlayMode;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = "quizbank.toml";

/// Top-level quizbank configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizbankConfig {
    /// Where the question bank is stored.
    #[serde(default = "default_questions_path")]
    pub questions_path: PathBuf,
    /// Where users and best scores are stored.
    #[serde(default = "default_users_path")]
    pub users_path: PathBuf,
    /// Selection policy for `play` when none is given.
    #[serde(default)]
    pub default_mode: PlayMode,
    /// Turn limit for random-draw runs (None = play until quitting).
    #[serde(default)]
    pub random_turns: Option<u32>,
}

fn default_questions_path() -> PathBuf {
    PathBuf::from("questions.toml")
}
fn default_users_path() -> PathBuf {
    PathBuf::from("users.toml")
}

impl Default for QuizbankConfig {
    fn default() -> Self {
        Self {
            questions_path: default_questions_path(),
            users_path: default_users_path(),
            default_mode: PlayMode::default(),
            random_turns: None,
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `quizbank.toml` in the current directory
/// 2. `~/.config/quizbank/config.toml`
///
/// Environment variable overrides: `QUIZBANK_QUESTIONS`, `QUIZBANK_USERS`.
pub fn load_config() -> Result<QuizbankConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizbankConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from(CONFIG_FILE);
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config_str(&content, &path)?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => QuizbankConfig::default(),
    };

    Ok(apply_env_overrides(config, |key| std::env::var(key).ok()))
}

/// Parse a config file, resolving relative data paths against the file's
/// directory.
pub fn parse_config_str(content: &str, source_path: &Path) -> Result<QuizbankConfig> {
    let mut config: QuizbankConfig = toml::from_str(content)
        .with_context(|| format!("failed to parse config: {}", source_path.display()))?;

    if let Some(base) = source_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        config.questions_path = base.join(&config.questions_path);
        config.users_path = base.join(&config.users_path);
    }
    Ok(config)
}

fn apply_env_overrides(
    mut config: QuizbankConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> QuizbankConfig {
    if let Some(path) = lookup("QUIZBANK_QUESTIONS").filter(|p| !p.is_empty()) {
        config.questions_path = PathBuf::from(path);
    }
    if let Some(path) = lookup("QUIZBANK_USERS").filter(|p| !p.is_empty()) {
        config.users_path = PathBuf::from(path);
    }
    config
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizbank"))
}
