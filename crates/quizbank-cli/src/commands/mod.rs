//! Subcommand implementations.

pub mod init;
pub mod leaderboard;
pub mod pair;
pub mod play;
pub mod questions;
pub mod users;

use std::path::PathBuf;

use anyhow::Result;

use quizbank_store::QuizbankConfig;

/// Resolve the configuration for a command.
pub fn config(path: Option<PathBuf>) -> Result<QuizbankConfig> {
    quizbank_store::load_config_from(path.as_deref())
}
