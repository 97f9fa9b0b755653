//! quizbank-store — TOML persistence and configuration.
//!
//! Loads and saves the question bank and user registry, and resolves where
//! those files live.

pub mod config;
pub mod store;

pub use config::{load_config, load_config_from, QuizbankConfig};
pub use store::{load_questions, load_users, save_questions, save_users};
