//! The `quizbank pair` and `quizbank session` commands.

use std::path::PathBuf;

use anyhow::Result;

use quizbank_core::{current_session, start_session, QuizError};
use quizbank_store::{load_users, save_users};

pub fn execute(config_path: Option<PathBuf>, player1: String, player2: String) -> Result<()> {
    let player1 = player1.trim();
    let player2 = player2.trim();
    if player1.is_empty() || player2.is_empty() {
        return Err(QuizError::EmptyUsername.into());
    }

    let config = super::config(config_path)?;
    let mut users = load_users(&config.users_path)?;

    let id = start_session(&mut users, player1, player2);
    save_users(&config.users_path, &users)?;

    println!("Game started between {player1} and {player2} with ID: {id}");
    for player in [player1, player2] {
        if users.find(player).is_none() {
            println!("Note: '{player}' is not a registered user; the session was not recorded for them.");
        }
    }

    Ok(())
}

pub fn show_session(config_path: Option<PathBuf>, user: String) -> Result<()> {
    let config = super::config(config_path)?;
    let users = load_users(&config.users_path)?;

    match current_session(&users, &user) {
        None => println!("User '{user}' not found."),
        Some("") => println!("{user} is not in a session."),
        Some(id) => println!("{id}"),
    }

    Ok(())
}
