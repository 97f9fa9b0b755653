//! The `quizbank users` commands.

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;

use quizbank_store::{load_users, save_users};

#[derive(Subcommand)]
pub enum UsersCommand {
    /// List all users
    List,

    /// Show one user's best score and session
    Show {
        /// Player name
        user: String,
    },

    /// Delete a user and their score
    Delete {
        /// Player name
        user: String,
    },
}

pub fn execute(config_path: Option<PathBuf>, command: UsersCommand) -> Result<()> {
    let config = super::config(config_path)?;
    let mut users = load_users(&config.users_path)?;

    match command {
        UsersCommand::List => {
            if users.is_empty() {
                println!("No users yet.");
            }
            for user in &users {
                println!("User: {}, Score: {}", user.username, user.score);
            }
        }
        UsersCommand::Show { user } => match users.find(&user) {
            Some(record) => {
                println!("User: {}", record.username);
                println!("Best score: {}", record.score);
                if record.in_session() {
                    println!("Session: {}", record.current_game);
                } else {
                    println!("Session: none");
                }
            }
            None => println!("User '{user}' not found."),
        },
        UsersCommand::Delete { user } => {
            let removed = users.delete(&user);
            if removed > 0 {
                save_users(&config.users_path, &users)?;
                println!("Deleted user '{user}'.");
            } else {
                println!("User '{user}' not found; nothing deleted.");
            }
        }
    }

    Ok(())
}
