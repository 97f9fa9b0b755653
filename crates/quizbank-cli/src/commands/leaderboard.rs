//! The `quizbank leaderboard` command.

use std::path::PathBuf;

use anyhow::Result;
use clap::ValueEnum;
use comfy_table::{Cell, Table};
use serde::Serialize;

use quizbank_core::User;
use quizbank_store::load_users;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

/// One ranked line of the leaderboard.
#[derive(Debug, Serialize)]
struct Row<'a> {
    rank: usize,
    username: &'a str,
    score: u32,
}

pub fn execute(config_path: Option<PathBuf>, format: OutputFormat, limit: Option<usize>) -> Result<()> {
    let config = super::config(config_path)?;
    let users = load_users(&config.users_path)?;

    let ranked = users.leaderboard();
    let rows = rows(&ranked, limit);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Markdown => println!("{}", to_markdown(&rows)),
        OutputFormat::Text => {
            if rows.is_empty() {
                println!("No scores yet.");
            } else {
                println!("{}", to_table(&rows));
            }
        }
    }

    Ok(())
}

fn rows<'a>(ranked: &[&'a User], limit: Option<usize>) -> Vec<Row<'a>> {
    ranked
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .enumerate()
        .map(|(i, &user)| Row {
            rank: i + 1,
            username: &user.username,
            score: user.score,
        })
        .collect()
}

fn to_table(rows: &[Row<'_>]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Rank", "User", "Best score"]);
    for row in rows {
        table.add_row(vec![
            Cell::new(row.rank),
            Cell::new(row.username),
            Cell::new(row.score),
        ]);
    }
    table
}

fn to_markdown(rows: &[Row<'_>]) -> String {
    let mut md = String::from("| Rank | User | Best score |\n|---:|---|---:|\n");
    for row in rows {
        md.push_str(&format!("| {} | {} | {} |\n", row.rank, row.username, row.score));
    }
    md
}
