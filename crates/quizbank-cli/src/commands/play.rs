//! The `quizbank play` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use quizbank_core::model::PlayMode;
use quizbank_core::{CursorMove, Direction, QuizError, QuizRun, RunMode, RunState};
use quizbank_store::{load_questions, load_users, save_users};

/// How an interactive run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEnd {
    Completed,
    Abandoned,
}

pub fn execute(
    config_path: Option<PathBuf>,
    user: String,
    mode: Option<String>,
    turns: Option<u32>,
    category: Option<String>,
    difficulty: Option<String>,
) -> Result<()> {
    let config = super::config(config_path)?;

    let mode = match mode {
        Some(m) => m
            .parse::<PlayMode>()
            .map_err(|e: String| anyhow::anyhow!("{}", e))?,
        None => config.default_mode,
    };
    let turns = turns.or(config.random_turns);

    let bank = load_questions(&config.questions_path)?;
    let mut users = load_users(&config.users_path)?;

    let questions: Vec<_> = bank
        .filter(category.as_deref(), difficulty.as_deref())
        .into_iter()
        .cloned()
        .collect();

    if questions.is_empty() {
        println!("No questions match the selected filters.");
        let categories = bank.categories();
        if !categories.is_empty() {
            println!("Available categories: {}", categories.join(", "));
        }
        return Ok(());
    }

    let mut run = QuizRun::new(RunMode::from_play_mode(mode, turns), questions);
    let known = users.find(user.trim()).is_some();
    run.start(&user, &mut users)?;
    if !known {
        save_users(&config.users_path, &users)?;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let end = play_loop(&mut run, stdin.lock(), stdout.lock())?;

    match end {
        RunEnd::Completed => {
            let best = run.complete(&mut users)?;
            save_users(&config.users_path, &users)?;
            println!("\nThank you for playing, {}!", run.username());
            println!("Score this run: {}", run.score());
            println!("Your personal best score: {best}");
        }
        RunEnd::Abandoned => {
            println!("\nQuiz abandoned. Score not recorded.");
        }
    }

    Ok(())
}

/// Drive `run` from line-oriented input until it completes or the player
/// quits. End of input counts as quitting.
pub fn play_loop<R: BufRead, W: Write>(
    run: &mut QuizRun,
    mut input: R,
    mut out: W,
) -> Result<RunEnd> {
    let sequential = run.mode() == RunMode::Sequential;

    while run.state() == RunState::InProgress {
        print_question(run, &mut out)?;
        if sequential {
            write!(out, "Answer (number, p/n to navigate, q to quit): ")?;
        } else {
            write!(out, "Answer (number, q to quit): ")?;
        }
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("failed to read answer")? == 0 {
            writeln!(out)?;
            return Ok(RunEnd::Abandoned);
        }

        let choice = match line.trim() {
            "q" | "quit" => return Ok(RunEnd::Abandoned),
            "p" | "prev" if sequential => {
                if run.navigate(Direction::Previous) == CursorMove::Stayed {
                    writeln!(out, "Already at the first question.")?;
                }
                continue;
            }
            "n" | "next" if sequential => {
                if run.navigate(Direction::Next) == CursorMove::Stayed {
                    writeln!(out, "Already at the last question.")?;
                }
                continue;
            }
            other => other.parse::<usize>().ok(),
        };

        let option_count = run.current_question().map_or(0, |q| q.options.len());
        match run.advance(choice) {
            Ok(outcome) => {
                if outcome.correct {
                    writeln!(out, "Correct!")?;
                } else {
                    writeln!(out, "Wrong! The correct answer was: {}", outcome.answer)?;
                }
                if !outcome.feedback.is_empty() {
                    writeln!(out, "{}", outcome.feedback)?;
                }
            }
            Err(QuizError::NoSelection) => writeln!(out, "Please select an option!")?,
            Err(QuizError::IndexOutOfRange { .. }) => {
                writeln!(out, "Choose a number between 1 and {option_count}.")?
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(RunEnd::Completed)
}

fn print_question<W: Write>(run: &QuizRun, out: &mut W) -> Result<()> {
    let Some(question) = run.current_question() else {
        return Ok(());
    };

    writeln!(out)?;
    match (run.mode(), run.position()) {
        (RunMode::Sequential, Some(pos)) => {
            writeln!(out, "Question {}/{}", pos + 1, run.question_count())?
        }
        (RunMode::RandomDraw { max_turns: Some(max) }, _) => {
            writeln!(out, "Turn {}/{}", run.turns() + 1, max)?
        }
        _ => writeln!(out, "Turn {}", run.turns() + 1)?,
    }
    writeln!(out, "[{} / {}] {}", question.category, question.difficulty, question.text)?;
    for (i, option) in question.options.iter().enumerate() {
        writeln!(out, "  {}) {}", i + 1, option)?;
    }
    Ok(())
}
