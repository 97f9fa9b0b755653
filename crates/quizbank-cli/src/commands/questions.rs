//! The `quizbank questions` commands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use quizbank_core::model::Question;
use quizbank_core::validate::validate_bank;
use quizbank_store::{load_questions, save_questions};

#[derive(Subcommand)]
pub enum QuestionsCommand {
    /// List questions with their positions
    List {
        /// Only questions in this category
        #[arg(long)]
        category: Option<String>,

        /// Only questions of this difficulty
        #[arg(long)]
        difficulty: Option<String>,
    },

    /// Append a new question
    Add(QuestionFields),

    /// Replace the question at a position
    Edit {
        /// Position as shown by `questions list`
        #[arg(long)]
        position: usize,

        #[command(flatten)]
        fields: QuestionFields,
    },

    /// Delete the question at a position
    Delete {
        /// Position as shown by `questions list`
        #[arg(long)]
        position: usize,
    },

    /// Check the bank for questions that cannot be answered correctly
    Validate,
}

/// Every field of a question, as entered on the command line.
#[derive(Args)]
pub struct QuestionFields {
    #[arg(long)]
    category: String,

    #[arg(long)]
    difficulty: String,

    /// Question text
    #[arg(long)]
    text: String,

    /// Options, comma-separated (e.g. "Paris, Rome, Berlin")
    #[arg(long)]
    options: String,

    /// Text of the correct option
    #[arg(long)]
    answer: String,

    /// Shown after answering
    #[arg(long, default_value = "")]
    feedback: String,
}

impl QuestionFields {
    fn into_question(self) -> Result<Question> {
        let options = self
            .options
            .split(',')
            .map(|o| o.trim().to_string())
            .collect();
        let question = Question::build(
            self.category,
            self.difficulty,
            self.text,
            options,
            self.answer.trim(),
            self.feedback,
        )?;
        if !question.is_answerable() {
            tracing::warn!(
                "answer {:?} is not one of the options; this question can never be answered correctly",
                question.answer
            );
        }
        Ok(question)
    }
}

pub fn execute(config_path: Option<PathBuf>, command: QuestionsCommand) -> Result<()> {
    let config = super::config(config_path)?;
    let path = config.questions_path;
    let mut bank = load_questions(&path)?;

    match command {
        QuestionsCommand::List {
            category,
            difficulty,
        } => {
            let matches = bank.filter_indexed(category.as_deref(), difficulty.as_deref());
            if matches.is_empty() {
                println!("No questions found.");
                return Ok(());
            }
            for (index, q) in &matches {
                println!("{}. [{} / {}] {}", index + 1, q.category, q.difficulty, q.text);
                println!("   options: {}", q.options.join(" | "));
                println!("   answer: {}", q.answer);
            }
            println!("\n{} of {} question(s) shown.", matches.len(), bank.len());
        }
        QuestionsCommand::Add(fields) => {
            let index = bank.add(fields.into_question()?);
            save_questions(&path, &bank)?;
            println!("Question added at position {}.", index + 1);
        }
        QuestionsCommand::Edit { position, fields } => {
            let index = position
                .checked_sub(1)
                .ok_or_else(|| anyhow::anyhow!("positions start at 1"))?;
            bank.edit(index, fields.into_question()?)
                .with_context(|| format!("cannot edit question {position}"))?;
            save_questions(&path, &bank)?;
            println!("Question {position} updated.");
        }
        QuestionsCommand::Delete { position } => {
            match position.checked_sub(1).and_then(|i| bank.delete(i)) {
                Some(removed) => {
                    save_questions(&path, &bank)?;
                    println!("Deleted question {position}: {}", removed.text);
                }
                None => println!("No question at position {position}; nothing deleted."),
            }
        }
        QuestionsCommand::Validate => {
            println!("Question bank: {} question(s)", bank.len());
            let warnings = validate_bank(&bank);
            for w in &warnings {
                println!("  [{}] WARNING: {}", w.index + 1, w.message);
            }
            if warnings.is_empty() {
                println!("All questions valid.");
            } else {
                println!("\n{} warning(s) found.", warnings.len());
            }
        }
    }

    Ok(())
}
