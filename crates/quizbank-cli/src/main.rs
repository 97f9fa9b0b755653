//! quizbank CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

use commands::leaderboard::OutputFormat;
use commands::questions::QuestionsCommand;
use commands::users::UsersCommand;

#[derive(Parser)]
#[command(name = "quizbank", version, about = "Multiple-choice quiz engine")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a quiz
    Play {
        /// Player name (created on first play)
        #[arg(long)]
        user: String,

        /// Question selection: sequential or random
        #[arg(long)]
        mode: Option<String>,

        /// Number of turns for random mode (default: until you quit)
        #[arg(long)]
        turns: Option<u32>,

        /// Only questions in this category
        #[arg(long)]
        category: Option<String>,

        /// Only questions of this difficulty
        #[arg(long)]
        difficulty: Option<String>,
    },

    /// Manage the question bank
    #[command(subcommand)]
    Questions(QuestionsCommand),

    /// Manage users
    #[command(subcommand)]
    Users(UsersCommand),

    /// Show best scores, highest first
    Leaderboard {
        /// Output format: text, json, markdown
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Show only the top N players
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Pair two players into a multiplayer session
    Pair {
        /// First player
        player1: String,

        /// Second player
        player2: String,
    },

    /// Show a player's current multiplayer session
    Session {
        /// Player name
        user: String,
    },

    /// Create starter config, sample questions and an empty user file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizbank=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config;

    let result = match cli.command {
        Commands::Play {
            user,
            mode,
            turns,
            category,
            difficulty,
        } => commands::play::execute(config, user, mode, turns, category, difficulty),
        Commands::Questions(cmd) => commands::questions::execute(config, cmd),
        Commands::Users(cmd) => commands::users::execute(config, cmd),
        Commands::Leaderboard { format, limit } => {
            commands::leaderboard::execute(config, format, limit)
        }
        Commands::Pair { player1, player2 } => commands::pair::execute(config, player1, player2),
        Commands::Session { user } => commands::pair::show_session(config, user),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
