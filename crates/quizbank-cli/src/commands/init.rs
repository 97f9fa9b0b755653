//! The `quizbank init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    let files = [
        ("quizbank.toml", SAMPLE_CONFIG),
        ("questions.toml", SAMPLE_QUESTIONS),
        ("users.toml", EMPTY_USERS),
    ];

    for (name, content) in files {
        if Path::new(name).exists() {
            println!("{name} already exists, skipping.");
        } else {
            std::fs::write(name, content)?;
            println!("Created {name}");
        }
    }

    println!("\nNext steps:");
    println!("  1. Run: quizbank questions validate");
    println!("  2. Run: quizbank play --user <name>");
    println!("  3. Run: quizbank leaderboard");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizbank configuration

questions_path = "questions.toml"
users_path = "users.toml"

# "sequential" plays every question once in order; "random" draws one
# question per turn.
default_mode = "sequential"

# Number of turns in random mode. Leave unset to play until you quit.
# random_turns = 10
"#;

const SAMPLE_QUESTIONS: &str = r#"[[question]]
category = "Geography"
difficulty = "easy"
text = "What is the capital of France?"
options = ["Paris", "Rome", "Berlin"]
answer = "Paris"
feedback = "Paris has been the capital of France for most of the last millennium."

[[question]]
category = "Science"
difficulty = "medium"
text = "What is the chemical symbol for gold?"
options = ["Ag", "Au", "Gd", "Go"]
answer = "Au"
feedback = "From the Latin word aurum."

[[question]]
category = "History"
difficulty = "medium"
text = "In which year did the first crewed moon landing take place?"
options = ["1965", "1969", "1972"]
answer = "1969"
feedback = "Apollo 11 landed on 20 July 1969."
"#;

const EMPTY_USERS: &str = "user = []\n";
