use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use quiz_player::{load_quiz_from_path, validate_fetched, Config, Quiz, QuizError};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    config: Config,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a quiz in the terminal
    Play {
        /// JSON file to load the quiz from
        quiz: PathBuf,
    },
    /// Check a quiz file against the upload rules
    Validate {
        /// JSON file to check
        quiz: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    let Args { command, config } = Args::parse();

    let interactive = matches!(command, Command::Play { .. });
    if let Err(e) = config.init_logging(interactive) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let result = match command {
        Command::Play { quiz } => quiz_player::play(quiz).await.map(|()| true),
        Command::Validate { quiz } => validate(&quiz, &config),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Returns false if the file breaks any rule.
fn validate(path: &Path, config: &Config) -> Result<bool, QuizError> {
    let fetched = load_quiz_from_path(path)?;
    let issues = validate_fetched(&fetched, &config.limits());

    if !issues.is_empty() {
        eprintln!("{} is not a valid quiz:", path.display());
        for issue in &issues {
            eprintln!("  {}", issue);
        }
        return Ok(false);
    }

    let quiz = Quiz::from_fetched(Ok(fetched))?;
    println!(
        "{}: {} `{}` with {} answers",
        path.display(),
        quiz.kind().label(),
        quiz.payload().name,
        quiz.payload().answers.len()
    );
    Ok(true)
}
