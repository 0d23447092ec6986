//! # quiz-player
//!
//! Answer matching and scoring for map quizzes, text quizzes and matching
//! quizzes, plus a terminal player built on top of it.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_player::{MatchResult, Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     let quiz = Quiz::from_json("cities.json")?;
//!     let mut session = quiz.new_session();
//!
//!     if let MatchResult::Hit { id, score } = session.try_match("krakow") {
//!         println!("solved {id}, score {score}");
//!     }
//!
//!     session.give_up();
//!     println!("{:?}", session.results());
//!     Ok(())
//! }
//! ```

mod app;
pub mod config;
pub mod data;
pub mod engine;
pub mod models;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;
use thiserror::Error;
use tokio::sync::{oneshot, Mutex};

pub use app::{App, AppState, LoadTicket};
pub use config::Config;
pub use data::{fetch_quiz, load_quiz_from_path, validate_fetched, Limits, LoadError, ValidationIssue};
pub use engine::{normalize, MatchResult, Outcome, Phase, QuizSession, Score, SessionResults};
pub use models::{AnswerEntry, FetchedQuiz, Identifier, QuizKind, QuizPayload, Reveal};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The quiz data cannot be turned into a playable session.
    #[error("malformed quiz data: {0}")]
    MalformedQuizData(String),
    /// The quiz could not be fetched.
    #[error("quiz data unavailable: {0}")]
    DataUnavailable(#[from] LoadError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to initialize logging: {0}")]
    Logging(#[from] log::SetLoggerError),
}

impl QuizError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        QuizError::MalformedQuizData(reason.into())
    }
}

/// A loaded quiz, ready to hand out sessions.
#[derive(Debug, Clone)]
pub struct Quiz {
    payload: QuizPayload,
    pristine: QuizSession,
}

impl Quiz {
    /// Check `payload` and build a quiz from it.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::MalformedQuizData` if the payload has no answers, a
    /// blank one, a map without SVG data or a matching quiz whose keys do not
    /// line up with its answers.
    pub fn from_payload(payload: QuizPayload) -> Result<Self, QuizError> {
        let pristine = QuizSession::from_payload(&payload)?;
        Ok(Self { payload, pristine })
    }

    /// Turn the outcome of a fetch into a quiz. A failed fetch never yields a
    /// quiz.
    pub fn from_fetched(fetched: Result<FetchedQuiz, LoadError>) -> Result<Self, QuizError> {
        let payload = QuizPayload::try_from(fetched?)?;
        Self::from_payload(payload)
    }

    /// Load a quiz from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use quiz_player::Quiz;
    ///
    /// let quiz = Quiz::from_json("cities.json").expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        Self::from_fetched(load_quiz_from_path(path))
    }

    /// A fresh, active session.
    pub fn new_session(&self) -> QuizSession {
        self.pristine.clone()
    }

    pub fn kind(&self) -> QuizKind {
        self.payload.kind()
    }

    pub fn payload(&self) -> &QuizPayload {
        &self.payload
    }
}

type SharedApp = Arc<Mutex<App>>;

/// Load the quiz at `path` in the background and play it in the terminal.
///
/// Quitting before the file is loaded aborts the load.
pub async fn play<P: AsRef<Path>>(path: P) -> Result<(), QuizError> {
    let path = path.as_ref().to_path_buf();
    let (app, ticket) = App::loading();
    let app: SharedApp = Arc::new(Mutex::new(app));

    let (abort_tx, abort_rx) = oneshot::channel();
    let loader_app = Arc::clone(&app);
    let load_task = tokio::spawn(async move {
        let result = fetch_quiz(&path, abort_rx).await;
        loader_app.lock().await.finish_loading(ticket, result);
    });

    let result = run_tui(&app).await;

    if abort_tx.send(()).is_ok() {
        debug!("signalled loader to stop");
    }
    let _ = load_task.await;

    result
}

async fn run_tui(app: &SharedApp) -> Result<(), QuizError> {
    let mut terminal = terminal::TerminalGuard::enter()?;

    loop {
        {
            let app = app.lock().await;
            if app.should_quit {
                break;
            }
            terminal.draw(|frame| ui::render(frame, &app))?;
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                let mut app = app.lock().await;
                handle_input(&mut app, key);
            }
        }
    }

    Ok(())
}

fn handle_input(app: &mut App, key: KeyEvent) {
    match app.state {
        AppState::Loading { .. } | AppState::Failed { .. } => handle_idle_input(app, key.code),
        AppState::Playing => handle_playing_input(app, key),
        AppState::Results => handle_results_input(app, key.code),
    }
}

fn handle_idle_input(app: &mut App, key: KeyCode) {
    if matches!(
        key,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc | KeyCode::Enter
    ) {
        app.quit();
    }
}

fn handle_playing_input(app: &mut App, key: KeyEvent) {
    // AltGr arrives as CONTROL | ALT on some platforms.
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::ALT);
    match key.code {
        KeyCode::Char('g') | KeyCode::Char('G') if ctrl => app.give_up(),
        KeyCode::Char('c') if ctrl => app.quit(),
        KeyCode::Char(c) if !ctrl => app.input_push(c),
        KeyCode::Backspace => app.input_pop(),
        KeyCode::Down => app.scroll_down(),
        KeyCode::Up => app.scroll_up(),
        KeyCode::Esc => app.quit(),
        _ => {}
    }
}

fn handle_results_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),
        _ => {}
    }
}
