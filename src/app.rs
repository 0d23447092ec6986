use log::{info, warn};
use uuid::Uuid;

use crate::data::LoadError;
use crate::engine::{MatchResult, QuizSession};
use crate::models::{FetchedQuiz, Identifier};
use crate::Quiz;

/// Tags a pending load so a late result cannot land on the wrong quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(Uuid);

impl LoadTicket {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LoadTicket {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    /// Waiting for the quiz file.
    Loading { ticket: LoadTicket },
    /// Typing answers.
    Playing,
    /// Session finished, showing the breakdown.
    Results,
    /// The quiz could not be turned into a session.
    Failed { message: String },
}

struct Game {
    quiz: Quiz,
    session: QuizSession,
}

pub struct App {
    pub state: AppState,
    game: Option<Game>,
    input: String,
    last_hit: Option<Identifier>,
    scroll: usize,
    pub should_quit: bool,
}

impl App {
    /// Create an app waiting on the load identified by the returned ticket.
    pub fn loading() -> (Self, LoadTicket) {
        let ticket = LoadTicket::new();
        let app = Self {
            state: AppState::Loading { ticket },
            game: None,
            input: String::new(),
            last_hit: None,
            scroll: 0,
            should_quit: false,
        };
        (app, ticket)
    }

    /// Create an app that starts playing `quiz` right away.
    pub fn with_quiz(quiz: Quiz) -> Self {
        let (mut app, _) = Self::loading();
        app.start(quiz);
        app
    }

    /// Apply the result of a load. Returns false if the result was stale.
    pub fn finish_loading(
        &mut self,
        ticket: LoadTicket,
        result: Result<FetchedQuiz, LoadError>,
    ) -> bool {
        if self.should_quit || self.state != (AppState::Loading { ticket }) {
            warn!("discarding result of a load that is no longer pending");
            return false;
        }

        match Quiz::from_fetched(result) {
            Ok(quiz) => self.start(quiz),
            Err(e) => {
                warn!("cannot play quiz: {}", e);
                self.state = AppState::Failed {
                    message: e.to_string(),
                };
            }
        }
        true
    }

    fn start(&mut self, quiz: Quiz) {
        info!("playing {} `{}`", quiz.kind().label(), quiz.payload().name);
        let session = quiz.new_session();
        self.game = Some(Game { quiz, session });
        self.reset_round();
    }

    fn reset_round(&mut self) {
        self.state = AppState::Playing;
        self.input.clear();
        self.last_hit = None;
        self.scroll = 0;
    }

    pub fn quiz(&self) -> Option<&Quiz> {
        self.game.as_ref().map(|g| &g.quiz)
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.game.as_ref().map(|g| &g.session)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn last_hit(&self) -> Option<&Identifier> {
        self.last_hit.as_ref()
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn input_push(&mut self, c: char) {
        if self.state == AppState::Playing {
            self.input.push(c);
            self.submit_input();
        }
    }

    pub fn input_pop(&mut self) {
        if self.state == AppState::Playing {
            self.input.pop();
            self.submit_input();
        }
    }

    /// Match the whole input line; a hit clears it.
    fn submit_input(&mut self) {
        let Some(game) = self.game.as_mut() else {
            return;
        };

        if let MatchResult::Hit { id, .. } = game.session.try_match(&self.input) {
            self.input.clear();
            self.last_hit = Some(id);
        }

        if game.session.is_finished() {
            self.enter_results();
        }
    }

    pub fn give_up(&mut self) {
        if self.state != AppState::Playing {
            return;
        }
        if let Some(game) = self.game.as_mut() {
            game.session.give_up();
            self.enter_results();
        }
    }

    fn enter_results(&mut self) {
        self.state = AppState::Results;
        self.input.clear();
        self.scroll = 0;
    }

    /// Start over with a fresh session of the same quiz.
    pub fn restart(&mut self) {
        if self.state != AppState::Results {
            return;
        }
        if let Some(game) = self.game.as_mut() {
            game.session = game.quiz.new_session();
            self.reset_round();
        }
    }

    pub fn scroll_down(&mut self) {
        let max_scroll = self
            .session()
            .map_or(0, |s| s.total().saturating_sub(1));
        self.scroll = (self.scroll + 1).min(max_scroll);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
