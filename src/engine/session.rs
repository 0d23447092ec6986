//! Quiz session state machine.
//!
//! A session starts `Active` and ends `Finished`, either because every entry
//! was solved or because the player gave up. Nothing leads out of `Finished`;
//! playing again means building a new session.

use log::{debug, info, trace};

use crate::models::{AnswerEntry, ExpectedAnswers, Identifier, QuizPayload, Reveal};
use crate::QuizError;

use super::results::{Outcome, Score, SessionResults};
use super::text::normalize;

/// Current phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Active,
    Finished,
}

/// Outcome of a single match attempt. A miss is a normal result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    Hit { id: Identifier, score: Score },
    NoMatch,
}

impl MatchResult {
    pub fn is_hit(&self) -> bool {
        matches!(self, MatchResult::Hit { .. })
    }
}

/// Progress of one player through one quiz.
#[derive(Debug, Clone)]
pub struct QuizSession {
    entries: Vec<AnswerEntry>,
    solved_count: usize,
    phase: Phase,
    outcome: Option<Outcome>,
}

impl QuizSession {
    /// Build a session from entries in the order they should be matched.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::MalformedQuizData` if there are no entries or an
    /// expected answer is blank.
    pub fn from_entries(entries: Vec<AnswerEntry>) -> Result<Self, QuizError> {
        if entries.is_empty() {
            return Err(QuizError::malformed("quiz has no answers"));
        }

        if let Some(blank) = entries.iter().find(|e| e.expected().trim().is_empty()) {
            return Err(QuizError::malformed(format!(
                "answer {} is empty",
                blank.id()
            )));
        }

        debug!("created session with {} entries", entries.len());

        Ok(Self {
            entries,
            solved_count: 0,
            phase: Phase::Active,
            outcome: None,
        })
    }

    /// Build a session from `(identifier, expected answer)` pairs.
    pub fn new<I, S>(answers: I) -> Result<Self, QuizError>
    where
        I: IntoIterator<Item = (Identifier, S)>,
        S: Into<String>,
    {
        let entries = answers
            .into_iter()
            .map(|(id, expected)| AnswerEntry::new(id, expected))
            .collect();
        Self::from_entries(entries)
    }

    /// Build a session from a payload, rejecting answer sets that do not fit
    /// the payload's kind.
    pub fn from_payload(payload: &QuizPayload) -> Result<Self, QuizError> {
        let entries = match &payload.answers {
            ExpectedAnswers::Map(_)
                if payload
                    .svg_data
                    .as_deref()
                    .is_none_or(|svg| svg.trim().is_empty()) =>
            {
                return Err(QuizError::malformed("SVG data is missing"));
            }
            ExpectedAnswers::Matching { keys, answers } if keys.len() != answers.len() => {
                return Err(QuizError::malformed(format!(
                    "matching quiz has {} keys for {} answers",
                    keys.len(),
                    answers.len()
                )));
            }
            ExpectedAnswers::Map(regions) => regions
                .iter()
                .map(|(region, label)| AnswerEntry::new(Identifier::Region(region.clone()), label))
                .collect(),
            ExpectedAnswers::List(answers) => answers
                .iter()
                .enumerate()
                .map(|(index, answer)| AnswerEntry::new(Identifier::Slot(index), answer))
                .collect(),
            ExpectedAnswers::Matching { keys, answers } => answers
                .iter()
                .zip(keys.iter())
                .enumerate()
                .map(|(index, (answer, key))| {
                    AnswerEntry::new(Identifier::Slot(index), answer).with_prompt(key)
                })
                .collect(),
        };
        Self::from_entries(entries)
    }

    /// Try to solve the first unsolved entry whose answer matches `input`.
    ///
    /// Only one entry is solved per call, even when several share the same
    /// answer. A finished session never changes.
    pub fn try_match(&mut self, input: &str) -> MatchResult {
        if self.phase == Phase::Finished {
            return MatchResult::NoMatch;
        }

        let candidate = normalize(input);
        trace!("matching input {:?}", candidate);

        let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| !e.is_solved() && normalize(e.expected()) == candidate)
        else {
            return MatchResult::NoMatch;
        };

        entry.mark_correct();
        let id = entry.id().clone();
        self.solved_count += 1;

        if self.solved_count == self.total() {
            self.finish(Outcome::Completed);
        }

        let score = self.score();
        debug!("solved {} ({})", id, score);

        MatchResult::Hit { id, score }
    }

    /// End the session, revealing every unsolved entry as missed.
    ///
    /// Calling this on a finished session changes nothing.
    pub fn give_up(&mut self) -> Score {
        if self.phase == Phase::Finished {
            return self.score();
        }

        let mut missed = 0;
        for entry in &mut self.entries {
            if entry.mark_missed() {
                missed += 1;
            }
        }
        self.finish(Outcome::GaveUp);

        info!("gave up with {} ({} missed)", self.score(), missed);
        self.score()
    }

    fn finish(&mut self, outcome: Outcome) {
        self.phase = Phase::Finished;
        self.outcome = Some(outcome);
    }

    pub fn score(&self) -> Score {
        Score::new(self.solved_count, self.total())
    }

    pub fn solved_count(&self) -> usize {
        self.solved_count
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn entries(&self) -> &[AnswerEntry] {
        &self.entries
    }

    pub fn entry(&self, id: &Identifier) -> Option<&AnswerEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn reveal_of(&self, id: &Identifier) -> Option<Reveal> {
        self.entry(id).and_then(AnswerEntry::revealed)
    }

    /// Expected answer for `id`, but only once the player has earned it or
    /// the session is over.
    pub fn revealed_label(&self, id: &Identifier) -> Option<&str> {
        self.entry(id)
            .filter(|e| e.is_solved() || self.is_finished())
            .map(AnswerEntry::expected)
    }

    /// Final breakdown, available once the session is finished.
    pub fn results(&self) -> Option<SessionResults> {
        let outcome = self.outcome?;
        let ids_with = |reveal: Reveal| -> Vec<Identifier> {
            self.entries
                .iter()
                .filter(|e| e.revealed() == Some(reveal))
                .map(|e| e.id().clone())
                .collect()
        };

        Some(SessionResults {
            score: self.score(),
            outcome,
            correct: ids_with(Reveal::Correct),
            missed: ids_with(Reveal::Missed),
        })
    }
}
