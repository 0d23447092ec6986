use std::fmt;

use crate::models::Identifier;

/// Number of solved entries out of the fixed total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub solved: usize,
    pub total: usize,
}

impl Score {
    pub fn new(solved: usize, total: usize) -> Self {
        Self { solved, total }
    }

    pub fn percentage(&self) -> f64 {
        if self.total > 0 {
            (self.solved as f64 / self.total as f64) * 100.0
        } else {
            0.0
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.solved, self.total)
    }
}

/// Why a session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every expected answer was typed.
    Completed,
    /// The player gave up.
    GaveUp,
}

/// Final breakdown of a finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionResults {
    pub score: Score,
    pub outcome: Outcome,
    /// Solved identifiers, in entry order.
    pub correct: Vec<Identifier>,
    /// Identifiers revealed by giving up, in entry order.
    pub missed: Vec<Identifier>,
}

impl SessionResults {
    pub fn percentage(&self) -> f64 {
        self.score.percentage()
    }
}
