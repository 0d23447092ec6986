//! Answer matching and scoring.

mod results;
mod session;
mod text;

pub use results::{Outcome, Score, SessionResults};
pub use session::{MatchResult, Phase, QuizSession};
pub use text::{answers_match, normalize};
