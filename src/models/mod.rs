mod answer;
mod quiz;

pub use answer::{AnswerEntry, Identifier, Reveal};
pub use quiz::{CreatedAt, ExpectedAnswers, FetchedQuiz, QuizDocument, QuizKind, QuizPayload};
pub(crate) use quiz::{parse_map_answers, parse_quiz_document};
