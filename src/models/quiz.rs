//! Quiz payloads as handed over by the data-loading side.
//!
//! A quiz file is a [`FetchedQuiz`]: an envelope whose `jsonData` field holds
//! a second JSON document describing the answers. [`QuizPayload`] is the
//! parsed, shape-checked form the engine builds sessions from.

use serde::Deserialize;
use serde_json::Value;

use crate::QuizError;

/// Kind of quiz, as stored in the `type` field of a quiz file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuizKind {
    Map,
    Quiz,
    MatchingQuiz,
}

impl QuizKind {
    pub fn label(self) -> &'static str {
        match self {
            QuizKind::Map => "map",
            QuizKind::Quiz => "quiz",
            QuizKind::MatchingQuiz => "matching quiz",
        }
    }
}

/// Creation time, either epoch milliseconds or a date string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CreatedAt {
    Millis(i64),
    Text(String),
}

/// Raw quiz record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchedQuiz {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: QuizKind,
    pub name: String,
    pub json_data: String,
    #[serde(default)]
    pub svg_data: Option<String>,
    #[serde(default)]
    pub created_at: Option<CreatedAt>,
}

/// `jsonData` of a text or matching quiz.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizDocument {
    pub question: String,
    pub answers: Vec<String>,
    #[serde(default)]
    pub keys: Option<Vec<String>>,
    #[serde(default)]
    pub headers: Option<Vec<String>>,
}

/// Expected answers in the order they were loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpectedAnswers {
    /// Region id to label, in document order.
    Map(Vec<(String, String)>),
    List(Vec<String>),
    Matching {
        keys: Vec<String>,
        answers: Vec<String>,
    },
}

impl ExpectedAnswers {
    pub fn len(&self) -> usize {
        match self {
            ExpectedAnswers::Map(regions) => regions.len(),
            ExpectedAnswers::List(answers) => answers.len(),
            ExpectedAnswers::Matching { answers, .. } => answers.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone)]
pub struct QuizPayload {
    /// Record id, or the file stem when loaded from a file without one.
    pub id: Option<String>,
    pub name: String,
    pub question: Option<String>,
    pub headers: Option<[String; 2]>,
    pub svg_data: Option<String>,
    pub created_at: Option<CreatedAt>,
    pub answers: ExpectedAnswers,
}

impl QuizPayload {
    pub fn kind(&self) -> QuizKind {
        match self.answers {
            ExpectedAnswers::Map(_) => QuizKind::Map,
            ExpectedAnswers::List(_) => QuizKind::Quiz,
            ExpectedAnswers::Matching { .. } => QuizKind::MatchingQuiz,
        }
    }

    /// Heading shown to the player: the question if there is one, else the name.
    pub fn title(&self) -> &str {
        self.question.as_deref().unwrap_or(&self.name)
    }
}

impl TryFrom<FetchedQuiz> for QuizPayload {
    type Error = QuizError;

    fn try_from(fetched: FetchedQuiz) -> Result<Self, Self::Error> {
        let FetchedQuiz {
            id,
            kind,
            name,
            json_data,
            svg_data,
            created_at,
        } = fetched;

        let mut payload = QuizPayload {
            id,
            name,
            question: None,
            headers: None,
            svg_data: None,
            created_at,
            answers: ExpectedAnswers::List(Vec::new()),
        };

        match kind {
            QuizKind::Map => {
                let svg = svg_data
                    .filter(|svg| !svg.trim().is_empty())
                    .ok_or_else(|| QuizError::malformed("SVG data is missing"))?;
                payload.answers = ExpectedAnswers::Map(parse_map_answers(&json_data)?);
                payload.svg_data = Some(svg);
            }
            QuizKind::Quiz => {
                let document = parse_quiz_document(&json_data)?;
                payload.question = Some(document.question);
                payload.answers = ExpectedAnswers::List(document.answers);
            }
            QuizKind::MatchingQuiz => {
                let document = parse_quiz_document(&json_data)?;
                let keys = document.keys.ok_or_else(|| {
                    QuizError::malformed("matching quiz is missing its keys")
                })?;
                if keys.len() != document.answers.len() {
                    return Err(QuizError::malformed(format!(
                        "matching quiz has {} keys for {} answers",
                        keys.len(),
                        document.answers.len()
                    )));
                }
                payload.headers = document.headers.map(parse_headers).transpose()?;
                payload.question = Some(document.question);
                payload.answers = ExpectedAnswers::Matching {
                    keys,
                    answers: document.answers,
                };
            }
        }

        Ok(payload)
    }
}

pub(crate) fn parse_map_answers(json_data: &str) -> Result<Vec<(String, String)>, QuizError> {
    let regions: serde_json::Map<String, Value> = serde_json::from_str(json_data)
        .map_err(|e| QuizError::malformed(format!("map data is not a JSON object: {}", e)))?;

    regions
        .into_iter()
        .map(|(region, label)| match label {
            Value::String(label) => Ok((region, label)),
            other => Err(QuizError::malformed(format!(
                "label for region `{}` must be a string, found {}",
                region, other
            ))),
        })
        .collect()
}

pub(crate) fn parse_quiz_document(json_data: &str) -> Result<QuizDocument, QuizError> {
    serde_json::from_str(json_data)
        .map_err(|e| QuizError::malformed(format!("quiz data is invalid: {}", e)))
}

fn parse_headers(headers: Vec<String>) -> Result<[String; 2], QuizError> {
    let count = headers.len();
    <[String; 2]>::try_from(headers).map_err(|_| {
        QuizError::malformed(format!("matching quiz needs exactly 2 headers, found {}", count))
    })
}
