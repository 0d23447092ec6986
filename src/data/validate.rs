//! Checks a quiz file against the rules enforced when quizzes are uploaded.

use std::fmt;

use log::warn;

use crate::engine::answers_match;
use crate::models::{parse_map_answers, parse_quiz_document, FetchedQuiz, QuizKind};

pub const DEFAULT_MAX_INPUT_LENGTH: usize = 50;
pub const DEFAULT_MAX_NAME_LENGTH: usize = 50;
pub const DEFAULT_MAX_JSON_SIZE_KB: usize = 128;

/// Upper bounds applied by [`validate_fetched`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum length of a question, answer, key or header, in characters.
    pub max_input_length: usize,
    pub max_name_length: usize,
    /// Maximum size of `jsonData`, in KiB.
    pub max_json_size_kb: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_input_length: DEFAULT_MAX_INPUT_LENGTH,
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            max_json_size_kb: DEFAULT_MAX_JSON_SIZE_KB,
        }
    }
}

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Return every upload rule `quiz` breaks. An empty list means it is valid.
pub fn validate_fetched(quiz: &FetchedQuiz, limits: &Limits) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    check_length(&mut issues, "name", &quiz.name, limits.max_name_length);

    let max_bytes = limits.max_json_size_kb * 1024;
    if quiz.json_data.len() > max_bytes {
        issues.push(ValidationIssue::new(
            "jsonData",
            format!("exceeds the limit of {} KB", limits.max_json_size_kb),
        ));
        return issues;
    }

    match quiz.kind {
        QuizKind::Map => validate_map(&mut issues, quiz, limits),
        QuizKind::Quiz | QuizKind::MatchingQuiz => validate_quiz(&mut issues, quiz, limits),
    }

    issues
}

fn validate_map(issues: &mut Vec<ValidationIssue>, quiz: &FetchedQuiz, limits: &Limits) {
    let svg = quiz.svg_data.as_deref().filter(|svg| !svg.trim().is_empty());
    if svg.is_none() {
        issues.push(ValidationIssue::new("svgData", "SVG file is required"));
    }

    let regions = match parse_map_answers(&quiz.json_data) {
        Ok(regions) => regions,
        Err(e) => {
            issues.push(ValidationIssue::new("jsonData", e.to_string()));
            return;
        }
    };

    if regions.is_empty() {
        issues.push(ValidationIssue::new("jsonData", "must contain at least one region"));
    }

    for (region, label) in &regions {
        check_length(issues, &format!("region `{}`", region), label, limits.max_input_length);

        if let Some(svg) = svg {
            if !svg_has_id(svg, region) {
                warn!("region `{}` does not appear in the SVG", region);
            }
        }
    }

    warn_duplicates(regions.iter().map(|(_, label)| label.as_str()));
}

fn validate_quiz(issues: &mut Vec<ValidationIssue>, quiz: &FetchedQuiz, limits: &Limits) {
    let document = match parse_quiz_document(&quiz.json_data) {
        Ok(document) => document,
        Err(e) => {
            issues.push(ValidationIssue::new("jsonData", e.to_string()));
            return;
        }
    };
    let max = limits.max_input_length;

    check_length(issues, "question", &document.question, max);

    if document.answers.is_empty() {
        issues.push(ValidationIssue::new("answers", "must contain at least one item"));
    }
    for (i, answer) in document.answers.iter().enumerate() {
        check_length(issues, &format!("answers[{}]", i), answer, max);
    }

    for (i, key) in document.keys.iter().flatten().enumerate() {
        check_length(issues, &format!("keys[{}]", i), key, max);
    }
    for (i, header) in document.headers.iter().flatten().enumerate() {
        check_length(issues, &format!("headers[{}]", i), header, max);
    }

    if quiz.kind == QuizKind::MatchingQuiz {
        let keys = document.keys.as_ref().map_or(0, Vec::len);
        if document.keys.is_none() || keys != document.answers.len() {
            issues.push(ValidationIssue::new(
                "keys",
                "are required and must match the number of answers for matching quizzes",
            ));
        }

        let headers = document.headers.as_ref().map_or(0, Vec::len);
        if headers != 2 {
            issues.push(ValidationIssue::new(
                "headers",
                "are required and must contain exactly two items for matching quizzes",
            ));
        }
    }

    warn_duplicates(document.answers.iter().map(String::as_str));
}

fn check_length(issues: &mut Vec<ValidationIssue>, field: &str, value: &str, max: usize) {
    let length = value.chars().count();
    if length == 0 {
        issues.push(ValidationIssue::new(field, "must not be empty"));
    } else if length > max {
        issues.push(ValidationIssue::new(
            field,
            format!("must be at most {} characters", max),
        ));
    }
}

fn svg_has_id(svg: &str, id: &str) -> bool {
    svg.contains(&format!("id=\"{}\"", id)) || svg.contains(&format!("id='{}'", id))
}

/// Duplicates are playable, each one needs its own answer.
fn warn_duplicates<'a>(answers: impl Iterator<Item = &'a str>) {
    let answers: Vec<&str> = answers.collect();
    for (i, answer) in answers.iter().enumerate() {
        if answers[..i].iter().any(|earlier| answers_match(earlier, answer)) {
            warn!("answer `{}` appears more than once", answer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz(kind: QuizKind, json_data: &str, svg_data: Option<&str>) -> FetchedQuiz {
        FetchedQuiz {
            id: None,
            kind,
            name: "Capitals".to_string(),
            json_data: json_data.to_string(),
            svg_data: svg_data.map(str::to_string),
            created_at: None,
        }
    }

    fn fields(issues: &[ValidationIssue]) -> Vec<&str> {
        issues.iter().map(|i| i.field.as_str()).collect()
    }

    #[test]
    fn test_valid_quiz() {
        let q = quiz(
            QuizKind::Quiz,
            r#"{"question": "Name a capital", "answers": ["Paris", "Rome"]}"#,
            None,
        );
        assert!(validate_fetched(&q, &Limits::default()).is_empty());
    }

    #[test]
    fn test_valid_matching_quiz() {
        let q = quiz(
            QuizKind::MatchingQuiz,
            r#"{"question": "Match", "answers": ["Paris"], "keys": ["France"], "headers": ["Country", "Capital"]}"#,
            None,
        );
        assert!(validate_fetched(&q, &Limits::default()).is_empty());
    }

    #[test]
    fn test_matching_quiz_needs_keys_and_headers() {
        let q = quiz(
            QuizKind::MatchingQuiz,
            r#"{"question": "Match", "answers": ["Paris", "Rome"], "keys": ["France"]}"#,
            None,
        );
        let issues = validate_fetched(&q, &Limits::default());
        assert_eq!(fields(&issues), vec!["keys", "headers"]);
    }

    #[test]
    fn test_length_limits() {
        let limits = Limits {
            max_input_length: 5,
            ..Limits::default()
        };
        let q = quiz(
            QuizKind::Quiz,
            r#"{"question": "", "answers": ["Paris", "Warszawa", ""]}"#,
            None,
        );
        let issues = validate_fetched(&q, &limits);
        assert_eq!(fields(&issues), vec!["question", "answers[1]", "answers[2]"]);
        assert_eq!(issues[0].message, "must not be empty");
        assert_eq!(issues[1].to_string(), "answers[1]: must be at most 5 characters");
    }

    #[test]
    fn test_length_counts_characters() {
        let limits = Limits {
            max_input_length: 6,
            ..Limits::default()
        };
        let q = quiz(QuizKind::Quiz, r#"{"question": "Gdańsk", "answers": ["Łódź"]}"#, None);
        assert!(validate_fetched(&q, &limits).is_empty());
    }

    #[test]
    fn test_no_answers() {
        let q = quiz(QuizKind::Quiz, r#"{"question": "Q", "answers": []}"#, None);
        assert_eq!(fields(&validate_fetched(&q, &Limits::default())), vec!["answers"]);
    }

    #[test]
    fn test_name_limit() {
        let mut q = quiz(QuizKind::Quiz, r#"{"question": "Q", "answers": ["a"]}"#, None);
        q.name = "x".repeat(51);
        assert_eq!(fields(&validate_fetched(&q, &Limits::default())), vec!["name"]);
    }

    #[test]
    fn test_json_size_limit() {
        let limits = Limits {
            max_json_size_kb: 1,
            ..Limits::default()
        };
        let answers: Vec<String> = (0..200).map(|i| format!("\"answer {}\"", i)).collect();
        let json = format!(r#"{{"question": "Q", "answers": [{}]}}"#, answers.join(","));
        let q = quiz(QuizKind::Quiz, &json, None);
        assert_eq!(fields(&validate_fetched(&q, &limits)), vec!["jsonData"]);
    }

    #[test]
    fn test_invalid_quiz_json() {
        let q = quiz(QuizKind::Quiz, "not json", None);
        assert_eq!(fields(&validate_fetched(&q, &Limits::default())), vec!["jsonData"]);
    }

    #[test]
    fn test_map_rules() {
        let q = quiz(
            QuizKind::Map,
            r#"{"PL-MA": "Małopolskie", "PL-PM": "Pomorskie"}"#,
            Some(r#"<svg><path id="PL-MA"/><path id="PL-PM"/></svg>"#),
        );
        assert!(validate_fetched(&q, &Limits::default()).is_empty());

        let q = quiz(QuizKind::Map, r#"{}"#, None);
        assert_eq!(
            fields(&validate_fetched(&q, &Limits::default())),
            vec!["svgData", "jsonData"]
        );
    }

    #[test]
    fn test_svg_has_id() {
        let svg = r#"<svg><path id="a"/><path id='b'/></svg>"#;
        assert!(svg_has_id(svg, "a"));
        assert!(svg_has_id(svg, "b"));
        assert!(!svg_has_id(svg, "c"));
    }
}
