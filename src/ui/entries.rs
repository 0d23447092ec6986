//! Answer table shared by the play and results screens.

use ratatui::prelude::*;

use crate::engine::QuizSession;
use crate::models::{AnswerEntry, QuizKind, Reveal};
use crate::Quiz;

const HIDDEN_ANSWER: &str = "???";
const LABEL_COLUMN_MAX: usize = 24;

/// Column titles, if the quiz kind has any.
pub fn header_line(quiz: &Quiz, session: &QuizSession) -> Option<Line<'static>> {
    let (left, right) = column_titles(quiz)?;
    let width = label_width(quiz, session);
    let style = Style::default().fg(Color::Cyan).bold();

    Some(Line::from(vec![
        Span::raw("   "),
        Span::styled(format!("{:<width$}  ", left, width = width), style),
        Span::styled(right, style),
    ]))
}

fn column_titles(quiz: &Quiz) -> Option<(String, String)> {
    match quiz.kind() {
        QuizKind::Quiz => None,
        QuizKind::Map => Some(("Region".to_string(), "Name".to_string())),
        QuizKind::MatchingQuiz => match &quiz.payload().headers {
            Some([left, right]) => Some((truncate(left), right.clone())),
            None => Some(("Key".to_string(), "Answer".to_string())),
        },
    }
}

/// One line per entry, answers hidden until revealed.
pub fn entry_lines(quiz: &Quiz, session: &QuizSession) -> Vec<Line<'static>> {
    let width = label_width(quiz, session);

    session
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let (symbol, color) = match entry.revealed() {
                Some(Reveal::Correct) => ("+", Color::Green),
                Some(Reveal::Missed) => ("-", Color::Red),
                None => (" ", Color::Gray),
            };
            let answer = session
                .revealed_label(entry.id())
                .unwrap_or(HIDDEN_ANSWER)
                .to_string();

            Line::from(vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(
                    format!("{:<width$}  ", row_label(quiz.kind(), index, entry), width = width),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(answer, Style::default().fg(color)),
            ])
        })
        .collect()
}

fn row_label(kind: QuizKind, index: usize, entry: &AnswerEntry) -> String {
    match kind {
        QuizKind::Map => truncate(&entry.id().to_string()),
        QuizKind::Quiz => format!("{:2}.", index + 1),
        QuizKind::MatchingQuiz => truncate(entry.prompt().unwrap_or_default()),
    }
}

fn label_width(quiz: &Quiz, session: &QuizSession) -> usize {
    let header = column_titles(quiz).map_or(0, |(left, _)| left.chars().count());
    session
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| row_label(quiz.kind(), index, entry).chars().count())
        .fold(header, usize::max)
}

fn truncate(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > LABEL_COLUMN_MAX {
        let truncated: String = text.chars().take(LABEL_COLUMN_MAX - 3).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FetchedQuiz;

    fn matching_quiz(headers: &str) -> Quiz {
        let json_data = format!(
            r#"{{"question": "Match", "answers": ["Paris", "Rome"], "keys": ["France", "Italy"]{}}}"#,
            headers
        );
        Quiz::from_fetched(Ok(FetchedQuiz {
            id: None,
            kind: QuizKind::MatchingQuiz,
            name: "Capitals".to_string(),
            json_data,
            svg_data: None,
            created_at: None,
        }))
        .unwrap()
    }

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_answers_hidden_until_solved() {
        let quiz = matching_quiz("");
        let mut session = quiz.new_session();
        session.try_match("rome");

        let lines = entry_lines(&quiz, &session);
        assert_eq!(text(&lines[0]), "   France  ???");
        assert_eq!(text(&lines[1]), " + Italy   Rome");
    }

    #[test]
    fn test_give_up_reveals_missed() {
        let quiz = matching_quiz("");
        let mut session = quiz.new_session();
        session.give_up();

        let lines = entry_lines(&quiz, &session);
        assert_eq!(text(&lines[0]), " - France  Paris");
    }

    #[test]
    fn test_header_line_uses_quiz_headers() {
        let quiz = matching_quiz(r#", "headers": ["Country", "Capital"]"#);
        let session = quiz.new_session();
        let line = header_line(&quiz, &session).unwrap();
        assert_eq!(text(&line), "   Country  Capital");
        assert_eq!(text(&entry_lines(&quiz, &session)[1]), "   Italy    ???");

        let quiz = matching_quiz("");
        let session = quiz.new_session();
        assert_eq!(text(&header_line(&quiz, &session).unwrap()), "   Key     Answer");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short"), "short");
        let long = "x".repeat(30);
        assert_eq!(truncate(&long).chars().count(), LABEL_COLUMN_MAX);
        assert!(truncate(&long).ends_with("..."));
    }
}
