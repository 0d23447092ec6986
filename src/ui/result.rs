use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::engine::{Outcome, SessionResults};

use super::entries;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let (Some(quiz), Some(session)) = (app.quiz(), app.session()) else {
        return;
    };
    let Some(results) = session.results() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], quiz.payload().title(), &results);

    let mut lines = Vec::with_capacity(session.total() + 1);
    lines.extend(entries::header_line(quiz, session));
    lines.extend(entries::entry_lines(quiz, session));
    let breakdown = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((app.scroll() as u16, 0));
    frame.render_widget(breakdown, chunks[2]);

    render_controls(frame, chunks[3]);
}

fn get_grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn outcome_text(results: &SessionResults) -> String {
    match results.outcome {
        Outcome::Completed => "All answers found".to_string(),
        Outcome::GaveUp => format!("Gave up · {} missed", results.missed.len()),
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, title: &str, results: &SessionResults) {
    let percentage = results.percentage();
    let grade_color = get_grade_color(percentage);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(Span::styled(title, Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(Span::styled(
            format!("{}  ({:.0}%)", results.score, percentage),
            Style::default().fg(grade_color).bold(),
        )),
        Line::from(Span::styled(
            outcome_text(results),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r restart  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
