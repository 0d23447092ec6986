//! Screens shown while there is no session to play.

use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

const TITLE: &str = "QUIZ";

pub fn render_loading(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(TITLE, Style::default().fg(Color::Cyan).bold())),
        Line::from(""),
        Line::from(Span::styled(
            "Loading quiz...",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
    ];

    render_centered(frame, area, content);
}

pub fn render_failed(frame: &mut Frame, area: Rect, message: &str) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(TITLE, Style::default().fg(Color::Cyan).bold())),
        Line::from(""),
        Line::from(Span::styled(
            message,
            Style::default().fg(Color::Red).bold(),
        )),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "Press [Q] to exit",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    render_centered(frame, area, content);
}

fn render_centered(frame: &mut Frame, area: Rect, content: Vec<Line>) {
    let height = content.len() as u16;
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .split(area);

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, chunks[1]);
}
