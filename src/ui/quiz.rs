use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::engine::QuizSession;
use crate::models::QuizKind;
use crate::Quiz;

use super::entries;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let (Some(quiz), Some(session)) = (app.quiz(), app.session()) else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_title(frame, chunks[0], quiz, session);
    render_input(frame, chunks[1], app.input());
    render_status(frame, chunks[2], app, quiz, session);
    render_entries(frame, chunks[3], quiz, session, app.scroll());
    render_controls(frame, chunks[4]);
}

fn render_title(frame: &mut Frame, area: Rect, quiz: &Quiz, session: &QuizSession) {
    let chunks = Layout::horizontal([Constraint::Fill(1), Constraint::Length(12)]).split(area);

    let title = Paragraph::new(quiz.payload().title())
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(title, chunks[0]);

    let progress = Paragraph::new(session.score().to_string())
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(progress, chunks[1]);
}

fn render_input(frame: &mut Frame, area: Rect, input: &str) {
    let line = Line::from(vec![
        Span::styled(input, Style::default().fg(Color::Yellow)),
        Span::styled("_", Style::default().fg(Color::DarkGray)),
    ]);

    let widget = Paragraph::new(line).block(
        Block::default()
            .title(" Answer ")
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App, quiz: &Quiz, session: &QuizSession) {
    let hit = app
        .last_hit()
        .and_then(|id| session.revealed_label(id).map(|label| (id, label)));

    let line = match hit {
        Some((id, label)) if quiz.kind() == QuizKind::Map => Line::from(vec![
            Span::styled(format!("+ {}", label), Style::default().fg(Color::Green).bold()),
            Span::styled(format!("  ({})", id), Style::default().fg(Color::DarkGray)),
        ]),
        Some((_, label)) => Line::from(Span::styled(
            format!("+ {}", label),
            Style::default().fg(Color::Green).bold(),
        )),
        None => Line::from(Span::styled(
            prompt_hint(quiz.kind()),
            Style::default().fg(Color::DarkGray),
        )),
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn prompt_hint(kind: QuizKind) -> &'static str {
    match kind {
        QuizKind::Map => "Name the regions of the map",
        QuizKind::Quiz => "Type every answer you can think of",
        QuizKind::MatchingQuiz => "Type the answer for each key",
    }
}

fn render_entries(frame: &mut Frame, area: Rect, quiz: &Quiz, session: &QuizSession, scroll: usize) {
    let mut lines = Vec::with_capacity(session.total() + 1);
    lines.extend(entries::header_line(quiz, session));
    lines.extend(entries::entry_lines(quiz, session));

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("type to answer  ·  ↑/↓ scroll  ·  ctrl+g give up  ·  esc quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
