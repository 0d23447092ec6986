mod entries;
mod quiz;
mod result;
mod status;

use ratatui::{prelude::*, widgets::Block};

use crate::app::{App, AppState};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match &app.state {
        AppState::Loading { .. } => status::render_loading(frame, area),
        AppState::Playing => quiz::render(frame, area, app),
        AppState::Results => result::render(frame, area, app),
        AppState::Failed { message } => status::render_failed(frame, area, message),
    }
}
