mod home;
mod preview;
mod quiz;
mod results;
mod settings;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::AppState;
use crate::quiz::Screen;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.state {
        AppState::Session => match app.session().screen() {
            Screen::Home => home::render(frame, area, app),
            Screen::Quiz => quiz::render(frame, area, app),
            Screen::Results => results::render(frame, area, app),
        },
        AppState::Preview => preview::render(frame, area, app.preview()),
        AppState::Settings => settings::render(frame, area, app.settings()),
    }
}
