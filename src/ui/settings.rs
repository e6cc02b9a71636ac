use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph},
};

use crate::settings::{SettingsEditor, SettingsFocus};

pub fn render(frame: &mut Frame, area: Rect, editor: &SettingsEditor) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_prompts(frame, chunks[0], editor);
    render_input(
        frame,
        chunks[1],
        " Add new question ",
        editor.draft(),
        editor.focus() == SettingsFocus::Draft,
    );
    render_input(
        frame,
        chunks[2],
        " Quiz Timer (seconds) ",
        editor.timer_input(),
        editor.focus() == SettingsFocus::Timer,
    );

    if let Some(err) = editor.last_error() {
        let widget = Paragraph::new(err.to_string()).fg(Color::Red);
        frame.render_widget(widget, chunks[3]);
    }

    render_controls(frame, chunks[4], editor.focus());
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn render_prompts(frame: &mut Frame, area: Rect, editor: &SettingsEditor) {
    let focused = editor.focus() == SettingsFocus::List;
    let items: Vec<ListItem> = editor
        .prompts()
        .iter()
        .enumerate()
        .map(|(index, prompt)| ListItem::new(format!("{:2}. {}", index + 1, prompt)))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focus_style(focused))
                .title(format!(" Quiz Items ({}) ", editor.prompts().len()))
                .title_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        )
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(Color::Yellow).bold())
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if focused && !editor.prompts().is_empty() {
        state.select(Some(editor.selected()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_input(frame: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let text = if focused {
        format!("{}_", value)
    } else {
        value.to_string()
    };

    let widget = Paragraph::new(text).fg(Color::White).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(focus_style(focused))
            .title(title.to_string())
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, focus: SettingsFocus) {
    let hint = match focus {
        SettingsFocus::List => "j/k select  ·  d delete  ·  tab next field  ·  esc back",
        SettingsFocus::Draft => "type question  ·  enter add  ·  tab next field  ·  esc back",
        SettingsFocus::Timer => "type seconds  ·  enter apply  ·  tab next field  ·  esc back",
    };
    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
