use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::preview::PreviewState;

pub fn render(frame: &mut Frame, area: Rect, preview: Option<&PreviewState>) {
    let Some(preview) = preview else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(9),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    let seconds = preview.seconds_remaining();
    let time_color = match seconds {
        0..=10 => Color::Red,
        11..=30 => Color::Yellow,
        _ => Color::Green,
    };

    let status = match preview.submission() {
        Some(submission) => Line::from(Span::styled(
            submission.reason.message(),
            Style::default().fg(Color::Cyan).bold(),
        )),
        None => Line::from("running".fg(Color::DarkGray)),
    };

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "TIMER PREVIEW",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Time Left: {}s", seconds),
            Style::default().fg(time_color).bold(),
        )),
        Line::from(Span::styled(
            format!("Questions: {}", preview.question_count()),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        status,
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);

    let controls = Paragraph::new("enter submit  ·  esc back")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[3]);
}
