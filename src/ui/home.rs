use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let total = session.total_questions();
    let high_score = session.high_score();

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "QUIZ APP",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Challenge yourself with {} engaging questions", total),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    if high_score > 0 {
        content.push(Line::from(vec![
            "Best Score  ".fg(Color::DarkGray),
            Span::styled(
                format!("{}/{}", high_score, total),
                Style::default().fg(Color::Yellow).bold(),
            ),
        ]));
        content.push(Line::from(""));
    }

    content.extend([
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("to start".fg(Color::DarkGray)),
    ]);

    let height = content.len() as u16 + 2;
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);

    render_controls(frame, chunks[3]);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("enter start  ·  p timer preview  ·  s settings  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
