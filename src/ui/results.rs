use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::quiz::{PerformanceBand, ResultSummary, is_correct};

const QUESTION_PREVIEW_LENGTH: usize = 55;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let summary = app.session().summary();

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(11),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[1], &summary);
    render_question_breakdown(frame, chunks[2], app);
    render_controls(frame, chunks[3]);
}

fn band_color(band: PerformanceBand) -> Color {
    match band {
        PerformanceBand::Perfect | PerformanceBand::Excellent => Color::Green,
        PerformanceBand::Good => Color::Cyan,
        PerformanceBand::Fair => Color::Yellow,
        PerformanceBand::KeepTrying => Color::Red,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, summary: &ResultSummary) {
    let band = summary.band();
    let color = band_color(band);
    let icon = if summary.is_new_high { "🏆" } else { "⭐" };
    let banner = if summary.is_new_high {
        Line::from(Span::styled(
            "New High Score!",
            Style::default().fg(Color::Yellow).bold(),
        ))
    } else {
        Line::from("")
    };

    let content = vec![
        Line::from(icon),
        Line::from(Span::styled(
            "QUIZ COMPLETE",
            Style::default().fg(Color::Cyan).bold(),
        )),
        banner,
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "{} / {}  ({}%)",
                summary.score, summary.total, summary.percentage
            ),
            Style::default().fg(color).bold(),
        )),
        Line::from(Span::styled(
            format!("Highest Score  {}/{}", summary.high_score, summary.total),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(band.message().fg(color)),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_question_breakdown(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let lines: Vec<Line> = session
        .questions()
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let (symbol, color) = if is_correct(question, session.answers().get(&question.id)) {
                ("+", Color::Green)
            } else {
                ("-", Color::Red)
            };

            let preview = truncate_question(&question.question);

            Line::from(vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(
                    format!("{:2}. ", index + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(preview, Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((app.result_scroll() as u16, 0));
    frame.render_widget(widget, area);
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r try again  ·  h home  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
