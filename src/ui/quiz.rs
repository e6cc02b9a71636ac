use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{Question, QuestionKind};
use crate::quiz::{Progress, QuizSession};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let Some(question) = session.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    let progress = session.progress();
    render_progress_header(frame, chunks[0], progress);
    render_progress_bar(frame, chunks[1], progress);
    render_type_label(frame, chunks[3], question.kind);
    render_question_text(frame, chunks[4], &question.question);
    render_options(frame, chunks[5], session, question);
    render_controls(frame, chunks[6], session);
}

fn render_progress_header(frame: &mut Frame, area: Rect, progress: Progress) {
    let halves = Layout::horizontal([Constraint::Fill(1), Constraint::Length(5)]).split(area);

    let label = Paragraph::new(format!(
        "Question {} of {}",
        progress.current, progress.total
    ))
    .fg(Color::DarkGray);
    let percent = Paragraph::new(format!("{}%", progress.percent))
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);

    frame.render_widget(label, halves[0]);
    frame.render_widget(percent, halves[1]);
}

fn render_progress_bar(frame: &mut Frame, area: Rect, progress: Progress) {
    let widget = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
        .label("")
        .ratio(progress.ratio().clamp(0.0, 1.0));
    frame.render_widget(widget, area);
}

fn render_type_label(frame: &mut Frame, area: Rect, kind: QuestionKind) {
    let widget = Paragraph::new(kind.label()).fg(Color::Magenta);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn marker(kind: QuestionKind, selected: bool) -> &'static str {
    match (kind.is_multi_select(), selected) {
        (true, true) => "[x]",
        (true, false) => "[ ]",
        (false, true) => "(•)",
        (false, false) => "( )",
    }
}

fn render_options(frame: &mut Frame, area: Rect, session: &QuizSession, question: &Question) {
    let mut lines: Vec<Line> = Vec::with_capacity(question.choices.len() * 2);

    for (index, choice) in question.choices.iter().enumerate() {
        let is_highlighted = index == session.highlighted();
        let is_selected = session.is_selected(&question.id, &choice.key);

        let style = match (is_highlighted, is_selected) {
            (true, _) => Style::default().fg(Color::Cyan).bold(),
            (false, true) => Style::default().fg(Color::Green),
            (false, false) => Style::default().fg(Color::Gray),
        };
        let cursor = if is_highlighted { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", cursor), style),
            Span::styled(format!("{} ", marker(question.kind, is_selected)), style),
            Span::styled(format!("{}. ", choice.key), style),
            Span::styled(choice.text.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Color::DarkGray)
            .padding(Padding::vertical(1)),
    );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let previous = if session.is_first_question() {
        Span::styled("← previous", Style::default().fg(Color::DarkGray).dim())
    } else {
        Span::styled("← previous", Style::default().fg(Color::Gray))
    };
    let next = if session.is_last_question() {
        Span::styled("finish →", Style::default().fg(Color::Green).bold())
    } else {
        Span::styled("next →", Style::default().fg(Color::DarkGray))
    };

    let widget = Paragraph::new(Line::from(vec![
        previous,
        "  ·  j/k navigate  ·  space select  ·  ".fg(Color::DarkGray),
        next,
        "  ·  q quit".fg(Color::DarkGray),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(widget, area);
}
