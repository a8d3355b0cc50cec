use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::leaderboard::LEADERBOARD_CAPACITY;
use crate::quiz::{Outcome, QuizSession};
use crate::theme::Palette;

const QUESTION_PREVIEW_LENGTH: usize = 55;

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let session = app.session();
    let score = session.score();
    let total = session.total_questions();
    let percentage = calculate_percentage(score, total);

    let chunks = Layout::vertical([
        Constraint::Length(6),
        Constraint::Min(4),
        Constraint::Length(3),
        Constraint::Length(LEADERBOARD_CAPACITY as u16 + 2),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[0], score, total, percentage, palette);
    render_question_breakdown(frame, chunks[1], session, app.result_scroll(), palette);
    render_name_form(frame, chunks[2], app, palette);
    super::leaderboard::render(
        frame,
        chunks[3],
        app.leaderboard().entries(),
        total,
        app.saved_rank(),
        palette,
    );
    render_controls(frame, chunks[4], app.is_name_form_open(), palette);
}

fn calculate_percentage(score: usize, total: usize) -> f64 {
    if total > 0 {
        (score as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

fn render_score_summary(
    frame: &mut Frame,
    area: Rect,
    score: usize,
    total: usize,
    percentage: f64,
    palette: &Palette,
) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(palette.accent).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} / {}  ({:.0}%)", score, total, percentage),
            Style::default().fg(palette.grade(percentage)).bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(palette.muted),
    );
    frame.render_widget(widget, area);
}

fn render_question_breakdown(
    frame: &mut Frame,
    area: Rect,
    session: &QuizSession,
    scroll: usize,
    palette: &Palette,
) {
    let lines: Vec<Line> = session
        .outcomes()
        .iter()
        .zip(session.questions().iter())
        .enumerate()
        .map(|(index, (outcome, question))| {
            let (symbol, color) = match outcome {
                Some(Outcome::Answered(option)) if question.is_correct(*option) => {
                    ("+", palette.correct)
                }
                Some(Outcome::Answered(_)) => ("-", palette.incorrect),
                Some(Outcome::Expired) | None => ("·", palette.warning),
            };

            Line::from(vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(
                    format!("{:2}. ", index + 1),
                    Style::default().fg(palette.muted),
                ),
                Span::styled(
                    truncate_question(&question.question),
                    Style::default().fg(palette.text),
                ),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}

fn render_name_form(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let line = if app.is_name_form_open() {
        Line::from(vec![
            Span::styled("Your name: ", Style::default().fg(palette.text)),
            Span::styled(app.name_input(), Style::default().fg(palette.highlight)),
            Span::styled("_", Style::default().fg(palette.highlight)),
        ])
    } else {
        let message = match app.saved_rank() {
            Some(rank) => format!("Score saved! You are #{} on the board.", rank),
            None => "Score saved!".to_string(),
        };
        Line::from(Span::styled(message, Style::default().fg(palette.correct)))
    };

    let widget = Paragraph::new(line).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.muted)
            .title(" Save your score ")
            .title_style(Style::default().fg(palette.accent)),
    );
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

fn render_controls(frame: &mut Frame, area: Rect, name_form_open: bool, palette: &Palette) {
    let text = if name_form_open {
        "type name  ·  enter save  ·  ctrl-r restart  ·  tab theme  ·  esc quit"
    } else {
        "j/k scroll  ·  r restart  ·  tab theme  ·  q quit"
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(palette.muted);
    frame.render_widget(widget, area);
}
