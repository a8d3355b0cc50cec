use ratatui::{
    prelude::*,
    widgets::{Gauge, Paragraph, Wrap},
};

use crate::app::App;
use crate::quiz::QuizSession;
use crate::theme::Palette;

const OPTION_LABELS: [char; 9] = ['1', '2', '3', '4', '5', '6', '7', '8', '9'];

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let session = app.session();
    let Some(question) = session.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_header(frame, chunks[0], app, palette);
    render_progress_bar(frame, chunks[1], session, palette);
    render_question_text(frame, chunks[3], &question.question, palette);
    render_options(frame, chunks[4], session, &question.options, palette);
    render_controls(frame, chunks[5], session.is_resolved(), palette);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let session = app.session();
    let [progress_area, timer_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(12)]).areas(area);

    let progress = format!(
        "Question {}/{}",
        session.current_question_number(),
        session.total_questions()
    );
    frame.render_widget(Paragraph::new(progress).fg(palette.muted), progress_area);

    let timer_style = if app.is_time_running_out() {
        Style::default().fg(Color::White).bg(palette.incorrect).bold()
    } else {
        Style::default().fg(Color::White).bg(palette.timer)
    };
    let timer = Paragraph::new(format!(" {:>2}s ", session.time_left()))
        .alignment(Alignment::Right)
        .style(timer_style);
    frame.render_widget(timer, timer_area);
}

fn render_progress_bar(frame: &mut Frame, area: Rect, session: &QuizSession, palette: &Palette) {
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(palette.accent))
        .ratio(session.progress().clamp(0.0, 1.0))
        .label("");
    frame.render_widget(gauge, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str, palette: &Palette) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(palette.text)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    session: &QuizSession,
    options: &[String],
    palette: &Palette,
) {
    let revealed = session.revealed_answer();
    let selection = session.selection();
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_cursor = !session.is_resolved() && index == session.cursor();
        // Only a committed wrong choice is marked incorrect; a timeout just
        // reveals the right one.
        let (marker, style) = if revealed == Some(index) {
            ("✓", Style::default().fg(palette.correct).bold())
        } else if selection == Some(index) {
            ("✗", Style::default().fg(palette.incorrect).bold())
        } else if is_cursor {
            (">", Style::default().fg(palette.accent).bold())
        } else {
            (" ", Style::default().fg(palette.muted))
        };

        let label = OPTION_LABELS.get(index).copied().unwrap_or('·');
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", label), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    if session.is_expired() {
        lines.push(Line::from(Span::styled(
            "Time's up!",
            Style::default().fg(palette.warning).bold(),
        )));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_controls(frame: &mut Frame, area: Rect, resolved: bool, palette: &Palette) {
    let text = if resolved {
        "enter/n next  ·  tab theme  ·  q quit"
    } else {
        "j/k navigate  ·  enter or 1-9 select  ·  tab theme  ·  q quit"
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(palette.muted);
    frame.render_widget(widget, area);
}
