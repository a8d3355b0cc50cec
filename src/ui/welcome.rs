use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::leaderboard::LEADERBOARD_CAPACITY;
use crate::theme::Palette;

pub fn render(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(9),
        Constraint::Length(1),
        Constraint::Length(LEADERBOARD_CAPACITY as u16 + 2),
        Constraint::Fill(1),
    ])
    .split(area);

    let session = app.session();
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "TIMED QUIZ",
            Style::default().fg(palette.accent).bold(),
        )),
        Line::from(""),
        Line::from(
            format!(
                "{} Questions · {}s each",
                session.total_questions(),
                session.time_limit()
            )
            .fg(palette.muted),
        ),
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(palette.correct).bold(),
        )),
        Line::from("to start  ·  tab theme  ·  q quit".fg(palette.muted)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.muted),
    );
    frame.render_widget(widget, centered(chunks[1], 50));

    super::leaderboard::render(
        frame,
        centered(chunks[3], 50),
        app.leaderboard().entries(),
        session.total_questions(),
        None,
        palette,
    );
}

fn centered(area: Rect, width: u16) -> Rect {
    let [_, middle, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width.min(area.width)),
        Constraint::Fill(1),
    ])
    .areas(area);
    middle
}
