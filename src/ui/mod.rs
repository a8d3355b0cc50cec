mod leaderboard;
mod quiz;
mod result;
mod welcome;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::AppState;
use crate::theme::Palette;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let palette = app.theme().palette();
    frame.render_widget(Block::default().bg(palette.background), area);

    match app.state() {
        AppState::NotStarted => welcome::render(frame, area, app, &palette),
        AppState::InProgress => quiz::render(frame, area, app, &palette),
        AppState::Complete => result::render(frame, area, app, &palette),
    }

    if let Some(notice) = app.notice() {
        render_notice(frame, area, notice, &palette);
    }
}

fn render_notice(frame: &mut Frame, area: Rect, notice: &str, palette: &Palette) {
    let width = area.width.saturating_sub(4).min(60);
    let height = 5.min(area.height);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + area.height.saturating_sub(height + 1),
        width,
        height,
    };

    let content = vec![
        Line::from(Span::styled(notice, Style::default().fg(palette.text))),
        Line::from(""),
        Line::from("any key to dismiss".fg(palette.muted)),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.incorrect))
                .bg(palette.background),
        );

    frame.render_widget(Clear, popup);
    frame.render_widget(widget, popup);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::input::Action;
    use crate::leaderboard::{Leaderboard, LeaderboardEntry, MemoryStore};
    use crate::models::Question;
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App {
        let store = MemoryStore::new(vec![LeaderboardEntry::new("Bo", 1, "2026-10-01")]);
        App::new(
            vec![
                Question::new("Capital of France?", vec!["Berlin", "Paris"], 1),
                Question::new("2 + 2?", vec!["4", "5"], 0),
            ],
            Leaderboard::open(Box::new(store)),
            &Settings::default(),
        )
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 40)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_welcome_shows_leaderboard() {
        let text = screen(&app());
        assert!(text.contains("TIMED QUIZ"));
        assert!(text.contains("Bo"));
        assert!(text.contains("1/2 - 2026-10-01"));
    }

    #[test]
    fn test_quiz_screen_shows_question_and_timer() {
        let mut app = app();
        app.dispatch(Action::Start);
        let text = screen(&app);
        assert!(text.contains("Capital of France?"));
        assert!(text.contains("Question 1/2"));
        assert!(text.contains("15s"));
    }

    #[test]
    fn test_results_screen_shows_score() {
        let mut app = app();
        app.dispatch(Action::Start);
        app.dispatch(Action::Select(1));
        app.dispatch(Action::Next);
        app.dispatch(Action::Select(1));
        app.dispatch(Action::Next);

        let text = screen(&app);
        assert!(text.contains("RESULTS"));
        assert!(text.contains("1 / 2"));
        assert!(text.contains("Your name:"));
    }

    #[test]
    fn test_notice_is_drawn() {
        let mut app = App::new(
            Vec::new(),
            Leaderboard::open(Box::new(MemoryStore::default())),
            &Settings::default(),
        );
        app.dispatch(Action::Start);
        let text = screen(&app);
        assert!(text.contains("No questions available"));
        assert!(text.contains("No scores yet"));
    }
}
