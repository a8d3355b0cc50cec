use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::leaderboard::LeaderboardEntry;
use crate::theme::Palette;

const NAME_COLUMN_WIDTH: usize = 16;

/// Ranked list with `score/total - date` per row.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    entries: &[LeaderboardEntry],
    total: usize,
    highlight: Option<usize>,
    palette: &Palette,
) {
    let lines: Vec<Line> = if entries.is_empty() {
        vec![Line::from("No scores yet. Be the first!".fg(palette.muted))]
    } else {
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let rank = index + 1;
                let rank_style = match rank {
                    1 => Style::default().fg(palette.highlight).bold(),
                    2 | 3 => Style::default().fg(palette.text),
                    _ => Style::default().fg(palette.muted),
                };
                let name_style = if highlight == Some(rank) {
                    Style::default().fg(palette.correct).bold()
                } else {
                    Style::default().fg(palette.text)
                };

                Line::from(vec![
                    Span::styled(format!("{:>2}. ", rank), rank_style),
                    Span::styled(
                        format!("{:<width$}", entry.name, width = NAME_COLUMN_WIDTH),
                        name_style,
                    ),
                    Span::styled(
                        format!(" {}/{} - {}", entry.score, total, entry.date),
                        Style::default().fg(palette.muted),
                    ),
                ])
            })
            .collect()
    };

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.muted))
            .title(" Leaderboard ")
            .title_style(Style::default().fg(palette.accent))
            .padding(Padding::horizontal(1)),
    );

    frame.render_widget(widget, area);
}
