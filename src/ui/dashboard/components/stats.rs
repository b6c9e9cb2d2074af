//! Dashboard stats component

use super::super::state::DashboardState;
use crate::consts::dashboard_consts::MISSING_VALUE;

use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

/// Render total records, high, and low of the last returned list.
pub fn render_stats_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let (total, high, low) = match &state.stats {
        Some(stats) => (
            stats.total_records.to_string(),
            stats.high_text(),
            stats.low_text(),
        ),
        None => (
            MISSING_VALUE.to_string(),
            MISSING_VALUE.to_string(),
            MISSING_VALUE.to_string(),
        ),
    };

    let value_style = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(vec![
            Span::styled("Records: ", Style::default().fg(Color::Gray)),
            Span::styled(total, value_style.fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("High: ", Style::default().fg(Color::Gray)),
            Span::styled(high, value_style.fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::styled("Low: ", Style::default().fg(Color::Gray)),
            Span::styled(low, value_style.fg(Color::Red)),
        ]),
    ];

    let block = Block::default()
        .title("STATS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}
