//! Dashboard current price panel
//!
//! Renders the live quote, its change badge, and connection info

use super::super::state::DashboardState;
use super::super::utils::direction_color;
use crate::consts::dashboard_consts::MISSING_VALUE;

use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the current price panel.
pub fn render_price_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut lines = Vec::new();

    match &state.current_price {
        Some(view) => {
            lines.push(Line::from(Span::styled(
                view.price_text.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )));
            // Badge: success or danger background
            lines.push(Line::from(Span::styled(
                format!(" {} ", view.change.text),
                Style::default()
                    .fg(Color::Black)
                    .bg(direction_color(view.change.direction))
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                view.last_updated.clone(),
                Style::default().fg(Color::DarkGray),
            )));
        }
        None => {
            lines.push(Line::from(Span::styled(
                MISSING_VALUE,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                "Waiting for first quote...",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("API: ", Style::default().fg(Color::Gray)),
        Span::styled(state.environment.api_url(), Style::default().fg(Color::LightBlue)),
    ]));

    let (status_text, status_color) = match &state.api_status {
        Some(status) if status.success => (status.summary(), Color::Green),
        Some(status) => (status.summary(), Color::Yellow),
        None => ("unknown".to_string(), Color::Gray),
    };
    lines.push(Line::from(vec![
        Span::styled("Status: ", Style::default().fg(Color::Gray)),
        Span::styled(status_text, Style::default().fg(status_color)),
    ]));

    let uptime = state.start_time.elapsed().as_secs();
    let uptime_string = if uptime >= 3600 {
        format!("{}h {}m {}s", uptime / 3600, (uptime % 3600) / 60, uptime % 60)
    } else {
        format!("{}m {}s", uptime / 60, uptime % 60)
    };
    lines.push(Line::from(vec![
        Span::styled("Uptime: ", Style::default().fg(Color::Gray)),
        Span::styled(uptime_string, Style::default().fg(Color::LightGreen)),
    ]));

    let block = Block::default()
        .title("CURRENT PRICE")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
