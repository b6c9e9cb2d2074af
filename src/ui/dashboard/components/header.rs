//! Dashboard header component
//!
//! Renders the title and poll countdown gauge

use super::super::state::DashboardState;
use crate::view::RefreshControl;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Render header with title and poll progress.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title_text = match state
        .current_price
        .as_ref()
        .and_then(|view| view.symbol.as_deref())
    {
        Some(symbol) => format!("PRICE DASHBOARD v{} - {}", version, symbol),
        None => format!("PRICE DASHBOARD v{}", version),
    };

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    // Manual refresh takes priority, then the poll countdown
    let (progress_text, gauge_color, progress_percent) = match state.refresh_control() {
        RefreshControl::Busy => {
            // Loops every 20 ticks
            let progress = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
            (
                "REFRESHING - Collecting price".to_string(),
                Color::LightYellow,
                progress,
            )
        }
        RefreshControl::Idle => match state.secs_until_next_poll() {
            Some(remaining) => (
                format!("WAITING - Next poll in {}s", remaining),
                Color::LightBlue,
                ((state.poll_progress() * 100.0) as u16).min(100),
            ),
            None => ("LOADING - Waiting for first prices".to_string(), Color::Gray, 0),
        },
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(progress_percent)
        .label(progress_text);

    f.render_widget(gauge, header_chunks[1]);
}
