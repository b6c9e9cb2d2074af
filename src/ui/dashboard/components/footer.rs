//! Dashboard footer component
//!
//! Renders the refresh control and quit instructions

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render footer; the refresh hint dims while a refresh is in flight.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let control = state.refresh_control();
    let footer_text = format!("[R] {} | [Q] Quit | Price Dashboard", control.label());

    let footer_color = if control.is_enabled() {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(footer_color)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
