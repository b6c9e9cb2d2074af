//! Dashboard recent prices table

use super::super::state::DashboardState;
use super::super::utils::direction_color;
use crate::view::TableRow;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};

/// Render the recent prices table; a placeholder spans the whole body.
pub fn render_price_table(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let block = Block::default()
        .title(format!("RECENT PRICES (last {})", state.recent_limit))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let Some(table) = &state.table else {
        let loading = Paragraph::new("Loading...")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(loading, area);
        return;
    };

    if let [TableRow::Placeholder(text)] = table.rows.as_slice() {
        let placeholder = Paragraph::new(text.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray))
            .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let rows: Vec<Row> = table
        .rows
        .iter()
        .filter_map(|row| match row {
            TableRow::Price(row) => {
                let change_style = Style::default().fg(direction_color(row.direction));
                Some(Row::new(vec![
                    Cell::from(row.timestamp.clone()),
                    Cell::from(row.price_text.clone()),
                    Cell::from(row.change_text.clone()).style(change_style),
                    Cell::from(row.percent_text.clone()).style(change_style),
                ]))
            }
            TableRow::Placeholder(_) => None,
        })
        .collect();

    let header = Row::new(vec!["Time", "Price", "Change", "Change %"]).style(
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    );

    let widget = Table::new(
        rows,
        [
            Constraint::Length(19),
            Constraint::Length(14),
            Constraint::Length(12),
            Constraint::Fill(1),
        ],
    )
    .header(header)
    .column_spacing(2)
    .block(block);

    f.render_widget(widget, area);
}
