//! Plain-text rendering of dashboard updates for headless output

use crate::renderer::Update;
use crate::view::{PriceTable, TableRow};

/// Text for one update, or `None` for updates that are not printed.
///
/// Diagnostic events are skipped: they already go through the `log` facade.
pub fn format_update(update: &Update) -> Option<String> {
    match update {
        Update::Price(view) => {
            let symbol = view.symbol.as_deref().unwrap_or("Price");
            Some(format!(
                "{}: {}  {}  ({})",
                symbol, view.price_text, view.change.text, view.last_updated
            ))
        }
        Update::Table(table) => Some(format_table(table)),
        Update::Stats(stats) => Some(format!(
            "Records: {}  High: {}  Low: {}",
            stats.total_records,
            stats.high_text(),
            stats.low_text()
        )),
        Update::RefreshControl(control) => Some(format!("[{}]", control.label())),
        Update::Status(status) => Some(format!("API status: {}", status.summary())),
        Update::Event(_) => None,
    }
}

/// Fixed-width table with one line per row.
pub fn format_table(table: &PriceTable) -> String {
    let mut out = format!(
        "{:<19}  {:>14}  {:>12}  {:>9}",
        "Time", "Price", "Change", "Change %"
    );
    for row in &table.rows {
        out.push('\n');
        match row {
            TableRow::Price(row) => out.push_str(&format!(
                "{:<19}  {:>14}  {:>12}  {:>9}",
                row.timestamp, row.price_text, row.change_text, row.percent_text
            )),
            TableRow::Placeholder(text) => out.push_str(&format!("{:^60}", text)),
        }
    }
    out
}

/// Print every printable update.
pub fn print_update(update: &Update) {
    if let Some(text) = format_update(update) {
        println!("{}", text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{Event, Source};
    use crate::price::PricePoint;
    use crate::view::{CurrentPriceView, PriceStats};

    #[test]
    fn test_format_price_update() {
        let view = CurrentPriceView::new(&PricePoint::new(100.5).with_change(-2.25, -2.19));
        let text = format_update(&Update::Price(view)).unwrap();
        assert!(text.starts_with("Price: ₹100.50  ▼ -2.25 (-2.19%)"));
    }

    #[test]
    fn test_format_table_lines() {
        let points = vec![
            PricePoint::new(10.0).with_timestamp("2026-10-19 10:00:00"),
            PricePoint::new(11.0).with_timestamp("2026-10-19 10:01:00"),
        ];
        let text = format_table(&PriceTable::from_points(&points));
        assert_eq!(text.lines().count(), 3);

        let empty = format_table(&PriceTable::from_points(&[]));
        assert_eq!(empty.lines().count(), 2);
        assert!(empty.contains("No data available"));
    }

    #[test]
    fn test_events_are_not_printed() {
        let event = Event::refresh(Source::Poller, "tick");
        assert_eq!(format_update(&Update::Event(event)), None);

        let stats = PriceStats::from_points(&[PricePoint::new(5.0)]).unwrap();
        assert_eq!(
            format_update(&Update::Stats(stats)).unwrap(),
            "Records: 1  High: ₹5.00  Low: ₹5.00"
        );
    }
}
