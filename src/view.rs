//! Render-ready views of price data
//!
//! Pure formatting: nothing here performs I/O, so every rule about what the
//! dashboard shows lives in one testable place.

use crate::consts::dashboard_consts::{
    CURRENCY_SYMBOL, MISSING_VALUE, NO_DATA_PLACEHOLDER, REFRESH_LABEL_BUSY, REFRESH_LABEL_IDLE,
};
use crate::price::PricePoint;
use chrono::Local;

/// Direction of a price move. Zero counts as up.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum ChangeDirection {
    Up,
    Down,
}

impl ChangeDirection {
    pub fn from_change(change: f64) -> Self {
        if change >= 0.0 {
            ChangeDirection::Up
        } else {
            ChangeDirection::Down
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ChangeDirection::Up => "▲",
            ChangeDirection::Down => "▼",
        }
    }
}

/// Format a price with the currency prefix and two decimals.
pub fn format_price(price: f64) -> String {
    format!("{}{:.2}", CURRENCY_SYMBOL, price)
}

/// The signed change badge next to the current price.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeBadge {
    pub direction: ChangeDirection,
    pub text: String,
}

impl ChangeBadge {
    /// Missing change or percent values are treated as zero.
    pub fn new(change: Option<f64>, change_percent: Option<f64>) -> Self {
        let change = change.unwrap_or(0.0);
        let change_percent = change_percent.unwrap_or(0.0);
        let direction = ChangeDirection::from_change(change);
        Self {
            direction,
            text: format!(
                "{} {:.2} ({:.2}%)",
                direction.icon(),
                change,
                change_percent
            ),
        }
    }
}

/// Everything rendered for the live quote.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentPriceView {
    pub symbol: Option<String>,
    pub price_text: String,
    pub change: ChangeBadge,
    /// Client-local render time, not server time.
    pub last_updated: String,
}

impl CurrentPriceView {
    pub fn new(point: &PricePoint) -> Self {
        Self {
            symbol: point.symbol.clone(),
            price_text: format_price(point.price),
            change: ChangeBadge::new(point.change, point.change_percent),
            last_updated: format!(
                "Last updated: {}",
                Local::now().format("%Y-%m-%d %H:%M:%S")
            ),
        }
    }
}

/// One table row for a stored price.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRow {
    pub timestamp: String,
    pub price_text: String,
    pub direction: ChangeDirection,
    pub change_text: String,
    pub percent_text: String,
}

impl PriceRow {
    /// A zero or missing change shows as `--`; the icon still follows the sign.
    pub fn new(point: &PricePoint) -> Self {
        let direction = ChangeDirection::from_change(point.change.unwrap_or(0.0));
        let change_text = match point.change {
            Some(change) if change != 0.0 => format!("{} {:.2}", direction.icon(), change),
            _ => format!("{} {}", direction.icon(), MISSING_VALUE),
        };
        let percent_text = match point.change_percent {
            Some(percent) if percent != 0.0 => format!("{:.2}%", percent),
            _ => MISSING_VALUE.to_string(),
        };
        Self {
            timestamp: point
                .timestamp
                .clone()
                .unwrap_or_else(|| MISSING_VALUE.to_string()),
            price_text: format_price(point.price),
            direction,
            change_text,
            percent_text,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableRow {
    Price(PriceRow),
    /// Spans every column.
    Placeholder(String),
}

/// The rendered body of the recent prices table.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTable {
    pub rows: Vec<TableRow>,
}

impl PriceTable {
    /// One row per point, in server order; an empty list yields a single placeholder.
    pub fn from_points(points: &[PricePoint]) -> Self {
        if points.is_empty() {
            return Self {
                rows: vec![TableRow::Placeholder(NO_DATA_PLACEHOLDER.to_string())],
            };
        }
        Self {
            rows: points
                .iter()
                .map(|point| TableRow::Price(PriceRow::new(point)))
                .collect(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.rows.as_slice(), [TableRow::Placeholder(_)])
    }
}

/// Summary statistics derived from one returned list.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceStats {
    pub total_records: usize,
    pub high: f64,
    pub low: f64,
}

impl PriceStats {
    /// `None` for an empty list, leaving previously rendered stats in place.
    pub fn from_points(points: &[PricePoint]) -> Option<Self> {
        let first = points.first()?.price;
        let (high, low) = points
            .iter()
            .fold((first, first), |(high, low), point| {
                (high.max(point.price), low.min(point.price))
            });
        Some(Self {
            total_records: points.len(),
            high,
            low,
        })
    }

    pub fn high_text(&self) -> String {
        format_price(self.high)
    }

    pub fn low_text(&self) -> String {
        format_price(self.low)
    }
}

/// State of the manual refresh control.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RefreshControl {
    Idle,
    Busy,
}

impl RefreshControl {
    pub fn is_enabled(&self) -> bool {
        matches!(self, RefreshControl::Idle)
    }

    pub fn label(&self) -> &'static str {
        match self {
            RefreshControl::Idle => REFRESH_LABEL_IDLE,
            RefreshControl::Busy => REFRESH_LABEL_BUSY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(price: f64) -> PricePoint {
        PricePoint::new(price).with_timestamp("2026-10-19 10:00:00")
    }

    #[test]
    // Negative move renders a down badge with signed values.
    fn test_negative_change_badge() {
        let quote = PricePoint::new(100.5).with_change(-2.25, -2.19);
        let view = CurrentPriceView::new(&quote);
        assert_eq!(view.price_text, "₹100.50");
        assert_eq!(view.change.text, "▼ -2.25 (-2.19%)");
        assert_eq!(view.change.direction, ChangeDirection::Down);
        assert!(view.last_updated.starts_with("Last updated: "));
    }

    #[test]
    fn test_positive_and_flat_change_badge() {
        let badge = ChangeBadge::new(Some(3.5), Some(0.14));
        assert_eq!(badge.direction, ChangeDirection::Up);
        assert_eq!(badge.text, "▲ 3.50 (0.14%)");

        let flat = ChangeBadge::new(None, None);
        assert_eq!(flat.direction, ChangeDirection::Up);
        assert_eq!(flat.text, "▲ 0.00 (0.00%)");
    }

    #[test]
    fn test_empty_list_renders_one_placeholder_row() {
        let table = PriceTable::from_points(&[]);
        assert_eq!(table.rows.len(), 1);
        assert!(table.is_placeholder());
        assert_eq!(PriceStats::from_points(&[]), None);
    }

    #[test]
    fn test_rows_and_stats_match_list() {
        let points = vec![
            point(101.0).with_change(1.0, 0.99),
            point(99.25).with_change(-1.75, -1.73),
            point(104.8),
            point(100.0),
        ];
        let table = PriceTable::from_points(&points);
        assert_eq!(table.rows.len(), points.len());
        assert!(!table.is_placeholder());

        let stats = PriceStats::from_points(&points).unwrap();
        assert_eq!(stats.total_records, 4);
        assert_eq!(stats.high, 104.8);
        assert_eq!(stats.low, 99.25);
        assert_eq!(stats.high_text(), "₹104.80");
    }

    #[test]
    // Rows keep server order.
    fn test_rows_are_not_resorted() {
        let points = vec![point(1.0), point(3.0), point(2.0)];
        let prices: Vec<String> = PriceTable::from_points(&points)
            .rows
            .into_iter()
            .map(|row| match row {
                TableRow::Price(row) => row.price_text,
                TableRow::Placeholder(text) => text,
            })
            .collect();
        assert_eq!(prices, vec!["₹1.00", "₹3.00", "₹2.00"]);
    }

    #[test]
    fn test_row_with_missing_values() {
        let row = PriceRow::new(&PricePoint::new(50.0));
        assert_eq!(row.timestamp, "--");
        assert_eq!(row.change_text, "▲ --");
        assert_eq!(row.percent_text, "--");

        let row = PriceRow::new(&point(50.0).with_change(-0.5, -1.0));
        assert_eq!(row.direction, ChangeDirection::Down);
        assert_eq!(row.change_text, "▼ -0.50");
        assert_eq!(row.percent_text, "-1.00%");
    }

    #[test]
    fn test_refresh_control_labels() {
        assert!(RefreshControl::Idle.is_enabled());
        assert!(!RefreshControl::Busy.is_enabled());
        assert_eq!(RefreshControl::Busy.label(), "Refreshing...");
        assert_eq!(RefreshControl::Idle.label(), "Refresh Now");
    }
}
