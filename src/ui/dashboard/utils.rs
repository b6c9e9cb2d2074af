//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Source;
use crate::view::ChangeDirection;
use ratatui::prelude::Color;

/// Get a ratatui color for an event source
pub fn get_source_color(source: &Source) -> Color {
    match source {
        Source::CurrentPrice => Color::Cyan,
        Source::RecentPrices => Color::LightBlue,
        Source::ManualRefresh => Color::Yellow,
        Source::Poller => Color::Gray,
        Source::Status => Color::Magenta,
    }
}

/// Success style for moves up (and flat), danger style for moves down
pub fn direction_color(direction: ChangeDirection) -> Color {
    match direction {
        ChangeDirection::Up => Color::Green,
        ChangeDirection::Down => Color::Red,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min) = time_part.get(0..5) {
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    // Replace verbose reqwest error patterns with cleaner messages
    if msg.contains("Reqwest error") && msg.contains("timed out") {
        return "Request timed out - will retry on next poll".to_string();
    }
    if msg.contains("Reqwest error") && msg.contains("connect") {
        return "Price API unreachable - will retry on next poll".to_string();
    }
    msg.to_string()
}
