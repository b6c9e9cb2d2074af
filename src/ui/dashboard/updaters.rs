//! Dashboard state update logic
//!
//! Applies queued render updates to the dashboard state

use super::state::DashboardState;
use crate::renderer::Update;

use std::time::Duration;

impl DashboardState {
    /// Advance the animation tick and apply all queued updates in arrival order.
    pub fn update(&mut self) {
        self.tick += 1;

        while let Some(update) = self.pending_updates.pop_front() {
            self.apply(update);
        }
    }

    /// Apply a single update. Later updates overwrite earlier ones.
    fn apply(&mut self, update: Update) {
        match update {
            Update::Price(view) => self.current_price = Some(view),
            Update::Table(table) => {
                self.table = Some(table);
                self.mark_table_updated();
            }
            Update::Stats(stats) => self.stats = Some(stats),
            Update::RefreshControl(control) => self.set_refresh_control(control),
            Update::Status(status) => self.api_status = Some(status),
            Update::Event(event) => self.add_to_activity_log(event),
        }
    }

    /// Seconds until the next scheduled poll, if one has happened yet.
    pub fn secs_until_next_poll(&self) -> Option<u64> {
        let last = self.last_table_update()?;
        let remaining = self.poll_interval.saturating_sub(last.elapsed());
        Some(remaining.as_secs())
    }

    /// Fraction of the poll period that has elapsed, clamped to `[0, 1]`.
    pub fn poll_progress(&self) -> f64 {
        match self.last_table_update() {
            Some(last) if self.poll_interval > Duration::ZERO => {
                (last.elapsed().as_secs_f64() / self.poll_interval.as_secs_f64()).min(1.0)
            }
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::events::{Event, Source};
    use crate::logging::LogLevel;
    use crate::price::PricePoint;
    use crate::ui::UIConfig;
    use crate::view::{CurrentPriceView, PriceStats, PriceTable, RefreshControl};
    use std::time::Instant;

    fn state() -> DashboardState {
        DashboardState::new(
            Environment::Local,
            Instant::now(),
            UIConfig::new(false, Duration::from_secs(30), 10),
        )
    }

    #[test]
    fn test_updates_apply_in_order() {
        let mut state = state();
        state.add_update(Update::Price(CurrentPriceView::new(&PricePoint::new(1.0))));
        state.add_update(Update::Price(CurrentPriceView::new(&PricePoint::new(2.0))));
        state.add_update(Update::RefreshControl(RefreshControl::Busy));
        state.update();

        assert_eq!(state.current_price.as_ref().unwrap().price_text, "₹2.00");
        assert_eq!(state.refresh_control(), RefreshControl::Busy);
        assert!(state.pending_updates.is_empty());
    }

    #[test]
    // Error events land in the log without touching rendered data.
    fn test_error_event_keeps_previous_data() {
        let mut state = state();
        let points = vec![PricePoint::new(10.0), PricePoint::new(12.0)];
        state.add_update(Update::Table(PriceTable::from_points(&points)));
        state.add_update(Update::Stats(PriceStats::from_points(&points).unwrap()));
        state.update();

        state.add_update(Update::Event(Event::error(
            Source::RecentPrices,
            "Failed to fetch recent prices",
            LogLevel::Warn,
        )));
        state.update();

        assert_eq!(state.table.as_ref().unwrap().rows.len(), 2);
        assert_eq!(state.stats.as_ref().unwrap().high, 12.0);
        assert_eq!(state.activity_logs.len(), 1);
    }

    #[test]
    fn test_poll_countdown_starts_after_first_table() {
        let mut state = state();
        assert_eq!(state.secs_until_next_poll(), None);
        assert_eq!(state.poll_progress(), 0.0);

        state.add_update(Update::Table(PriceTable::from_points(&[])));
        state.update();
        let remaining = state.secs_until_next_poll().unwrap();
        assert!(remaining <= 30);
        assert!(state.poll_progress() < 0.5);
    }
}
