//! Dashboard controller
//!
//! Each operation is an independent read-then-render pass. Failures are
//! reported as diagnostic events and returned; nothing is rendered on the
//! failure path, so previously shown data stays on screen.

use crate::api::PriceApi;
use crate::api::error::ApiError;
use crate::api::error_handler::ErrorHandler;
use crate::events::{Event, Source};
use crate::price::{ApiStatus, FetchAck, PricePoint};
use crate::renderer::{PriceRenderer, UpdateSender};
use crate::view::{CurrentPriceView, PriceStats, PriceTable, RefreshControl};

pub struct DashboardController {
    api: Box<dyn PriceApi>,
    renderer: Box<dyn PriceRenderer>,
    updates: UpdateSender,
    error_handler: ErrorHandler,
    recent_limit: u32,
}

impl DashboardController {
    pub fn new(
        api: Box<dyn PriceApi>,
        renderer: Box<dyn PriceRenderer>,
        updates: UpdateSender,
        recent_limit: u32,
    ) -> Self {
        Self {
            api,
            renderer,
            updates,
            error_handler: ErrorHandler::new(),
            recent_limit,
        }
    }

    pub fn recent_limit(&self) -> u32 {
        self.recent_limit
    }

    /// Fetch the live quote and render price, change badge, and last-updated time.
    pub async fn fetch_current_price(&self) -> Result<PricePoint, ApiError> {
        match self.api.current_price().await {
            Ok(point) => {
                self.renderer
                    .render_price(CurrentPriceView::new(&point))
                    .await;
                Ok(point)
            }
            Err(e) => Err(self.report(Source::CurrentPrice, "fetch current price", e).await),
        }
    }

    /// Fetch the latest `limit` prices and render the table and stats.
    pub async fn fetch_recent_prices(&self, limit: u32) -> Result<Vec<PricePoint>, ApiError> {
        match self.api.latest_prices(limit).await {
            Ok(points) => {
                self.render_list(&points).await;
                self.updates
                    .send_event(Event::success(
                        Source::RecentPrices,
                        format!("Loaded {} recent prices", points.len()),
                    ))
                    .await;
                Ok(points)
            }
            Err(e) => Err(self.report(Source::RecentPrices, "fetch recent prices", e).await),
        }
    }

    /// Fetch the stored prices of the last `hours` hours through the table path.
    pub async fn fetch_price_history(&self, hours: u32) -> Result<Vec<PricePoint>, ApiError> {
        match self.api.price_history(hours).await {
            Ok(points) => {
                self.render_list(&points).await;
                Ok(points)
            }
            Err(e) => Err(self.report(Source::RecentPrices, "fetch price history", e).await),
        }
    }

    /// Trigger server-side collection, then reload both views on success.
    ///
    /// The refresh control is disabled for the whole operation and always re-enabled.
    pub async fn trigger_manual_refresh(&self) -> Result<FetchAck, ApiError> {
        self.renderer
            .render_refresh_control(RefreshControl::Busy)
            .await;
        self.updates
            .send_event(Event::refresh(Source::ManualRefresh, "Collecting price now..."))
            .await;

        let result = self.refresh_after_trigger().await;

        self.renderer
            .render_refresh_control(RefreshControl::Idle)
            .await;
        result
    }

    async fn refresh_after_trigger(&self) -> Result<FetchAck, ApiError> {
        let ack = match self.api.fetch_now().await {
            Ok(ack) => ack,
            Err(e) => {
                return Err(self.report(Source::ManualRefresh, "trigger collection", e).await);
            }
        };

        // Follow-up failures are already reported; the trigger itself succeeded.
        let _ = self.fetch_current_price().await;
        let _ = self.fetch_recent_prices(self.recent_limit).await;
        Ok(ack)
    }

    /// Initial load: current price, then recent prices.
    pub async fn load_initial(&self) {
        let _ = self.fetch_current_price().await;
        let _ = self.fetch_recent_prices(self.recent_limit).await;
    }

    /// Health check of the API; failures are reported, never fatal.
    pub async fn check_status(&self) -> Result<ApiStatus, ApiError> {
        match self.api.status().await {
            Ok(status) => {
                self.updates.send_status(status.clone()).await;
                Ok(status)
            }
            Err(e) => Err(self.report(Source::Status, "check API status", e).await),
        }
    }

    async fn render_list(&self, points: &[PricePoint]) {
        self.renderer
            .render_table(PriceTable::from_points(points))
            .await;
        if let Some(stats) = PriceStats::from_points(points) {
            self.renderer.render_stats(stats).await;
        }
    }

    async fn report(&self, source: Source, action: &str, error: ApiError) -> ApiError {
        let log_level = self.error_handler.classify_error(&error);
        self.updates
            .send_event(Event::error(
                source,
                format!("Failed to {}: {}", action, error),
                log_level,
            ))
            .await;
        error
    }
}
