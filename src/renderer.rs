//! Rendering seam between the poller and the screen
//!
//! The controller only ever talks to a [`PriceRenderer`]. The shipped
//! implementation forwards every render pass over a channel to whichever
//! front end (TUI or headless console) owns the terminal.

use crate::events::Event;
use crate::price::ApiStatus;
use crate::view::{CurrentPriceView, PriceStats, PriceTable, RefreshControl};
use tokio::sync::mpsc;

/// A single change to what the dashboard shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    Price(CurrentPriceView),
    Table(PriceTable),
    Stats(PriceStats),
    RefreshControl(RefreshControl),
    Status(ApiStatus),
    Event(Event),
}

/// Capability set the controller renders through.
#[async_trait::async_trait]
pub trait PriceRenderer: Send + Sync {
    /// Current price, change badge, and last-updated text.
    async fn render_price(&self, view: CurrentPriceView);

    /// Replace the recent prices table body.
    async fn render_table(&self, table: PriceTable);

    /// Total records, high, and low.
    async fn render_stats(&self, stats: PriceStats);

    /// Enable or disable the manual refresh control.
    async fn render_refresh_control(&self, control: RefreshControl);
}

/// Sends updates to the UI, dropping them once the UI has gone away.
#[derive(Debug, Clone)]
pub struct UpdateSender {
    sender: mpsc::Sender<Update>,
}

impl UpdateSender {
    pub fn new(sender: mpsc::Sender<Update>) -> Self {
        Self { sender }
    }

    pub async fn send(&self, update: Update) {
        let _ = self.sender.send(update).await;
    }

    /// Report a diagnostic event, mirroring it to the `log` facade.
    pub async fn send_event(&self, event: Event) {
        let level: log::Level = event.log_level.into();
        log::log!(level, "{}: {}", event.source, event.msg);
        self.send(Update::Event(event)).await;
    }

    pub async fn send_status(&self, status: ApiStatus) {
        self.send(Update::Status(status)).await;
    }
}

/// [`PriceRenderer`] backed by the update channel.
#[derive(Debug, Clone)]
pub struct ChannelRenderer {
    updates: UpdateSender,
}

impl ChannelRenderer {
    pub fn new(updates: UpdateSender) -> Self {
        Self { updates }
    }
}

#[async_trait::async_trait]
impl PriceRenderer for ChannelRenderer {
    async fn render_price(&self, view: CurrentPriceView) {
        self.updates.send(Update::Price(view)).await;
    }

    async fn render_table(&self, table: PriceTable) {
        self.updates.send(Update::Table(table)).await;
    }

    async fn render_stats(&self, stats: PriceStats) {
        self.updates.send(Update::Stats(stats)).await;
    }

    async fn render_refresh_control(&self, control: RefreshControl) {
        self.updates.send(Update::RefreshControl(control)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::PriceTable;

    #[tokio::test]
    async fn test_channel_renderer_forwards_in_order() {
        let (tx, mut rx) = mpsc::channel(8);
        let renderer = ChannelRenderer::new(UpdateSender::new(tx));

        renderer.render_refresh_control(RefreshControl::Busy).await;
        renderer.render_table(PriceTable::from_points(&[])).await;

        assert_eq!(
            rx.recv().await,
            Some(Update::RefreshControl(RefreshControl::Busy))
        );
        assert!(matches!(rx.recv().await, Some(Update::Table(t)) if t.is_placeholder()));
    }

    #[tokio::test]
    // Rendering after the UI hung up must not panic.
    async fn test_send_after_receiver_dropped() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let renderer = ChannelRenderer::new(UpdateSender::new(tx));
        renderer.render_refresh_control(RefreshControl::Idle).await;
    }
}
