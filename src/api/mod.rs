use crate::api::error::ApiError;
use crate::price::{ApiStatus, FetchAck, PricePoint};

pub(crate) mod client;
pub use client::PriceApiClient;
pub mod error;
pub mod error_handler;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait PriceApi: Send + Sync {
    /// Get the live price quote.
    async fn current_price(&self) -> Result<PricePoint, ApiError>;

    /// Get the most recent stored prices, newest first.
    async fn latest_prices(&self, limit: u32) -> Result<Vec<PricePoint>, ApiError>;

    /// Ask the server to collect a price right now.
    async fn fetch_now(&self) -> Result<FetchAck, ApiError>;

    /// Get the stored prices from the last `hours` hours.
    async fn price_history(&self, hours: u32) -> Result<Vec<PricePoint>, ApiError>;

    /// Health check of the API.
    async fn status(&self) -> Result<ApiStatus, ApiError>;
}
