//! Price API Client
//!
//! A client for the dashboard's price API, decoding the `{success, data}` envelope.

use crate::api::PriceApi;
use crate::api::error::ApiError;
use crate::consts::dashboard_consts::http;
use crate::environment::Environment;
use crate::price::{ApiStatus, Envelope, FetchAck, PricePoint};
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("price-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct PriceApiClient {
    client: Client,
    environment: Environment,
}

impl PriceApiClient {
    pub fn new(environment: Environment) -> Result<Self, ApiError> {
        let client = ClientBuilder::new()
            .connect_timeout(http::connect_timeout())
            .timeout(http::request_timeout())
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            environment,
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    /// GET `endpoint` and decode the body as an envelope around `T`.
    async fn get_envelope<T: DeserializeOwned>(
        &self,
        endpoint: &str,
    ) -> Result<Envelope<T>, ApiError> {
        let url = self.build_url(endpoint);
        log::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&response_bytes)?)
    }

    /// GET `endpoint` and return the envelope's payload, failing on `success: false`.
    async fn get_data<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let envelope = self.get_envelope(endpoint).await?;
        unwrap_envelope(envelope, endpoint)
    }
}

/// Reduce an envelope to its payload.
pub(crate) fn unwrap_envelope<T>(envelope: Envelope<T>, endpoint: &str) -> Result<T, ApiError> {
    if !envelope.success {
        return Err(ApiError::rejected(envelope.message));
    }
    envelope.data.ok_or_else(|| ApiError::MissingData {
        endpoint: endpoint.to_string(),
    })
}

#[async_trait::async_trait]
impl PriceApi for PriceApiClient {
    async fn current_price(&self) -> Result<PricePoint, ApiError> {
        self.get_data("api/price/current").await
    }

    async fn latest_prices(&self, limit: u32) -> Result<Vec<PricePoint>, ApiError> {
        self.get_data(&format!("api/prices/latest?limit={}", limit))
            .await
    }

    async fn fetch_now(&self) -> Result<FetchAck, ApiError> {
        // Only the success flag matters here; an unexpected payload shape is tolerated.
        let envelope: Envelope<serde_json::Value> = self.get_envelope("fetch-now").await?;
        if !envelope.success {
            return Err(ApiError::rejected(envelope.message));
        }
        let collected = envelope
            .data
            .and_then(|value| serde_json::from_value::<PricePoint>(value).ok());
        Ok(FetchAck { collected })
    }

    async fn price_history(&self, hours: u32) -> Result<Vec<PricePoint>, ApiError> {
        self.get_data(&format!("api/prices/history?hours={}", hours))
            .await
    }

    async fn status(&self) -> Result<ApiStatus, ApiError> {
        let url = self.build_url("api/status");
        log::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        let response = Self::handle_response_status(response).await?;
        Ok(serde_json::from_slice(&response.bytes().await?)?)
    }
}
