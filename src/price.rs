//! Wire types for the price API
//!
//! Every endpoint wraps its payload in the same `{success, data, message}` envelope.

use serde::{Deserialize, Serialize};

/// One timestamped price observation as produced by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Server-side row id, present on stored prices only.
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub symbol: Option<String>,
    /// Formatted server timestamp (`YYYY-MM-DD HH:MM:SS`). Live quotes omit it.
    #[serde(default)]
    pub timestamp: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub change: Option<f64>,
    #[serde(default)]
    pub change_percent: Option<f64>,
}

impl PricePoint {
    pub fn new(price: f64) -> Self {
        Self {
            id: None,
            symbol: None,
            timestamp: None,
            price,
            change: None,
            change_percent: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    pub fn with_change(mut self, change: f64, change_percent: f64) -> Self {
        self.change = Some(change);
        self.change_percent = Some(change_percent);
        self
    }
}

/// The `{success, data?, message?}` wrapper used by all endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Acknowledgement returned by the manual collection trigger.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchAck {
    /// The price the server collected, when it reports one.
    pub collected: Option<PricePoint>,
}

/// Health report from the status endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiStatus {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl ApiStatus {
    /// One-line summary for headers and console output.
    pub fn summary(&self) -> String {
        let state = if self.success { "online" } else { "degraded" };
        match &self.version {
            Some(version) => format!("{} (v{})", state, version),
            None => state.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // A stored price row decodes with all of its fields.
    fn test_decode_stored_price() {
        let json = r#"{
            "id": 7,
            "symbol": "NIFTY 50",
            "price": 24512.35,
            "change": 12.5,
            "change_percent": 0.05,
            "timestamp": "2026-10-19 09:15:00"
        }"#;
        let point: PricePoint = serde_json::from_str(json).unwrap();
        assert_eq!(point.id, Some(7));
        assert_eq!(point.timestamp.as_deref(), Some("2026-10-19 09:15:00"));
        assert_eq!(point.change, Some(12.5));
    }

    #[test]
    // A live quote has no timestamp and may carry a null change.
    fn test_decode_live_quote_with_nulls() {
        let json = r#"{"symbol": "NIFTY 50", "price": 100.5, "change": null, "change_percent": 0}"#;
        let point: PricePoint = serde_json::from_str(json).unwrap();
        assert_eq!(point.timestamp, None);
        assert_eq!(point.change, None);
        assert_eq!(point.change_percent, Some(0.0));
    }

    #[test]
    // A failure envelope has no data and carries the server message.
    fn test_decode_failure_envelope() {
        let json = r#"{"success": false, "message": "Failed to fetch price"}"#;
        let envelope: Envelope<PricePoint> = serde_json::from_str(json).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.message.as_deref(), Some("Failed to fetch price"));
    }

    #[test]
    fn test_status_summary() {
        let status = ApiStatus {
            success: true,
            message: Some("API is running".to_string()),
            version: Some("1.0.0".to_string()),
        };
        assert_eq!(status.summary(), "online (v1.0.0)");
    }
}
