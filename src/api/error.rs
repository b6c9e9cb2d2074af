//! Error handling for the price API module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Reqwest error, typically related to network issues or request failures.
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The response body was not the JSON envelope we expected.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The server answered with a non-success status code.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The envelope decoded but reported `success: false`.
    #[error("Request rejected by server: {message}")]
    Rejected { message: String },

    /// The envelope reported success without a payload.
    #[error("Response from {endpoint} carried no data")]
    MissingData { endpoint: String },
}

impl ApiError {
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        ApiError::Http {
            status,
            message: Self::server_message(&body).unwrap_or(body),
        }
    }

    /// Extract the `message` field of an error envelope, if the body is one.
    fn server_message(body: &str) -> Option<String> {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()?
            .get("message")?
            .as_str()
            .map(str::to_string)
    }

    pub fn rejected(message: Option<String>) -> ApiError {
        ApiError::Rejected {
            message: message.unwrap_or_else(|| "no message".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_from_error_envelope() {
        let body = r#"{"success": false, "message": "Error fetching Nifty price: timeout"}"#;
        assert_eq!(
            ApiError::server_message(body).as_deref(),
            Some("Error fetching Nifty price: timeout")
        );
        assert_eq!(ApiError::server_message("<html>502</html>"), None);
    }

    #[test]
    fn test_rejected_defaults_message() {
        let err = ApiError::rejected(None);
        assert_eq!(err.to_string(), "Request rejected by server: no message");
    }
}
