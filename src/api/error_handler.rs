//! Centralized error classification

use crate::api::error::ApiError;
use crate::logging::LogLevel;

/// Maps API failures onto the log level they are reported at.
#[derive(Debug, Clone, Default)]
pub struct ErrorHandler;

impl ErrorHandler {
    pub fn new() -> Self {
        Self
    }

    /// Classify error and determine appropriate log level
    pub fn classify_error(&self, error: &ApiError) -> LogLevel {
        match error {
            // Authentication errors - critical, polling cannot succeed
            ApiError::Http { status, .. } if *status == 401 || *status == 403 => LogLevel::Error,

            // Server errors - temporary issues
            ApiError::Http { status, .. } if (500..=599).contains(status) => LogLevel::Warn,
            ApiError::Http { .. } => LogLevel::Warn,

            // Network issues - usually temporary
            ApiError::Reqwest(_) => LogLevel::Warn,

            // The server spoke, but not the envelope we understand
            ApiError::Decode(_) => LogLevel::Error,

            // Upstream quote source unavailable
            ApiError::Rejected { .. } | ApiError::MissingData { .. } => LogLevel::Warn,
        }
    }
}
