//! Event System
//!
//! Diagnostic events raised by the poller and shown in the activity log

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Source {
    /// The live quote request.
    CurrentPrice,
    /// The recent prices request.
    RecentPrices,
    /// The manual collection trigger.
    ManualRefresh,
    /// The polling loop itself.
    Poller,
    /// Health check and other one-off requests.
    Status,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Waiting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    pub fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn success(source: Source, msg: impl Into<String>) -> Self {
        Self::new(source, msg.into(), EventType::Success, LogLevel::Debug)
    }

    pub fn error(source: Source, msg: impl Into<String>, log_level: LogLevel) -> Self {
        Self::new(source, msg.into(), EventType::Error, log_level)
    }

    pub fn refresh(source: Source, msg: impl Into<String>) -> Self {
        Self::new(source, msg.into(), EventType::Refresh, LogLevel::Info)
    }

    pub fn waiting(source: Source, msg: impl Into<String>) -> Self {
        Self::new(source, msg.into(), EventType::Waiting, LogLevel::Debug)
    }

    pub fn should_display(&self) -> bool {
        // Errors and info level events are always shown
        if self.event_type == EventType::Error || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}
