pub mod dashboard_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all configuration constants for the dashboard,
    //! organized by functional area for clarity and maintainability.

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Buffer size of the channel carrying render updates to the UI
    pub const UPDATE_QUEUE_SIZE: usize = 100;

    /// Buffer size of the manual refresh command channel
    pub const COMMAND_QUEUE_SIZE: usize = 8;

    // =============================================================================
    // DISPLAY CONFIGURATION
    // =============================================================================

    /// Prefix for every rendered price.
    pub const CURRENCY_SYMBOL: &str = "₹";

    /// Shown in the table when a change value is absent.
    pub const MISSING_VALUE: &str = "--";

    /// The single row rendered for an empty price list.
    pub const NO_DATA_PLACEHOLDER: &str = "No data available";

    /// Refresh control labels.
    pub const REFRESH_LABEL_IDLE: &str = "Refresh Now";
    pub const REFRESH_LABEL_BUSY: &str = "Refreshing...";

    // =============================================================================
    // POLLING CONFIGURATION
    // =============================================================================

    /// Polling of recent prices
    pub mod polling {
        /// Period between recent price polls (seconds)
        pub const POLL_INTERVAL_SECS: u64 = 30;

        /// Number of recent prices requested per poll
        pub const DEFAULT_RECENT_LIMIT: u32 = 10;

        /// Default window for the history command (hours)
        pub const DEFAULT_HISTORY_HOURS: u32 = 24;
    }

    /// HTTP client configuration
    pub mod http {
        use std::time::Duration;

        /// Timeout for establishing a connection (seconds)
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Timeout for a whole request (seconds)
        pub const REQUEST_TIMEOUT_SECS: u64 = 10;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }
}
