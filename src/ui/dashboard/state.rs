//! Dashboard state management
//!
//! Holds the last rendered value of every panel. Panels only change when an
//! update arrives, so a failed request leaves the previous data on screen.

use crate::consts::dashboard_consts::MAX_ACTIVITY_LOGS;
use crate::environment::Environment;
use crate::events::Event;
use crate::price::ApiStatus;
use crate::renderer::Update;
use crate::ui::app::UIConfig;
use crate::view::{CurrentPriceView, PriceStats, PriceTable, RefreshControl};

use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct DashboardState {
    /// The environment in which the application is running.
    pub environment: Environment,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Period between recent price polls.
    pub poll_interval: Duration,
    /// Number of rows requested per poll.
    pub recent_limit: u32,
    /// Whether to enable background colors
    pub with_background_color: bool,

    /// Last rendered live quote.
    pub current_price: Option<CurrentPriceView>,
    /// Last rendered recent prices table.
    pub table: Option<PriceTable>,
    /// Last rendered stats.
    pub stats: Option<PriceStats>,
    /// Last health check result.
    pub api_status: Option<ApiStatus>,
    /// Queue of updates waiting to be applied
    pub pending_updates: VecDeque<Update>,
    /// Activity logs for display
    pub activity_logs: VecDeque<Event>,
    /// Animation tick counter
    pub tick: usize,

    refresh_control: RefreshControl,
    /// When the table was last replaced, for the poll countdown.
    last_table_update: Option<Instant>,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(environment: Environment, start_time: Instant, ui_config: UIConfig) -> Self {
        Self {
            environment,
            start_time,
            poll_interval: ui_config.poll_interval,
            recent_limit: ui_config.recent_limit,
            with_background_color: ui_config.with_background_color,
            current_price: None,
            table: None,
            stats: None,
            api_status: None,
            pending_updates: VecDeque::new(),
            activity_logs: VecDeque::new(),
            tick: 0,
            refresh_control: RefreshControl::Idle,
            last_table_update: None,
        }
    }

    pub fn refresh_control(&self) -> RefreshControl {
        self.refresh_control
    }

    pub fn set_refresh_control(&mut self, control: RefreshControl) {
        self.refresh_control = control;
    }

    pub fn last_table_update(&self) -> Option<Instant> {
        self.last_table_update
    }

    pub fn mark_table_updated(&mut self) {
        self.last_table_update = Some(Instant::now());
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an update to the processing queue
    pub fn add_update(&mut self, update: Update) {
        self.pending_updates.push_back(update);
    }
}
